//! The `giftq generate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use giftq_core::build_exam;

use super::load_corpus;
use crate::CorpusArgs;

pub fn execute(ids: Vec<String>, output: PathBuf, corpus_args: CorpusArgs) -> Result<()> {
    let ids: Vec<String> = ids
        .into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect();
    anyhow::ensure!(!ids.is_empty(), "at least one question id is required");

    let (config, corpus) = load_corpus(&corpus_args)?;
    let exam = build_exam(&ids, &corpus, &config)?;

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut content = exam;
    content.push('\n');
    std::fs::write(&output, content)
        .with_context(|| format!("failed to write exam to {}", output.display()))?;

    println!("Wrote {} question(s) to {}", ids.len(), output.display());
    Ok(())
}
