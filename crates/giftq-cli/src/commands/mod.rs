//! Subcommand implementations.

pub mod compare;
pub mod contact;
pub mod evaluate;
pub mod find;
pub mod generate;
pub mod init;
pub mod profile;
pub mod visualize;

use std::path::Path;

use anyhow::{Context, Result};

use giftq_core::{load_config_from, Corpus, FsReader, GiftqConfig};

use crate::CorpusArgs;

/// Resolve the config and load every GIFT file under the data directory.
fn load_corpus(args: &CorpusArgs) -> Result<(GiftqConfig, Corpus)> {
    let mut config = load_config_from(args.config.as_deref())?;
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }

    let corpus = Corpus::load_directory(&config.data_dir, &config.extension, &FsReader)
        .with_context(|| format!("failed to load question database from {}", config.data_dir.display()))?;
    tracing::debug!(files = corpus.len(), "question database loaded");

    Ok((config, corpus))
}

fn read_exam(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read exam file: {}", path.display()))
}

/// Validate a `--format` value against the accepted set.
fn check_format(format: &str, accepted: &[&str]) -> Result<()> {
    if accepted.contains(&format) {
        Ok(())
    } else {
        anyhow::bail!(
            "unknown format: {format} (expected one of: {})",
            accepted.join(", ")
        )
    }
}
