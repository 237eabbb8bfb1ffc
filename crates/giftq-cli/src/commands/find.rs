//! The `giftq find` command.

use anyhow::Result;

use giftq_core::{find_by_id, find_by_query, find_raw_by_id, GiftError, LocatedQuestion};

use super::load_corpus;
use crate::CorpusArgs;

pub fn execute(
    id: Option<String>,
    query: Option<String>,
    raw: bool,
    corpus_args: CorpusArgs,
) -> Result<()> {
    let (_, corpus) = load_corpus(&corpus_args)?;

    match (id, query) {
        (Some(id), _) if raw => {
            let matches = find_raw_by_id(&id, &corpus)?;
            if matches.is_empty() {
                return Err(GiftError::NotFound { id }.into());
            }
            for m in &matches {
                println!("// {}\n{}\n", m.path.display(), m.raw_text);
            }
        }
        (Some(id), _) => {
            let found = find_by_id(&id, &corpus)?;
            if found.is_empty() {
                return Err(GiftError::NotFound { id }.into());
            }
            if found.len() > 1 {
                tracing::warn!(id = %id, files = found.len(), "question title is not unique");
            }
            print_questions(&found);
        }
        (None, Some(query)) => {
            let found = find_by_query(&query, &corpus)?;
            if found.is_empty() {
                println!("No questions match \"{query}\".");
            } else {
                println!("{} question(s) match \"{query}\":\n", found.len());
                print_questions(&found);
            }
        }
        (None, None) => anyhow::bail!("either --id or --query must be given"),
    }

    Ok(())
}

fn print_questions(found: &[LocatedQuestion]) {
    for located in found {
        println!("{}  ({})", located.question.title, located.path.display());
        for line in located.question.body.lines() {
            println!("    {line}");
        }
        println!();
    }
}
