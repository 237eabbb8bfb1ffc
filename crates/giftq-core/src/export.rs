//! Assembling exams from questions already in the corpus.

use std::collections::HashSet;

use crate::config::GiftqConfig;
use crate::corpus::Corpus;
use crate::error::{GiftError, Result};
use crate::locator::find_raw_by_id;

/// Blocks are separated by two blank lines.
const BLOCK_SEPARATOR: &str = "\n\n\n";

/// Concatenate the raw text of each requested question, in request order.
///
/// When a title appears in several files the first file wins. Fails with
/// [`GiftError::NotFound`] naming the first identifier with no match.
pub fn export_raw<S: AsRef<str>>(ids: &[S], corpus: &Corpus) -> Result<String> {
    let blocks = ids
        .iter()
        .map(|id| {
            let id = id.as_ref();
            find_raw_by_id(id, corpus)?
                .into_iter()
                .next()
                .map(|m| m.raw_text)
                .ok_or_else(|| GiftError::NotFound { id: id.to_string() })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(blocks.join(BLOCK_SEPARATOR))
}

/// Build an exam file, enforcing uniqueness and the configured size bounds.
pub fn build_exam<S: AsRef<str>>(ids: &[S], corpus: &Corpus, config: &GiftqConfig) -> Result<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    for id in ids {
        let id = id.as_ref();
        if !seen.insert(id) {
            return Err(GiftError::DuplicateQuestion { id: id.to_string() });
        }
    }

    if !config.accepts_exam_size(ids.len()) {
        return Err(GiftError::ExamSize {
            count: ids.len(),
            min: config.min_questions,
            max: config.max_questions,
        });
    }

    let exam = export_raw(ids, corpus)?;
    tracing::info!(questions = ids.len(), "built exam");
    Ok(exam)
}
