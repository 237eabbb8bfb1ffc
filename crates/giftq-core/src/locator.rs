//! Finding questions across a corpus by title or by free-text query.
//!
//! Identifiers and queries are user input and may contain regex
//! metacharacters, so both are escaped before a pattern is built.

use std::path::PathBuf;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::corpus::Corpus;
use crate::error::Result;
use crate::model::QuestionBlock;
use crate::tokenizer::tokenize;

/// A parsed question and the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatedQuestion {
    pub path: PathBuf,
    pub question: QuestionBlock,
}

/// An unparsed block and the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawMatch {
    pub path: PathBuf,
    pub raw_text: String,
}

/// Untouched block text for the question titled `id`, at most one per file.
pub fn find_raw_by_id(id: &str, corpus: &Corpus) -> Result<Vec<RawMatch>> {
    let pattern = title_pattern(id)?;

    let matches: Vec<RawMatch> = corpus
        .iter()
        .filter_map(|entry| {
            let tokens = tokenize(&entry.text);
            tokens
                .blocks()
                .find(|block| pattern.is_match(block))
                .map(|block| RawMatch {
                    path: entry.path.clone(),
                    raw_text: block.to_string(),
                })
        })
        .collect();

    tracing::debug!(id, matches = matches.len(), "lookup by id");
    Ok(matches)
}

/// Questions titled `id`, at most one per file, split into title and body.
///
/// More than one result means the title is duplicated across files.
pub fn find_by_id(id: &str, corpus: &Corpus) -> Result<Vec<LocatedQuestion>> {
    find_raw_by_id(id, corpus)?
        .into_iter()
        .map(|m| {
            Ok(LocatedQuestion {
                question: QuestionBlock::parse(&m.raw_text)?,
                path: m.path,
            })
        })
        .collect()
}

/// Every question whose text contains `query` as a whole word, ignoring case.
pub fn find_by_query(query: &str, corpus: &Corpus) -> Result<Vec<LocatedQuestion>> {
    let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(query)))
        .case_insensitive(true)
        .build()?;

    let mut found = Vec::new();
    for entry in corpus {
        let tokens = tokenize(&entry.text);
        for block in tokens.blocks().filter(|block| pattern.is_match(block)) {
            found.push(LocatedQuestion {
                path: entry.path.clone(),
                question: QuestionBlock::parse(block)?,
            });
        }
    }

    tracing::debug!(query, matches = found.len(), "lookup by query");
    Ok(found)
}

/// Matches a block whose title, once trimmed, is exactly `id`.
fn title_pattern(id: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(r"^::\s*{}\s*::", regex::escape(id)))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusEntry;

    fn corpus() -> Corpus {
        Corpus::new(vec![
            CorpusEntry::new(
                "animals.gift",
                "// pets\n::Q1:: Is a cat a mammal? {T}\n\n::Q10:: Which category fits a dog? {=mammal ~fish}\n",
            ),
            CorpusEntry::new(
                "symbols.gift",
                "::What is 1+1? (a.k.a. [sum])::Pick {=2 ~3}\n::Q1:: Duplicate title {F}\n",
            ),
        ])
    }

    #[test]
    fn by_id_exact_title() {
        let found = find_by_id("Q1", &corpus()).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].path, PathBuf::from("animals.gift"));
        assert_eq!(found[0].question.body, "Is a cat a mammal? {T}");
        assert_eq!(found[1].question.body, "Duplicate title {F}");
    }

    #[test]
    fn by_id_does_not_match_prefix() {
        let found = find_by_id("Q", &corpus()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn by_id_escapes_metacharacters() {
        let found = find_by_id("What is 1+1? (a.k.a. [sum])", &corpus()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].question.body, "Pick {=2 ~3}");
    }

    #[test]
    fn by_id_is_idempotent() {
        let c = corpus();
        assert_eq!(find_by_id("Q10", &c).unwrap(), find_by_id("Q10", &c).unwrap());
    }

    #[test]
    fn by_id_at_most_one_per_file() {
        let c = Corpus::new(vec![CorpusEntry::new(
            "dupes.gift",
            "::Q1::first {T}\n::Q1::second {F}",
        )]);
        let found = find_by_id("Q1", &c).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].question.body, "first {T}");
    }

    #[test]
    fn raw_by_id_keeps_block_text() {
        let found = find_raw_by_id("Q10", &corpus()).unwrap();
        assert_eq!(
            found[0].raw_text,
            "::Q10:: Which category fits a dog? {=mammal ~fish}"
        );
    }

    #[test]
    fn by_query_whole_word() {
        let found = find_by_query("cat", &corpus()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].question.title, "Q1");
    }

    #[test]
    fn by_query_case_insensitive() {
        let found = find_by_query("MAMMAL", &corpus()).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn by_query_escapes_metacharacters() {
        let found = find_by_query("a.k.a", &corpus()).unwrap();
        assert_eq!(found.len(), 1);
        assert!(find_by_query("a.k.b", &corpus()).unwrap().is_empty());
    }

    #[test]
    fn comment_lines_are_not_searched() {
        assert!(find_by_query("pets", &corpus()).unwrap().is_empty());
    }
}
