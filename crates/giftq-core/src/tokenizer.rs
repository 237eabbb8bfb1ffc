//! Splitting GIFT text into question blocks.
//!
//! A block starts at a line beginning with `::` and runs until the next such
//! line or the end of the text.

use crate::error::Result;
use crate::model::QuestionBlock;
use crate::preprocess::preprocess;

const SENTINEL: &str = "::";
const LINE_SENTINEL: &str = "\n::";

/// Preprocessed text ready to be walked block by block.
///
/// Iteration depends only on the owned text, so [`Tokenized::blocks`] can be
/// called any number of times and always yields the same sequence.
#[derive(Debug, Clone)]
pub struct Tokenized {
    source: String,
}

/// Strip comments and categories, then prepare the text for block iteration.
pub fn tokenize(text: &str) -> Tokenized {
    Tokenized {
        source: preprocess(text),
    }
}

impl Tokenized {
    /// Raw blocks in file order, trimmed.
    pub fn blocks(&self) -> Blocks<'_> {
        split_blocks(&self.source)
    }

    /// Blocks split into title and body.
    pub fn questions(&self) -> impl Iterator<Item = Result<QuestionBlock>> + '_ {
        self.blocks().map(QuestionBlock::parse)
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks().count()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks().next().is_none()
    }
}

impl<'a> IntoIterator for &'a Tokenized {
    type Item = &'a str;
    type IntoIter = Blocks<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks()
    }
}

/// Iterate blocks of already-preprocessed text.
///
/// Text before the first sentinel line carries no title and is skipped.
pub fn split_blocks(text: &str) -> Blocks<'_> {
    let rest = if text.starts_with(SENTINEL) {
        text
    } else {
        match text.find(LINE_SENTINEL) {
            Some(pos) => &text[pos + 1..],
            None => "",
        }
    };

    let skipped = text.len() - rest.len();
    if skipped > 0 && !text[..skipped].trim().is_empty() {
        tracing::debug!(bytes = skipped, "ignoring text before first question");
    }

    Blocks { rest }
}

/// Iterator over raw question blocks. See [`split_blocks`].
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.rest.is_empty() {
            // `rest` always begins at a sentinel, so the first line-start
            // sentinel found is the next block boundary.
            let (block, rest) = match self.rest.find(LINE_SENTINEL) {
                Some(pos) => (&self.rest[..pos], &self.rest[pos + 1..]),
                None => (self.rest, ""),
            };
            self.rest = rest;

            let block = block.trim();
            if !block.is_empty() {
                return Some(block);
            }
        }
        None
    }
}
