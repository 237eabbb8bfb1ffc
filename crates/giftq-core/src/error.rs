//! Error types for the GIFT core.
//!
//! Every lookup and count mismatch surfaces as its own variant so callers can
//! render a specific message. Unjudged answers are not errors; they come back
//! as [`ValidationResult::NotValidated`](crate::model::ValidationResult).

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout `giftq-core`.
pub type Result<T> = std::result::Result<T, GiftError>;

/// Errors produced by the GIFT core.
#[derive(Debug, Error)]
pub enum GiftError {
    /// No question with this identifier exists in the corpus.
    #[error("question not found: {id}")]
    NotFound { id: String },

    /// The corpus directory does not exist.
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A block expected to carry `::title::body` does not.
    #[error("malformed question, expected `::title::body`: {block}")]
    MalformedQuestion { block: String },

    /// Submitted answers disagree with what the exam expects.
    #[error("{stage} count mismatch: exam expects {expected}, got {actual} answer(s)")]
    CountMismatch {
        stage: CountStage,
        expected: usize,
        actual: usize,
    },

    /// A source file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A search pattern built from user input could not be compiled.
    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The same question was requested twice for one exam.
    #[error("duplicate question in exam: {id}")]
    DuplicateQuestion { id: String },

    /// The requested exam has too few or too many questions.
    #[error("exam must contain between {min} and {max} questions, got {count}")]
    ExamSize {
        count: usize,
        min: usize,
        max: usize,
    },
}

/// Which count disagreed during answer validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountStage {
    /// Number of validatable questions.
    Questions,
    /// Number of extracted answer units.
    AnswerUnits,
}

impl fmt::Display for CountStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountStage::Questions => write!(f, "question"),
            CountStage::AnswerUnits => write!(f, "answer unit"),
        }
    }
}

impl GiftError {
    pub(crate) fn malformed(block: &str) -> Self {
        GiftError::MalformedQuestion {
            block: snippet(block),
        }
    }
}

fn snippet(block: &str) -> String {
    const MAX: usize = 60;
    let first_line = block.lines().next().unwrap_or_default();
    if first_line.chars().count() > MAX {
        let cut: String = first_line.chars().take(MAX).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    }
}
