//! giftq-core — GIFT question parsing, classification and validation.
//!
//! This crate turns raw GIFT exam text into question blocks, classifies each
//! block by its answer construct, locates questions across a corpus of files,
//! aggregates type statistics and checks submitted answers against the keys
//! embedded in the questions.

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod locator;
pub mod model;
pub mod preprocess;
pub mod statistics;
pub mod tokenizer;
pub mod validator;

pub use classifier::classify;
pub use config::{load_config_from, GiftqConfig};
pub use corpus::{Corpus, CorpusEntry, FsReader, SourceReader};
pub use error::{CountStage, GiftError, Result};
pub use export::{build_exam, export_raw};
pub use locator::{find_by_id, find_by_query, find_raw_by_id, LocatedQuestion, RawMatch};
pub use model::{QuestionBlock, QuestionType, TypeAverageMap, TypeCountMap, ValidationResult};
pub use statistics::{compare_profile, type_averages, type_counts, TypeComparison};
pub use tokenizer::tokenize;
pub use validator::{extract_answer_units, validate, AnswerUnit};
