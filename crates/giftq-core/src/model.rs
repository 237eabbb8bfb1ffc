//! Core data model types for giftq.
//!
//! These are the types shared by the tokenizer, classifier, locator,
//! aggregator and validator.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GiftError, Result};

/// The answer-construct type of a question.
///
/// Variants are declared in classification priority order, which is also the
/// order maps iterate in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    TrueFalse,
    Numerical,
    Matching,
    ShortAnswer,
    MultipleChoice,
    Essay,
    Description,
}

impl QuestionType {
    /// All types, in priority order.
    pub const ALL: [QuestionType; 7] = [
        QuestionType::TrueFalse,
        QuestionType::Numerical,
        QuestionType::Matching,
        QuestionType::ShortAnswer,
        QuestionType::MultipleChoice,
        QuestionType::Essay,
        QuestionType::Description,
    ];

    /// Whether answers to this type can be checked against a key.
    pub fn is_validatable(self) -> bool {
        !matches!(self, QuestionType::Essay | QuestionType::Description)
    }

    /// Human-readable label used in tables and charts.
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::TrueFalse => "True/False",
            QuestionType::Numerical => "Numerical",
            QuestionType::Matching => "Matching",
            QuestionType::ShortAnswer => "Short Answer",
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::Essay => "Essay",
            QuestionType::Description => "Description",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One question, split into its title and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBlock {
    /// Text between the two `::` markers, trimmed.
    pub title: String,
    /// Text after the closing `::` up to the next `::` or end, trimmed.
    pub body: String,
    /// The untouched block as produced by the tokenizer.
    #[serde(skip_serializing)]
    #[serde(default)]
    pub raw_text: String,
}

impl QuestionBlock {
    /// Split a raw block into title and body.
    ///
    /// Fails with [`GiftError::MalformedQuestion`] when no `::title::` pair
    /// is present or either part is empty after trimming.
    pub fn parse(raw: &str) -> Result<Self> {
        let open = raw.find("::").ok_or_else(|| GiftError::malformed(raw))?;
        let after_open = &raw[open + 2..];
        let close = after_open
            .find("::")
            .ok_or_else(|| GiftError::malformed(raw))?;

        let title = after_open[..close].trim();
        let rest = &after_open[close + 2..];
        let body = match rest.find("::") {
            Some(end) => &rest[..end],
            None => rest,
        }
        .trim();

        if title.is_empty() || body.is_empty() {
            return Err(GiftError::malformed(raw));
        }

        Ok(Self {
            title: title.to_string(),
            body: body.to_string(),
            raw_text: raw.to_string(),
        })
    }
}

/// Per-type question counts. All seven types are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<QuestionType, usize>",
    into = "BTreeMap<QuestionType, usize>"
)]
pub struct TypeCountMap {
    counts: BTreeMap<QuestionType, usize>,
}

impl TypeCountMap {
    pub fn new() -> Self {
        Self {
            counts: QuestionType::ALL.iter().map(|&t| (t, 0)).collect(),
        }
    }

    pub fn increment(&mut self, question_type: QuestionType) {
        *self.counts.entry(question_type).or_insert(0) += 1;
    }

    pub fn get(&self, question_type: QuestionType) -> usize {
        self.counts.get(&question_type).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate `(type, count)` in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionType, usize)> + '_ {
        self.counts.iter().map(|(&t, &c)| (t, c))
    }
}

impl Default for TypeCountMap {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<QuestionType> for TypeCountMap {
    fn from_iter<I: IntoIterator<Item = QuestionType>>(iter: I) -> Self {
        let mut map = Self::new();
        for t in iter {
            map.increment(t);
        }
        map
    }
}

impl From<BTreeMap<QuestionType, usize>> for TypeCountMap {
    fn from(partial: BTreeMap<QuestionType, usize>) -> Self {
        let mut map = Self::new();
        map.counts.extend(partial);
        map
    }
}

impl From<TypeCountMap> for BTreeMap<QuestionType, usize> {
    fn from(map: TypeCountMap) -> Self {
        map.counts
    }
}

/// Running per-type means across a number of files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAverageMap {
    /// Number of files folded in so far.
    pub files: usize,
    means: BTreeMap<QuestionType, f64>,
}

impl TypeAverageMap {
    pub fn new() -> Self {
        Self {
            files: 0,
            means: QuestionType::ALL.iter().map(|&t| (t, 0.0)).collect(),
        }
    }

    /// Fold one more file's counts into the running means.
    ///
    /// avg' = (avg * (n - 1) + count) / n
    pub fn fold(&mut self, counts: &TypeCountMap) {
        self.files += 1;
        let n = self.files as f64;
        for (t, mean) in self.means.iter_mut() {
            *mean = (*mean * (n - 1.0) + counts.get(*t) as f64) / n;
        }
    }

    pub fn get(&self, question_type: QuestionType) -> f64 {
        self.means.get(&question_type).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionType, f64)> + '_ {
        self.means.iter().map(|(&t, &m)| (t, m))
    }
}

impl Default for TypeAverageMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of checking one submitted answer.
///
/// Serializes as JSON `true`, `false` or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum ValidationResult {
    Correct,
    Incorrect,
    /// The answer was extracted but this type has no comparison rule.
    NotValidated,
}

impl ValidationResult {
    pub fn from_match(matched: bool) -> Self {
        if matched {
            ValidationResult::Correct
        } else {
            ValidationResult::Incorrect
        }
    }
}

impl From<ValidationResult> for Option<bool> {
    fn from(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Correct => Some(true),
            ValidationResult::Incorrect => Some(false),
            ValidationResult::NotValidated => None,
        }
    }
}

impl From<Option<bool>> for ValidationResult {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(matched) => ValidationResult::from_match(matched),
            None => ValidationResult::NotValidated,
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationResult::Correct => write!(f, "true"),
            ValidationResult::Incorrect => write!(f, "false"),
            ValidationResult::NotValidated => write!(f, "null"),
        }
    }
}
