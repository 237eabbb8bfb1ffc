//! Question type classification.
//!
//! A block is classified by the shape of its brace-delimited answer
//! constructs. The shapes overlap, so rules are tried in a fixed order and
//! the first one satisfied by any construct in the block wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::QuestionType;

/// `{ ... }` with no nested braces. Content may span lines.
static ANSWER_CONSTRUCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("answer construct pattern is valid"));

type Rule = (fn(&str) -> bool, QuestionType);

/// Classification rules in priority order. Do not reorder: later shapes
/// accept inputs that earlier ones already claim.
const RULES: &[Rule] = &[
    (is_true_false, QuestionType::TrueFalse),
    (is_numerical, QuestionType::Numerical),
    (is_matching, QuestionType::Matching),
    (is_short_answer, QuestionType::ShortAnswer),
    (is_multiple_choice, QuestionType::MultipleChoice),
    (is_essay, QuestionType::Essay),
];

/// Classify one block by its answer constructs.
///
/// Blocks without any recognizable construct are [`QuestionType::Description`].
pub fn classify(block: &str) -> QuestionType {
    let constructs: Vec<&str> = answer_constructs(block).collect();

    RULES
        .iter()
        .find(|(accepts, _)| constructs.iter().any(|c| accepts(c)))
        .map(|&(_, question_type)| question_type)
        .unwrap_or(QuestionType::Description)
}

/// The contents of every `{ ... }` construct in `text`, in document order.
pub fn answer_constructs(text: &str) -> impl Iterator<Item = &str> {
    ANSWER_CONSTRUCT
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

fn is_true_false(content: &str) -> bool {
    matches!(content.trim(), "T" | "F")
}

fn is_numerical(content: &str) -> bool {
    content.trim_start().starts_with('#')
}

fn is_matching(content: &str) -> bool {
    content.contains("->")
}

fn is_short_answer(content: &str) -> bool {
    content.contains('=') && !content.contains('~')
}

fn is_multiple_choice(content: &str) -> bool {
    (content.contains('~') || content.contains('=')) && !content.contains("->")
}

fn is_essay(content: &str) -> bool {
    content.trim().is_empty()
}
