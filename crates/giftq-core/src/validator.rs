//! Checking submitted answers against the keys embedded in an exam.
//!
//! Only True/False, Multiple Choice and Short Answer have comparison rules.
//! Matching and Numerical answers are extracted but never judged; they come
//! back as [`ValidationResult::NotValidated`].

use serde::Serialize;

use crate::classifier::{answer_constructs, classify};
use crate::error::{CountStage, GiftError, Result};
use crate::model::{QuestionType, ValidationResult};
use crate::tokenizer::tokenize;

const CORRECT_MARKER: char = '=';
const WRONG_MARKER: char = '~';

/// One answer key span, tagged with its question's type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerUnit {
    pub question_type: QuestionType,
    /// Text inside the braces.
    pub span: String,
}

/// Answer units of every validatable question, flattened in document order.
pub fn extract_answer_units(exam_text: &str) -> Vec<AnswerUnit> {
    let tokens = tokenize(exam_text);
    validatable_blocks(tokens.blocks())
        .flat_map(|(question_type, block)| units_of(question_type, block))
        .collect()
}

/// Judge each submitted answer against the exam's answer keys.
///
/// Essay and Description questions take no answer. Fails with
/// [`GiftError::CountMismatch`] when the number of answers differs from the
/// number of validatable questions or from the number of extracted answer
/// units; nothing is validated in that case.
pub fn validate<S: AsRef<str>>(exam_text: &str, answers: &[S]) -> Result<Vec<ValidationResult>> {
    let tokens = tokenize(exam_text);
    let questions: Vec<_> = validatable_blocks(tokens.blocks()).collect();
    ensure_count(CountStage::Questions, questions.len(), answers.len())?;

    let units: Vec<AnswerUnit> = questions
        .into_iter()
        .flat_map(|(question_type, block)| units_of(question_type, block))
        .collect();
    ensure_count(CountStage::AnswerUnits, units.len(), answers.len())?;

    let results: Vec<ValidationResult> = units
        .iter()
        .zip(answers)
        .map(|(unit, answer)| judge(unit, answer.as_ref()))
        .collect();

    let unjudged = results
        .iter()
        .filter(|r| **r == ValidationResult::NotValidated)
        .count();
    if unjudged > 0 {
        tracing::warn!(unjudged, "some answers have no comparison rule and were not validated");
    }

    Ok(results)
}

fn validatable_blocks<'a>(
    blocks: impl Iterator<Item = &'a str>,
) -> impl Iterator<Item = (QuestionType, &'a str)> {
    blocks
        .map(|block| (classify(block), block))
        .filter(|(question_type, _)| question_type.is_validatable())
}

fn units_of(question_type: QuestionType, block: &str) -> impl Iterator<Item = AnswerUnit> + '_ {
    answer_constructs(block).map(move |span| AnswerUnit {
        question_type,
        span: span.to_string(),
    })
}

fn ensure_count(stage: CountStage, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(GiftError::CountMismatch {
            stage,
            expected,
            actual,
        })
    }
}

fn judge(unit: &AnswerUnit, answer: &str) -> ValidationResult {
    match unit.question_type {
        QuestionType::TrueFalse => match unit.span.trim() {
            key @ ("T" | "F") => ValidationResult::from_match(key == answer),
            _ => ValidationResult::NotValidated,
        },
        QuestionType::MultipleChoice => match correct_choice(&unit.span) {
            Some(choice) => ValidationResult::from_match(choice == answer),
            None => ValidationResult::NotValidated,
        },
        QuestionType::ShortAnswer => {
            let variants = accepted_variants(&unit.span);
            if variants.is_empty() {
                ValidationResult::NotValidated
            } else {
                ValidationResult::from_match(variants.contains(&answer))
            }
        }
        // No comparison rule exists for these.
        QuestionType::Matching
        | QuestionType::Numerical
        | QuestionType::Essay
        | QuestionType::Description => ValidationResult::NotValidated,
    }
}

/// Text after the first `=` up to the next `~` or the end.
fn correct_choice(span: &str) -> Option<&str> {
    let (_, after) = span.split_once(CORRECT_MARKER)?;
    let choice = after.split(WRONG_MARKER).next().unwrap_or_default().trim();
    Some(choice)
}

/// Every variant introduced by a `=` marker.
fn accepted_variants(span: &str) -> Vec<&str> {
    span.split(CORRECT_MARKER)
        .skip(1)
        .map(|variant| variant.split(WRONG_MARKER).next().unwrap_or_default().trim())
        .filter(|variant| !variant.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    #[test]
    fn true_false_correct_and_incorrect() {
        assert_eq!(validate("::Q1::{T}", &["T"]).unwrap(), vec![ValidationResult::Correct]);
        assert_eq!(validate("::Q1::{T}", &["F"]).unwrap(), vec![ValidationResult::Incorrect]);
    }

    #[test]
    fn essays_take_no_answer() {
        let exam = "::Q1::{T}\n::Q2::{}";
        assert_eq!(validate(exam, &["T"]).unwrap(), vec![ValidationResult::Correct]);
    }

    #[test]
    fn missing_answer_is_count_mismatch() {
        let err = validate("::Q1::{T}\n::Q2::{}", NONE).unwrap_err();
        assert!(matches!(
            err,
            GiftError::CountMismatch {
                stage: CountStage::Questions,
                expected: 1,
                actual: 0
            }
        ));
    }

    #[test]
    fn extra_blanks_are_answer_unit_mismatch() {
        // Two validatable questions, three answer units.
        let exam = "::Q1::Fill {=a} and {=b}\n::Q2::{T}";
        let err = validate(exam, &["a", "T"]).unwrap_err();
        assert!(matches!(
            err,
            GiftError::CountMismatch {
                stage: CountStage::AnswerUnits,
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn multiple_choice_uses_marked_option() {
        let exam = "::Q1::Capital of France? {=Paris ~Lyon ~Marseille}";
        assert_eq!(validate(exam, &["Paris"]).unwrap(), vec![ValidationResult::Correct]);
        assert_eq!(validate(exam, &["Lyon"]).unwrap(), vec![ValidationResult::Incorrect]);
    }

    #[test]
    fn multiple_choice_correct_option_not_first() {
        let exam = "::Q1::Largest planet? {~Mars =Jupiter ~Venus}";
        assert_eq!(validate(exam, &["Jupiter"]).unwrap(), vec![ValidationResult::Correct]);
    }

    #[test]
    fn multiple_choice_without_key_is_not_validated() {
        let exam = "::Q1::Pick any {~a ~b}";
        assert_eq!(validate(exam, &["a"]).unwrap(), vec![ValidationResult::NotValidated]);
    }

    #[test]
    fn short_answer_accepts_any_variant() {
        let exam = "::Q1::A household pet {=cat =dog}";
        assert_eq!(validate(exam, &["dog"]).unwrap(), vec![ValidationResult::Correct]);
        assert_eq!(validate(exam, &["cow"]).unwrap(), vec![ValidationResult::Incorrect]);
    }

    #[test]
    fn matching_and_numerical_are_not_validated() {
        let exam = "::Q1::Pair {=a -> 1 =b -> 2}\n::Q2::Pi {#3.14}";
        assert_eq!(
            validate(exam, &["a -> 1", "3.14"]).unwrap(),
            vec![ValidationResult::NotValidated, ValidationResult::NotValidated]
        );
    }

    #[test]
    fn results_follow_answer_order() {
        let exam = "::Q1::{T}\n::Q2::Intro text\n::Q3::{=x ~y}\n::Q4::{F}";
        let results = validate(exam, &["T", "y", "F"]).unwrap();
        assert_eq!(
            results,
            vec![
                ValidationResult::Correct,
                ValidationResult::Incorrect,
                ValidationResult::Correct
            ]
        );
    }

    #[test]
    fn extraction_is_tagged_and_ordered() {
        let units = extract_answer_units("::Q1::{T}\n::Q2::{}\n::Q3::{=x ~y}");
        assert_eq!(
            units,
            vec![
                AnswerUnit {
                    question_type: QuestionType::TrueFalse,
                    span: "T".into()
                },
                AnswerUnit {
                    question_type: QuestionType::MultipleChoice,
                    span: "=x ~y".into()
                },
            ]
        );
    }

    #[test]
    fn byte_order_mark_does_not_hide_first_question() {
        let exam = "\u{FEFF}::Q1:: Earth is round {T}\n::Q2:: Sun is cold {F}";
        assert_eq!(
            validate(exam, &["T", "T"]).unwrap(),
            vec![ValidationResult::Correct, ValidationResult::Incorrect]
        );
    }

    #[test]
    fn owned_answers_are_accepted() {
        let answers = vec!["T".to_string()];
        assert_eq!(validate("::Q1::{T}", &answers).unwrap(), vec![ValidationResult::Correct]);
    }
}
