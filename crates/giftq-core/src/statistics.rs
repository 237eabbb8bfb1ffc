//! Question type statistics for single exams and whole corpora.

use serde::{Deserialize, Serialize};

use crate::classifier::classify;
use crate::corpus::Corpus;
use crate::model::{QuestionType, TypeAverageMap, TypeCountMap};
use crate::tokenizer::tokenize;

/// Count questions of each type in one document.
pub fn type_counts(text: &str) -> TypeCountMap {
    tokenize(text).blocks().map(classify).collect()
}

/// Running per-type averages over every file in the corpus.
///
/// Files are folded in corpus order, one at a time.
pub fn type_averages(corpus: &Corpus) -> TypeAverageMap {
    corpus
        .iter()
        .fold(TypeAverageMap::new(), |mut averages, entry| {
            let counts = type_counts(&entry.text);
            tracing::debug!(
                path = %entry.path.display(),
                questions = counts.total(),
                "folding file into averages"
            );
            averages.fold(&counts);
            averages
        })
}

/// One row of an exam-versus-corpus comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeComparison {
    pub question_type: QuestionType,
    /// Questions of this type in the exam.
    pub exam_count: usize,
    /// Average questions of this type per corpus file.
    pub corpus_average: f64,
    /// `exam_count - corpus_average`.
    pub difference: f64,
}

/// Compare an exam's profile against corpus averages, in priority order.
pub fn compare_profile(exam: &TypeCountMap, corpus: &TypeAverageMap) -> Vec<TypeComparison> {
    QuestionType::ALL
        .iter()
        .map(|&question_type| {
            let exam_count = exam.get(question_type);
            let corpus_average = corpus.get(question_type);
            TypeComparison {
                question_type,
                exam_count,
                corpus_average,
                difference: exam_count as f64 - corpus_average,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusEntry;

    const EXAM: &str = "\
::Q1::2+2=4 {T}
::Q2::Pi {#3.14}
::Q3::Pair {=a -> 1 =b -> 2}
::Q4::Animal {=cat =dog}
::Q5::Capital {=Paris ~Lyon}
::Q6::Essay {}
::Q7::Read this.
::Q8::Another {F}
";

    #[test]
    fn counts_every_type() {
        let counts = type_counts(EXAM);
        assert_eq!(counts.get(QuestionType::TrueFalse), 2);
        assert_eq!(counts.get(QuestionType::Numerical), 1);
        assert_eq!(counts.get(QuestionType::Matching), 1);
        assert_eq!(counts.get(QuestionType::ShortAnswer), 1);
        assert_eq!(counts.get(QuestionType::MultipleChoice), 1);
        assert_eq!(counts.get(QuestionType::Essay), 1);
        assert_eq!(counts.get(QuestionType::Description), 1);
    }

    #[test]
    fn counts_sum_to_block_count() {
        for text in [EXAM, "", "// only a comment", "::A::{T}\n::B::x", "pre\n::A::{}"] {
            assert_eq!(type_counts(text).total(), tokenize(text).len(), "text: {text:?}");
        }
    }

    #[test]
    fn averages_of_identical_files_equal_counts() {
        let corpus: Corpus = (0..4)
            .map(|i| CorpusEntry::new(format!("exam{i}.gift"), EXAM))
            .collect();
        let averages = type_averages(&corpus);
        let counts = type_counts(EXAM);
        assert_eq!(averages.files, 4);
        for (t, count) in counts.iter() {
            assert!((averages.get(t) - count as f64).abs() < 1e-9, "{t}");
        }
    }

    #[test]
    fn averages_of_mixed_files() {
        let corpus = Corpus::new(vec![
            CorpusEntry::new("a.gift", "::A::{T}\n::B::{T}\n::C::{}"),
            CorpusEntry::new("b.gift", "::A::{}"),
        ]);
        let averages = type_averages(&corpus);
        assert!((averages.get(QuestionType::TrueFalse) - 1.0).abs() < 1e-9);
        assert!((averages.get(QuestionType::Essay) - 1.0).abs() < 1e-9);
        assert_eq!(averages.get(QuestionType::Matching), 0.0);
    }

    #[test]
    fn empty_corpus_averages_are_zero() {
        let averages = type_averages(&Corpus::default());
        assert_eq!(averages.files, 0);
        assert!(averages.iter().all(|(_, m)| m == 0.0));
    }

    #[test]
    fn compare_profile_rows() {
        let exam = type_counts("::A::{T}\n::B::{T}");
        let mut corpus = TypeAverageMap::new();
        corpus.fold(&type_counts("::A::{T}\n::B::{}"));

        let rows = compare_profile(&exam, &corpus);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].question_type, QuestionType::TrueFalse);
        assert_eq!(rows[0].exam_count, 2);
        assert!((rows[0].difference - 1.0).abs() < 1e-9);
        let essay = rows.iter().find(|r| r.question_type == QuestionType::Essay).unwrap();
        assert!((essay.difference + 1.0).abs() < 1e-9);
    }
}
