//! The `giftq compare` command.

use std::path::PathBuf;

use anyhow::Result;

use giftq_core::{compare_profile, type_averages, type_counts};

use super::{check_format, load_corpus, read_exam};
use crate::CorpusArgs;

pub fn execute(exam: PathBuf, format: String, corpus_args: CorpusArgs) -> Result<()> {
    check_format(&format, &["text", "json"])?;

    let text = read_exam(&exam)?;
    let (_, corpus) = load_corpus(&corpus_args)?;

    let averages = type_averages(&corpus);
    let rows = compare_profile(&type_counts(&text), &averages);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Type", "Exam", "Database avg", "Difference"]);
    for row in &rows {
        table.add_row(vec![
            Cell::new(row.question_type),
            Cell::new(row.exam_count),
            Cell::new(format!("{:.2}", row.corpus_average)),
            Cell::new(format!("{:+.2}", row.difference)),
        ]);
    }

    println!(
        "{} compared with {} database file(s)\n{table}",
        exam.display(),
        averages.files
    );
    Ok(())
}
