//! The `giftq profile` command.

use std::path::PathBuf;

use anyhow::Result;

use giftq_core::type_counts;

use super::{check_format, read_exam};

pub fn execute(exam: PathBuf, format: String) -> Result<()> {
    check_format(&format, &["text", "json"])?;

    let text = read_exam(&exam)?;
    let counts = type_counts(&text);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Type", "Questions"]);
    for (question_type, count) in counts.iter() {
        table.add_row(vec![Cell::new(question_type), Cell::new(count)]);
    }
    table.add_row(vec![Cell::new("Total"), Cell::new(counts.total())]);

    println!("Profile of {}\n{table}", exam.display());
    Ok(())
}
