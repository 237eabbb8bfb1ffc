//! The `giftq evaluate` command.

use std::path::PathBuf;

use anyhow::Result;

use giftq_core::{extract_answer_units, validate, ValidationResult};

use super::{check_format, read_exam};

pub fn execute(exam: PathBuf, answers: Vec<String>, format: String) -> Result<()> {
    check_format(&format, &["text", "json"])?;

    let answers: Vec<String> = answers.iter().map(|a| a.trim().to_string()).collect();
    // `--answers ""` means no answers at all.
    let answers = if answers.len() == 1 && answers[0].is_empty() {
        Vec::new()
    } else {
        answers
    };

    let text = read_exam(&exam)?;
    let results = validate(&text, &answers)?;

    if format == "json" {
        println!("{}", serde_json::to_string(&results)?);
        return Ok(());
    }

    use comfy_table::{Cell, Table};

    let units = extract_answer_units(&text);
    let mut table = Table::new();
    table.set_header(vec!["#", "Type", "Answer", "Result"]);
    for (i, ((unit, answer), result)) in units.iter().zip(&answers).zip(&results).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(unit.question_type),
            Cell::new(answer),
            Cell::new(result),
        ]);
    }
    println!("{table}");

    let tally = |wanted: ValidationResult| results.iter().filter(|r| **r == wanted).count();
    println!(
        "{} correct, {} incorrect, {} not validated",
        tally(ValidationResult::Correct),
        tally(ValidationResult::Incorrect),
        tally(ValidationResult::NotValidated)
    );

    Ok(())
}
