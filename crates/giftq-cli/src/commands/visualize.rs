//! The `giftq visualize` command.

use std::path::PathBuf;

use anyhow::Result;

use giftq_core::type_averages;
use giftq_report::{render_text_chart, write_svg_chart, ChartSeries};

use super::{check_format, load_corpus};
use crate::CorpusArgs;

pub fn execute(format: String, output: PathBuf, corpus_args: CorpusArgs) -> Result<()> {
    check_format(&format, &["text", "svg"])?;

    let (_, corpus) = load_corpus(&corpus_args)?;
    let averages = type_averages(&corpus);
    let series = ChartSeries::from_averages(
        format!("Average questions per file ({} files)", averages.files),
        &averages,
    );

    if format == "svg" {
        write_svg_chart(&series, &output)?;
        println!("Chart written to {}", output.display());
    } else {
        print!("{}", render_text_chart(&series));
    }

    Ok(())
}
