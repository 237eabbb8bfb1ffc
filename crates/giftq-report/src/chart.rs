//! Bar charts of question type distributions.
//!
//! Two renderers share one input: a plain-text chart for the terminal and a
//! self-contained SVG file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use giftq_core::{QuestionType, TypeAverageMap, TypeCountMap};

const TEXT_BAR_WIDTH: usize = 40;

/// A titled list of `(type, value)` bars in priority order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub bars: Vec<(QuestionType, f64)>,
}

impl ChartSeries {
    pub fn from_counts(title: impl Into<String>, counts: &TypeCountMap) -> Self {
        Self {
            title: title.into(),
            bars: counts.iter().map(|(t, c)| (t, c as f64)).collect(),
        }
    }

    pub fn from_averages(title: impl Into<String>, averages: &TypeAverageMap) -> Self {
        Self {
            title: title.into(),
            bars: averages.iter().collect(),
        }
    }

    fn max_value(&self) -> f64 {
        self.bars.iter().map(|&(_, v)| v).fold(0.0, f64::max)
    }
}

/// Render a fixed-width text chart, one line per type.
pub fn render_text_chart(series: &ChartSeries) -> String {
    let label_width = series
        .bars
        .iter()
        .map(|(t, _)| t.label().len())
        .max()
        .unwrap_or(0);
    let max = series.max_value();

    let mut out = format!("{}\n", series.title);
    for (question_type, value) in &series.bars {
        let filled = scaled(*value, max, TEXT_BAR_WIDTH);
        out.push_str(&format!(
            "{:>label_width$} | {}{} {}\n",
            question_type.label(),
            "#".repeat(filled),
            " ".repeat(TEXT_BAR_WIDTH - filled),
            format_value(*value),
        ));
    }
    out
}

/// Render a standalone SVG bar chart.
pub fn render_svg_chart(series: &ChartSeries) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 160;
    let title_height = 40;

    let max = series.max_value();
    let total_height = title_height + series.bars.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"24\" font-size=\"16\" font-weight=\"bold\" fill=\"currentColor\">{}</text>\n",
        padding,
        xml_escape(&series.title)
    ));

    for (i, (question_type, value)) in series.bars.iter().enumerate() {
        let y = title_height + i * (bar_height + padding);
        let width = scaled(*value, max, max_width);

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            xml_escape(question_type.label())
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width,
            y,
            width,
            bar_height,
            color_for(*question_type)
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            format_value(*value)
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write an SVG chart to a file, creating parent directories.
pub fn write_svg_chart(series: &ChartSeries, path: &Path) -> Result<()> {
    let svg = render_svg_chart(series);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, svg)
        .with_context(|| format!("failed to write chart to {}", path.display()))?;
    Ok(())
}

fn scaled(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 {
        return 0;
    }
    ((value / max) * width as f64).round().clamp(0.0, width as f64) as usize
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn color_for(question_type: QuestionType) -> &'static str {
    match question_type {
        QuestionType::TrueFalse => "#3b82f6",
        QuestionType::Numerical => "#8b5cf6",
        QuestionType::Matching => "#ec4899",
        QuestionType::ShortAnswer => "#f97316",
        QuestionType::MultipleChoice => "#22c55e",
        QuestionType::Essay => "#eab308",
        QuestionType::Description => "#6b7280",
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
