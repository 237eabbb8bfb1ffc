//! giftq-report — rendering collaborators for giftq.
//!
//! Turns the core's type maps into text or SVG bar charts and produces
//! vCard contact files. Nothing here parses GIFT.

pub mod chart;
pub mod vcard;

pub use chart::{render_svg_chart, render_text_chart, write_svg_chart, ChartSeries};
pub use vcard::Contact;
