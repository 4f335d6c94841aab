//! History and report exports.

mod history_csv;
mod report;

pub use history_csv::history_to_csv;
pub use report::{render_html, render_text, ReportInput};
