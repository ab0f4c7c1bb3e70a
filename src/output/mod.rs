pub mod formatter;

pub use formatter::{advice_lines, format_questions, format_report, should_use_colors};
