pub mod answers;
pub mod catalog;
pub mod output;
pub mod scoring;

pub use answers::{AnswerSet, AnswerValue};
pub use scoring::{compute_results, Results, Vitality};
