pub mod categories;
pub mod engine;
pub mod labels;
pub mod recommend;

pub use engine::{compute_results, CategoryScores, Results, Vitality};
pub use recommend::{derive_recommendations, Recommendations, Supplement};
