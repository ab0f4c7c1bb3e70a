use serde::Serialize;

use super::categories::{score_diet, score_exercise, score_health, score_sleep, score_stress};
use super::recommend::{derive_recommendations, Recommendations};
use crate::answers::AnswerSet;

/// The five normalized category scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    pub sleep: u8,
    pub diet: u8,
    pub exercise: u8,
    pub stress: u8,
    pub health: u8,
}

impl CategoryScores {
    /// Rounded arithmetic mean of the five categories.
    pub fn overall(&self) -> u8 {
        let sum = self.sleep as u32
            + self.diet as u32
            + self.exercise as u32
            + self.stress as u32
            + self.health as u32;
        ((sum as f64) / 5.0).round() as u8
    }
}

/// Qualitative vitality tier, derived from the overall score by descending
/// threshold. Boundary values belong to the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Vitality {
    Low,
    Moderate,
    Good,
    Excellent,
}

impl Vitality {
    pub fn from_score(overall: u8) -> Self {
        match overall {
            85..=u8::MAX => Self::Excellent,
            70..=84 => Self::Good,
            55..=69 => Self::Moderate,
            _ => Self::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

impl std::fmt::Display for Vitality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete assessment for one submitted answer set.
///
/// Constructed once per submission and never mutated; serializes to the
/// camelCase wire shape the report renderer and email sender consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Results {
    pub overall_score: u8,
    pub category_scores: CategoryScores,
    pub vitality: Vitality,
    pub recommendations: Recommendations,
}

/// Score an answer set.
///
/// Pure and infallible: partial or malformed answer sets only lower the
/// scores, they never produce an error.
pub fn compute_results(answers: &AnswerSet) -> Results {
    let category_scores = CategoryScores {
        sleep: score_sleep(answers),
        diet: score_diet(answers),
        exercise: score_exercise(answers),
        stress: score_stress(answers),
        health: score_health(answers),
    };
    let overall_score = category_scores.overall();

    Results {
        overall_score,
        category_scores,
        vitality: Vitality::from_score(overall_score),
        recommendations: derive_recommendations(answers),
    }
}
