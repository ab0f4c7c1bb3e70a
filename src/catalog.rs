//! The fixed, ordered question catalog the quiz flow prompts.
//!
//! The catalog is a superset of what the scoring engine reads: every id the
//! engine looks up is here, plus a few profile questions (age, current
//! supplement use) that inform messaging but carry no score.

use crate::answers::{AnswerSet, AnswerValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    SingleChoice { options: &'static [&'static str] },
    MultiChoice { options: &'static [&'static str] },
    Number { min: u32, max: u32, unit: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: &'static str,
    pub category: &'static str,
    pub prompt: &'static str,
    pub kind: InputKind,
}

pub const QUESTIONS: &[Question] = &[
    // Sleep
    Question {
        id: "sleep_hours",
        category: "Sleep",
        prompt: "How many hours of sleep do you typically get per night?",
        kind: InputKind::Number { min: 0, max: 12, unit: "hours" },
    },
    Question {
        id: "sleep_quality",
        category: "Sleep",
        prompt: "How would you rate your overall sleep quality?",
        kind: InputKind::SingleChoice {
            options: &["Excellent", "Good", "Fair", "Poor", "Very Poor"],
        },
    },
    Question {
        id: "sleep_consistency",
        category: "Sleep",
        prompt: "Do you maintain a consistent sleep schedule?",
        kind: InputKind::SingleChoice {
            options: &["Always", "Usually", "Sometimes", "Rarely", "Never"],
        },
    },
    // Diet & Nutrition
    Question {
        id: "diet_type",
        category: "Diet",
        prompt: "Which best describes your current diet?",
        kind: InputKind::SingleChoice {
            options: &[
                "Standard Western Diet",
                "Mediterranean",
                "Ketogenic",
                "Paleo",
                "Vegetarian",
                "Vegan",
                "Other",
            ],
        },
    },
    Question {
        id: "processed_foods",
        category: "Diet",
        prompt: "How often do you eat processed foods?",
        kind: InputKind::SingleChoice {
            options: &["Daily", "Several times a week", "Weekly", "Rarely", "Never"],
        },
    },
    Question {
        id: "vegetables_fruits",
        category: "Diet",
        prompt: "How many servings of vegetables and fruits do you eat daily?",
        kind: InputKind::SingleChoice {
            options: &["Less than 2", "2-3", "4-5", "6-7", "8 or more"],
        },
    },
    Question {
        id: "water_intake",
        category: "Diet",
        prompt: "How many glasses of water do you drink daily?",
        kind: InputKind::Number { min: 0, max: 20, unit: "glasses" },
    },
    // Supplements
    Question {
        id: "current_supplements",
        category: "Supplements",
        prompt: "Do you currently take any dietary supplements?",
        kind: InputKind::SingleChoice {
            options: &[
                "Yes, regularly",
                "Yes, occasionally",
                "No, but interested",
                "No, not interested",
            ],
        },
    },
    // Exercise
    Question {
        id: "exercise_frequency",
        category: "Exercise",
        prompt: "How many days per week do you exercise?",
        kind: InputKind::Number { min: 0, max: 7, unit: "days" },
    },
    Question {
        id: "exercise_intensity",
        category: "Exercise",
        prompt: "What is the typical intensity of your workouts?",
        kind: InputKind::SingleChoice {
            options: &[
                "High intensity",
                "Moderate intensity",
                "Low intensity",
                "I don't exercise regularly",
            ],
        },
    },
    Question {
        id: "exercise_types",
        category: "Exercise",
        prompt: "What types of exercise do you do? (Select all that apply)",
        kind: InputKind::MultiChoice {
            options: &[
                "Cardio/Aerobic",
                "Strength Training",
                "Flexibility/Yoga",
                "Sports",
                "Walking",
                "None",
            ],
        },
    },
    // Stress Management
    Question {
        id: "stress_level",
        category: "Stress",
        prompt: "How would you rate your current stress level?",
        kind: InputKind::SingleChoice {
            options: &["Very High", "High", "Moderate", "Low", "Very Low"],
        },
    },
    Question {
        id: "stress_management",
        category: "Stress",
        prompt: "Do you practice stress management techniques?",
        kind: InputKind::SingleChoice {
            options: &["Daily", "Weekly", "Occasionally", "Rarely", "Never"],
        },
    },
    Question {
        id: "meditation_relaxation",
        category: "Stress",
        prompt: "Do you practice meditation, deep breathing, or other relaxation techniques?",
        kind: InputKind::SingleChoice {
            options: &["Daily", "Weekly", "Monthly", "Rarely", "Never"],
        },
    },
    // Health Symptoms
    Question {
        id: "joint_pain",
        category: "Health",
        prompt: "Do you experience joint pain or stiffness?",
        kind: InputKind::SingleChoice {
            options: &["Frequently", "Sometimes", "Rarely", "Never"],
        },
    },
    Question {
        id: "fatigue",
        category: "Health",
        prompt: "Do you experience fatigue or lack of energy?",
        kind: InputKind::SingleChoice {
            options: &["Frequently", "Sometimes", "Rarely", "Never"],
        },
    },
    Question {
        id: "ear_ringing",
        category: "Health",
        prompt: "Do you experience ear ringing or hearing issues?",
        kind: InputKind::SingleChoice {
            options: &["Frequently", "Sometimes", "Rarely", "Never"],
        },
    },
    Question {
        id: "gut_skin_issues",
        category: "Health",
        prompt: "Are you experiencing gut health or skin issues?",
        kind: InputKind::SingleChoice {
            options: &["Yes, both", "Yes, gut issues", "Yes, skin issues", "No"],
        },
    },
    Question {
        id: "prostate_concerns",
        category: "Health",
        prompt: "Do you have concerns about prostate health? (Men only)",
        kind: InputKind::SingleChoice {
            options: &[
                "Yes, significant concerns",
                "Yes, some concerns",
                "No concerns",
                "Not applicable",
            ],
        },
    },
    Question {
        id: "belly_fat",
        category: "Health",
        prompt: "Do you struggle with stubborn belly fat?",
        kind: InputKind::SingleChoice {
            options: &["Yes, significantly", "Yes, somewhat", "No", "Not sure"],
        },
    },
    Question {
        id: "energy_levels",
        category: "Health",
        prompt: "How would you rate your overall energy levels throughout the day?",
        kind: InputKind::SingleChoice {
            options: &[
                "Consistently high",
                "Generally good with some dips",
                "Moderate with afternoon crashes",
                "Low most of the time",
                "Extremely low",
            ],
        },
    },
    Question {
        id: "digestive_health",
        category: "Health",
        prompt: "How is your digestive health?",
        kind: InputKind::SingleChoice {
            options: &[
                "Excellent, no issues",
                "Good, occasional minor issues",
                "Fair, some regular discomfort",
                "Poor, frequent problems",
                "Very poor, daily issues",
            ],
        },
    },
    Question {
        id: "skin_condition",
        category: "Health",
        prompt: "How would you describe your skin condition?",
        kind: InputKind::SingleChoice {
            options: &[
                "Clear and healthy",
                "Generally good with minor issues",
                "Moderate issues (acne, dryness, etc.)",
                "Poor with frequent problems",
                "Very poor, multiple skin concerns",
            ],
        },
    },
    Question {
        id: "mental_clarity",
        category: "Health",
        prompt: "How is your mental clarity and focus?",
        kind: InputKind::SingleChoice {
            options: &[
                "Sharp and focused",
                "Generally good",
                "Moderate, some brain fog",
                "Poor, frequent brain fog",
                "Very poor, constant mental cloudiness",
            ],
        },
    },
    Question {
        id: "mood_stability",
        category: "Health",
        prompt: "How stable is your mood throughout the day?",
        kind: InputKind::SingleChoice {
            options: &[
                "Very stable and positive",
                "Generally stable",
                "Moderate fluctuations",
                "Frequent mood swings",
                "Very unstable",
            ],
        },
    },
    // Lifestyle
    Question {
        id: "age",
        category: "Lifestyle",
        prompt: "What is your age?",
        kind: InputKind::Number { min: 18, max: 100, unit: "years" },
    },
    Question {
        id: "smoking",
        category: "Lifestyle",
        prompt: "Do you smoke or use tobacco products?",
        kind: InputKind::SingleChoice {
            options: &["Yes, regularly", "Yes, occasionally", "Former smoker", "Never"],
        },
    },
    Question {
        id: "alcohol",
        category: "Lifestyle",
        prompt: "How often do you consume alcohol?",
        kind: InputKind::SingleChoice {
            options: &["Daily", "Several times a week", "Weekly", "Monthly", "Rarely", "Never"],
        },
    },
    Question {
        id: "caffeine_intake",
        category: "Lifestyle",
        prompt: "How much caffeine do you consume daily?",
        kind: InputKind::SingleChoice {
            options: &[
                "None",
                "1-2 cups of coffee/tea",
                "3-4 cups of coffee/tea",
                "5+ cups of coffee/tea",
                "Multiple energy drinks",
            ],
        },
    },
    Question {
        id: "sun_exposure",
        category: "Lifestyle",
        prompt: "How much sunlight exposure do you get daily?",
        kind: InputKind::SingleChoice {
            options: &[
                "30+ minutes outdoors",
                "15-30 minutes outdoors",
                "5-15 minutes outdoors",
                "Mostly indoors",
                "Almost no sunlight",
            ],
        },
    },
    Question {
        id: "social_connections",
        category: "Lifestyle",
        prompt: "How would you rate your social connections and relationships?",
        kind: InputKind::SingleChoice {
            options: &[
                "Very strong support network",
                "Good relationships",
                "Moderate social connections",
                "Limited social connections",
                "Isolated/lonely",
            ],
        },
    },
];

pub fn find(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Check an answer set against the catalog.
/// Returns all findings at once (not just the first). Findings are advisory:
/// the engine scores any answer set, a mismatched answer just contributes its
/// default bucket.
pub fn validate_answers(answers: &AnswerSet) -> Vec<String> {
    let mut warnings = Vec::new();

    for id in answers.ids() {
        let Some(question) = find(id) else {
            warnings.push(format!("answers.{}: not a known question id", id));
            continue;
        };

        let Some(value) = answers.get(id) else {
            continue;
        };

        match (question.kind, value) {
            (InputKind::SingleChoice { options }, AnswerValue::Label(label)) => {
                if !options.contains(&label.as_str()) {
                    warnings.push(format!(
                        "answers.{}: '{}' is not one of the listed options",
                        id, label
                    ));
                }
            }
            (InputKind::SingleChoice { .. }, _) => {
                warnings.push(format!("answers.{}: expected a single option label", id));
            }
            (InputKind::MultiChoice { options }, AnswerValue::Selections(items)) => {
                for item in items {
                    if !options.contains(&item.as_str()) {
                        warnings.push(format!(
                            "answers.{}: '{}' is not one of the listed options",
                            id, item
                        ));
                    }
                }
            }
            (InputKind::MultiChoice { .. }, _) => {
                warnings.push(format!("answers.{}: expected a list of option labels", id));
            }
            (InputKind::Number { min, max, .. }, AnswerValue::Number(n)) => {
                if *n < min as f64 || *n > max as f64 {
                    warnings.push(format!(
                        "answers.{}: {} is outside the expected {}-{} range",
                        id, n, min, max
                    ));
                }
            }
            (InputKind::Number { .. }, _) => {
                warnings.push(format!("answers.{}: expected a number", id));
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_question_ids_are_unique() {
        let mut seen = HashSet::new();
        for question in QUESTIONS {
            assert!(seen.insert(question.id), "duplicate id {}", question.id);
        }
    }

    #[test]
    fn test_catalog_covers_every_scored_id() {
        let scored_ids = [
            "sleep_hours",
            "sleep_quality",
            "sleep_consistency",
            "diet_type",
            "processed_foods",
            "vegetables_fruits",
            "water_intake",
            "exercise_frequency",
            "exercise_intensity",
            "exercise_types",
            "stress_level",
            "stress_management",
            "meditation_relaxation",
            "joint_pain",
            "fatigue",
            "ear_ringing",
            "gut_skin_issues",
            "prostate_concerns",
            "belly_fat",
            "smoking",
            "alcohol",
            "energy_levels",
            "digestive_health",
            "skin_condition",
            "mental_clarity",
            "mood_stability",
            "caffeine_intake",
            "sun_exposure",
            "social_connections",
        ];
        for id in scored_ids {
            assert!(find(id).is_some(), "catalog is missing {}", id);
        }
    }

    #[test]
    fn test_valid_answers_produce_no_warnings() {
        let answers = AnswerSet::new()
            .with_number("sleep_hours", 8.0)
            .with_label("sleep_quality", "Good")
            .with_selections("exercise_types", &["Walking", "Sports"]);
        assert!(validate_answers(&answers).is_empty());
    }

    #[test]
    fn test_unknown_id_warns() {
        let answers = AnswerSet::new().with_label("favorite_color", "Blue");
        let warnings = validate_answers(&answers);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("favorite_color"));
    }

    #[test]
    fn test_unlisted_label_warns() {
        let answers = AnswerSet::new().with_label("sleep_quality", "Amazing");
        let warnings = validate_answers(&answers);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("sleep_quality"));
    }

    #[test]
    fn test_out_of_range_number_warns() {
        let answers = AnswerSet::new().with_number("sleep_hours", 25.0);
        let warnings = validate_answers(&answers);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("0-12"));
    }

    #[test]
    fn test_wrong_shape_warns() {
        let answers = AnswerSet::new()
            .with_label("sleep_hours", "eight")
            .with_number("sleep_quality", 10.0)
            .with_label("exercise_types", "Walking");
        assert_eq!(validate_answers(&answers).len(), 3);
    }

    #[test]
    fn test_collects_all_warnings() {
        let answers = AnswerSet::new()
            .with_label("favorite_color", "Blue")
            .with_label("sleep_quality", "Amazing")
            .with_number("water_intake", 50.0);
        assert_eq!(validate_answers(&answers).len(), 3);
    }
}
