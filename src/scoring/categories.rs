//! The five category scorers.
//!
//! Each scorer sums a small number of point contributions from the answer
//! set, then normalizes against its fixed point schedule to a 0-100 score.
//! Missing or unrecognized answers contribute their lowest bucket (numeric
//! questions) or 0 (labeled questions); a scorer never fails.

use super::labels::{
    scale_points, Alcohol, CaffeineIntake, DietType, DigestiveHealth, EnergyLevel,
    ExerciseIntensity, GutSkinIssues, MentalClarity, MoodStability, PracticeFrequency,
    ProcessedFoods, ProduceServings, SkinCondition, SleepConsistency, SleepQuality, Smoking,
    SocialConnections, StressLevel, SunExposure, SymptomFrequency,
};
use crate::answers::AnswerSet;

/// Sleep schedule: hours bucket + quality + consistency.
pub const SLEEP_MAX_POINTS: u32 = 30;

/// Diet schedule: diet type + processed foods + produce servings + water.
pub const DIET_MAX_POINTS: u32 = 40;

/// Exercise schedule: frequency bucket + intensity + modality count.
pub const EXERCISE_MAX_POINTS: u32 = 30;

/// Stress schedule: stress level + two practice-frequency contributions.
pub const STRESS_MAX_POINTS: u32 = 30;

/// Health schedule: three symptoms + gut/skin flag + smoking + alcohol +
/// eight lifestyle scales.
pub const HEALTH_MAX_POINTS: u32 = 120;

/// Normalize earned points against a category's point schedule.
fn normalize(points: u32, max_points: u32) -> u8 {
    ((points as f64 / max_points as f64) * 100.0).round() as u8
}

pub fn score_sleep(answers: &AnswerSet) -> u8 {
    let mut points = match answers.number("sleep_hours") {
        Some(h) if (7.0..=9.0).contains(&h) => 10,
        Some(h) if (6.0..=10.0).contains(&h) => 7,
        _ => 3,
    };
    points += scale_points::<SleepQuality>(answers, "sleep_quality");
    points += scale_points::<SleepConsistency>(answers, "sleep_consistency");
    normalize(points, SLEEP_MAX_POINTS)
}

pub fn score_diet(answers: &AnswerSet) -> u8 {
    let mut points = scale_points::<DietType>(answers, "diet_type");
    points += scale_points::<ProcessedFoods>(answers, "processed_foods");
    points += scale_points::<ProduceServings>(answers, "vegetables_fruits");
    points += match answers.number("water_intake") {
        Some(glasses) if glasses >= 8.0 => 10,
        Some(glasses) if glasses >= 6.0 => 8,
        Some(glasses) if glasses >= 4.0 => 6,
        _ => 3,
    };
    normalize(points, DIET_MAX_POINTS)
}

pub fn score_exercise(answers: &AnswerSet) -> u8 {
    let mut points = match answers.number("exercise_frequency") {
        Some(days) if days >= 5.0 => 10,
        Some(days) if days >= 3.0 => 8,
        Some(days) if days >= 1.0 => 6,
        _ => 2,
    };
    points += scale_points::<ExerciseIntensity>(answers, "exercise_intensity");

    // 2 points per selected modality, capped at 10.
    let modalities = answers.selections("exercise_types").len() as u32;
    points += (2 * modalities).min(10);

    normalize(points, EXERCISE_MAX_POINTS)
}

pub fn score_stress(answers: &AnswerSet) -> u8 {
    let mut points = scale_points::<StressLevel>(answers, "stress_level");
    // The same frequency table scores both the general practice question and
    // the meditation/relaxation question.
    points += scale_points::<PracticeFrequency>(answers, "stress_management");
    points += scale_points::<PracticeFrequency>(answers, "meditation_relaxation");
    normalize(points, STRESS_MAX_POINTS)
}

pub fn score_health(answers: &AnswerSet) -> u8 {
    let mut points = scale_points::<SymptomFrequency>(answers, "joint_pain");
    points += scale_points::<SymptomFrequency>(answers, "fatigue");
    points += scale_points::<SymptomFrequency>(answers, "ear_ringing");

    // 10 only for a literal "No"; anything else, unanswered included, gets 5.
    points += match answers.label("gut_skin_issues").and_then(GutSkinIssues::parse) {
        Some(GutSkinIssues::No) => 10,
        _ => 5,
    };

    points += scale_points::<Smoking>(answers, "smoking");
    points += scale_points::<Alcohol>(answers, "alcohol");
    points += scale_points::<EnergyLevel>(answers, "energy_levels");
    points += scale_points::<DigestiveHealth>(answers, "digestive_health");
    points += scale_points::<SkinCondition>(answers, "skin_condition");
    points += scale_points::<MentalClarity>(answers, "mental_clarity");
    points += scale_points::<MoodStability>(answers, "mood_stability");
    points += scale_points::<CaffeineIntake>(answers, "caffeine_intake");
    points += scale_points::<SunExposure>(answers, "sun_exposure");
    points += scale_points::<SocialConnections>(answers, "social_connections");

    normalize(points, HEALTH_MAX_POINTS)
}
