//! Recommendation flags derived from the answer set.

use serde::Serialize;

use super::labels::{
    BellyFat, DietType, DigestiveHealth, EnergyLevel, GutSkinIssues, LabelScale, ProstateConcerns,
    SkinCondition, SymptomFrequency,
};
use crate::answers::AnswerSet;

/// A named product recommendation, triggered by particular answer
/// combinations. Serializes as its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Supplement {
    #[serde(rename = "PrimeBiome")]
    PrimeBiome,
    #[serde(rename = "Quietum Plus")]
    QuietumPlus,
    #[serde(rename = "ProstaVive")]
    ProstaVive,
    #[serde(rename = "HepatoBurn")]
    HepatoBurn,
}

impl Supplement {
    pub fn name(self) -> &'static str {
        match self {
            Self::PrimeBiome => "PrimeBiome",
            Self::QuietumPlus => "Quietum Plus",
            Self::ProstaVive => "ProstaVive",
            Self::HepatoBurn => "HepatoBurn",
        }
    }

    /// One-line product description for report rendering.
    pub fn blurb(self) -> &'static str {
        match self {
            Self::PrimeBiome => "Support your gut health and digestive system",
            Self::QuietumPlus => "Natural support for ear health and reducing ringing",
            Self::ProstaVive => "Comprehensive prostate health support",
            Self::HepatoBurn => "Support healthy metabolism and energy levels",
        }
    }
}

impl std::fmt::Display for Supplement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Recommendation flags for downstream messaging.
///
/// `ketogenic` and `paleo` are assigned from one shared condition and are
/// therefore always equal; see DESIGN.md for the recorded ambiguity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub supplements: bool,
    pub ketogenic: bool,
    pub paleo: bool,
    pub specific_supplements: Vec<Supplement>,
}

/// Derive recommendation flags and the ordered specific-supplement list.
///
/// Absent answers never match a trigger. The specific checks are independent
/// and run in fixed order; each appends at most once, and several supplements
/// may co-occur in one result.
pub fn derive_recommendations(answers: &AnswerSet) -> Recommendations {
    let joint_pain = answers.label("joint_pain").and_then(SymptomFrequency::parse);
    let fatigue = answers.label("fatigue").and_then(SymptomFrequency::parse);
    let ear_ringing = answers.label("ear_ringing").and_then(SymptomFrequency::parse);
    let energy = answers.label("energy_levels").and_then(EnergyLevel::parse);

    let needs_supplements = joint_pain.is_some_and(SymptomFrequency::is_recurrent)
        || fatigue.is_some_and(SymptomFrequency::is_recurrent)
        || ear_ringing.is_some_and(SymptomFrequency::is_recurrent)
        || energy.is_some_and(EnergyLevel::is_depleted);

    let mut specific_supplements = Vec::new();

    let gut_skin = answers.label("gut_skin_issues").and_then(GutSkinIssues::parse);
    let digestive = answers.label("digestive_health").and_then(DigestiveHealth::parse);
    let skin = answers.label("skin_condition").and_then(SkinCondition::parse);
    if gut_skin.is_some_and(GutSkinIssues::has_issue)
        || digestive.is_some_and(DigestiveHealth::is_troubled)
        || skin.is_some_and(SkinCondition::is_troubled)
    {
        specific_supplements.push(Supplement::PrimeBiome);
    }

    if ear_ringing.is_some_and(SymptomFrequency::is_recurrent) {
        specific_supplements.push(Supplement::QuietumPlus);
    }

    let prostate = answers.label("prostate_concerns").and_then(ProstateConcerns::parse);
    if prostate.is_some_and(ProstateConcerns::is_concerned) {
        specific_supplements.push(Supplement::ProstaVive);
    }

    let belly_fat = answers.label("belly_fat").and_then(BellyFat::parse);
    if belly_fat.is_some_and(BellyFat::is_struggling) || energy.is_some_and(EnergyLevel::is_depleted)
    {
        specific_supplements.push(Supplement::HepatoBurn);
    }

    // Diet-plan suggestion only when no supplement need surfaced and the
    // user is not already on one of the suggested plans. One condition
    // feeds both flags.
    let diet_type = answers.label("diet_type").and_then(DietType::parse);
    let suggest_diet_plan = !needs_supplements && !diet_type.is_some_and(DietType::is_low_carb_plan);

    Recommendations {
        supplements: needs_supplements || !specific_supplements.is_empty(),
        ketogenic: suggest_diet_plan,
        paleo: suggest_diet_plan,
        specific_supplements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_answers_no_recommendations() {
        let recs = derive_recommendations(&AnswerSet::new());
        assert!(!recs.supplements);
        assert!(recs.specific_supplements.is_empty());
        // No supplement need and no diet answer: the plan suggestion stands.
        assert!(recs.ketogenic);
        assert!(recs.paleo);
    }

    #[test]
    fn test_ear_ringing_triggers_quietum_plus() {
        let answers = AnswerSet::new().with_label("ear_ringing", "Frequently");
        let recs = derive_recommendations(&answers);

        assert!(recs.supplements);
        assert_eq!(recs.specific_supplements, vec![Supplement::QuietumPlus]);
    }

    #[test]
    fn test_belly_fat_triggers_hepatoburn() {
        let answers = AnswerSet::new().with_label("belly_fat", "Yes, significantly");
        let recs = derive_recommendations(&answers);
        assert_eq!(recs.specific_supplements, vec![Supplement::HepatoBurn]);
        // The general symptom checks did not fire, but a specific trigger
        // still sets the supplements flag.
        assert!(recs.supplements);
    }

    #[test]
    fn test_primebiome_routes() {
        for (id, label) in [
            ("gut_skin_issues", "Yes, both"),
            ("gut_skin_issues", "Yes, gut issues"),
            ("gut_skin_issues", "Yes, skin issues"),
            ("digestive_health", "Poor, frequent problems"),
            ("digestive_health", "Very poor, daily issues"),
            ("skin_condition", "Poor with frequent problems"),
            ("skin_condition", "Very poor, multiple skin concerns"),
        ] {
            let answers = AnswerSet::new().with_label(id, label);
            let recs = derive_recommendations(&answers);
            assert_eq!(
                recs.specific_supplements,
                vec![Supplement::PrimeBiome],
                "{id}={label}"
            );
        }
    }

    #[test]
    fn test_gut_skin_no_does_not_trigger() {
        let answers = AnswerSet::new().with_label("gut_skin_issues", "No");
        assert!(derive_recommendations(&answers).specific_supplements.is_empty());
    }

    #[test]
    fn test_prostate_concerns_trigger_prostavive() {
        let some = AnswerSet::new().with_label("prostate_concerns", "Yes, some concerns");
        assert_eq!(
            derive_recommendations(&some).specific_supplements,
            vec![Supplement::ProstaVive]
        );

        let none = AnswerSet::new().with_label("prostate_concerns", "No concerns");
        assert!(derive_recommendations(&none).specific_supplements.is_empty());
    }

    #[test]
    fn test_depleted_energy_triggers_hepatoburn_and_flag() {
        let answers = AnswerSet::new().with_label("energy_levels", "Low most of the time");
        let recs = derive_recommendations(&answers);
        assert!(recs.supplements);
        assert_eq!(recs.specific_supplements, vec![Supplement::HepatoBurn]);
        assert!(!recs.ketogenic);
        assert!(!recs.paleo);
    }

    #[test]
    fn test_supplements_can_co_occur_in_trigger_order() {
        let answers = AnswerSet::new()
            .with_label("gut_skin_issues", "Yes, gut issues")
            .with_label("ear_ringing", "Sometimes")
            .with_label("prostate_concerns", "Yes, significant concerns")
            .with_label("belly_fat", "Yes, somewhat");
        let recs = derive_recommendations(&answers);

        assert_eq!(
            recs.specific_supplements,
            vec![
                Supplement::PrimeBiome,
                Supplement::QuietumPlus,
                Supplement::ProstaVive,
                Supplement::HepatoBurn,
            ]
        );
        assert!(recs.supplements);
    }

    #[test]
    fn test_diet_plan_flags_track_one_condition() {
        // Healthy answers on a Mediterranean diet: suggest the plans.
        let mediterranean = AnswerSet::new().with_label("diet_type", "Mediterranean");
        let recs = derive_recommendations(&mediterranean);
        assert!(recs.ketogenic && recs.paleo);

        // Already ketogenic or paleo: nothing to suggest.
        for diet in ["Ketogenic", "Paleo"] {
            let answers = AnswerSet::new().with_label("diet_type", diet);
            let recs = derive_recommendations(&answers);
            assert!(!recs.ketogenic && !recs.paleo, "{diet}");
        }

        // Supplement need suppresses the diet suggestion.
        let fatigued = AnswerSet::new()
            .with_label("diet_type", "Mediterranean")
            .with_label("fatigue", "Frequently");
        let recs = derive_recommendations(&fatigued);
        assert!(!recs.ketogenic && !recs.paleo);
    }

    #[test]
    fn test_rare_symptoms_do_not_trigger() {
        let answers = AnswerSet::new()
            .with_label("joint_pain", "Rarely")
            .with_label("fatigue", "Never")
            .with_label("ear_ringing", "Rarely");
        let recs = derive_recommendations(&answers);
        assert!(!recs.supplements);
        assert!(recs.specific_supplements.is_empty());
    }

    #[test]
    fn test_supplement_serializes_as_display_name() {
        let json = serde_json::to_string(&Supplement::QuietumPlus).unwrap();
        assert_eq!(json, "\"Quietum Plus\"");
    }
}
