//! Typed point scales for labeled quiz answers.
//!
//! Every single-choice question maps its literal answer labels through an
//! exhaustive table to a point value. Unanswered and unrecognized labels
//! contribute 0 points; scoring never fails on malformed input.

use crate::answers::AnswerSet;

/// A point scale backing one labeled question.
pub trait LabelScale: Sized + Copy {
    /// Parse the literal answer label as collected by the quiz flow.
    /// Unknown labels are `None`.
    fn parse(label: &str) -> Option<Self>;

    /// Point contribution of this answer.
    fn points(self) -> u32;
}

/// Points for a labeled answer, 0 when unanswered or unrecognized.
pub fn scale_points<S: LabelScale>(answers: &AnswerSet, id: &str) -> u32 {
    answers.label(id).and_then(S::parse).map_or(0, S::points)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepQuality {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl LabelScale for SleepQuality {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "Excellent" => Some(Self::Excellent),
            "Good" => Some(Self::Good),
            "Fair" => Some(Self::Fair),
            "Poor" => Some(Self::Poor),
            "Very Poor" => Some(Self::VeryPoor),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::Excellent => 10,
            Self::Good => 8,
            Self::Fair => 6,
            Self::Poor => 4,
            Self::VeryPoor => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepConsistency {
    Always,
    Usually,
    Sometimes,
    Rarely,
    Never,
}

impl LabelScale for SleepConsistency {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "Always" => Some(Self::Always),
            "Usually" => Some(Self::Usually),
            "Sometimes" => Some(Self::Sometimes),
            "Rarely" => Some(Self::Rarely),
            "Never" => Some(Self::Never),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::Always => 10,
            Self::Usually => 8,
            Self::Sometimes => 6,
            Self::Rarely => 4,
            Self::Never => 2,
        }
    }
}

/// Diet pattern weight table. Mediterranean scores highest, the standard
/// Western pattern lowest; "Other" sits mid-low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietType {
    Mediterranean,
    Ketogenic,
    Paleo,
    Vegetarian,
    Vegan,
    StandardWestern,
    Other,
}

impl DietType {
    /// Whether this pattern already is one of the low-carb plans the report
    /// would otherwise suggest.
    pub fn is_low_carb_plan(self) -> bool {
        matches!(self, Self::Ketogenic | Self::Paleo)
    }
}

impl LabelScale for DietType {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "Mediterranean" => Some(Self::Mediterranean),
            "Ketogenic" => Some(Self::Ketogenic),
            "Paleo" => Some(Self::Paleo),
            "Vegetarian" => Some(Self::Vegetarian),
            "Vegan" => Some(Self::Vegan),
            "Standard Western Diet" => Some(Self::StandardWestern),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::Mediterranean => 10,
            Self::Ketogenic => 9,
            Self::Paleo => 9,
            Self::Vegetarian => 8,
            Self::Vegan => 8,
            Self::StandardWestern => 4,
            Self::Other => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessedFoods {
    Never,
    Rarely,
    Weekly,
    SeveralTimesAWeek,
    Daily,
}

impl LabelScale for ProcessedFoods {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "Never" => Some(Self::Never),
            "Rarely" => Some(Self::Rarely),
            "Weekly" => Some(Self::Weekly),
            "Several times a week" => Some(Self::SeveralTimesAWeek),
            "Daily" => Some(Self::Daily),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::Never => 10,
            Self::Rarely => 8,
            Self::Weekly => 6,
            Self::SeveralTimesAWeek => 4,
            Self::Daily => 2,
        }
    }
}

/// Daily vegetable/fruit servings, bucketed the way the quiz asks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProduceServings {
    EightOrMore,
    SixToSeven,
    FourToFive,
    TwoToThree,
    LessThanTwo,
}

impl LabelScale for ProduceServings {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "8 or more" => Some(Self::EightOrMore),
            "6-7" => Some(Self::SixToSeven),
            "4-5" => Some(Self::FourToFive),
            "2-3" => Some(Self::TwoToThree),
            "Less than 2" => Some(Self::LessThanTwo),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::EightOrMore => 10,
            Self::SixToSeven => 8,
            Self::FourToFive => 6,
            Self::TwoToThree => 4,
            Self::LessThanTwo => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseIntensity {
    High,
    Moderate,
    Low,
    NotRegular,
}

impl LabelScale for ExerciseIntensity {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "High intensity" => Some(Self::High),
            "Moderate intensity" => Some(Self::Moderate),
            "Low intensity" => Some(Self::Low),
            "I don't exercise regularly" => Some(Self::NotRegular),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::High => 10,
            Self::Moderate => 8,
            Self::Low => 6,
            Self::NotRegular => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl LabelScale for StressLevel {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "Very Low" => Some(Self::VeryLow),
            "Low" => Some(Self::Low),
            "Moderate" => Some(Self::Moderate),
            "High" => Some(Self::High),
            "Very High" => Some(Self::VeryHigh),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::VeryLow => 10,
            Self::Low => 8,
            Self::Moderate => 6,
            Self::High => 4,
            Self::VeryHigh => 2,
        }
    }
}

/// How often a stress-management practice happens. One table serves both the
/// general practice question and the meditation/relaxation question; the
/// meditation question also offers "Monthly", which this table does not map,
/// so that answer contributes 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeFrequency {
    Daily,
    Weekly,
    Occasionally,
    Rarely,
    Never,
}

impl LabelScale for PracticeFrequency {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "Daily" => Some(Self::Daily),
            "Weekly" => Some(Self::Weekly),
            "Occasionally" => Some(Self::Occasionally),
            "Rarely" => Some(Self::Rarely),
            "Never" => Some(Self::Never),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::Daily => 10,
            Self::Weekly => 8,
            Self::Occasionally => 6,
            Self::Rarely => 4,
            Self::Never => 2,
        }
    }
}

/// Symptom recurrence scale shared by joint pain, fatigue and ear ringing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymptomFrequency {
    Never,
    Rarely,
    Sometimes,
    Frequently,
}

impl SymptomFrequency {
    /// Recurrent symptoms ("Sometimes" or worse) trigger supplement
    /// recommendations.
    pub fn is_recurrent(self) -> bool {
        matches!(self, Self::Sometimes | Self::Frequently)
    }
}

impl LabelScale for SymptomFrequency {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "Never" => Some(Self::Never),
            "Rarely" => Some(Self::Rarely),
            "Sometimes" => Some(Self::Sometimes),
            "Frequently" => Some(Self::Frequently),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::Never => 10,
            Self::Rarely => 8,
            Self::Sometimes => 6,
            Self::Frequently => 4,
        }
    }
}

/// Gut/skin flag. Not a `LabelScale`: the health scorer awards 10 only for a
/// literal "No" and 5 for everything else, including an unanswered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GutSkinIssues {
    Both,
    Gut,
    Skin,
    No,
}

impl GutSkinIssues {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Yes, both" => Some(Self::Both),
            "Yes, gut issues" => Some(Self::Gut),
            "Yes, skin issues" => Some(Self::Skin),
            "No" => Some(Self::No),
            _ => None,
        }
    }

    pub fn has_issue(self) -> bool {
        !matches!(self, Self::No)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Smoking {
    Never,
    Former,
    Occasionally,
    Regularly,
}

impl LabelScale for Smoking {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "Never" => Some(Self::Never),
            "Former smoker" => Some(Self::Former),
            "Yes, occasionally" => Some(Self::Occasionally),
            "Yes, regularly" => Some(Self::Regularly),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::Never => 10,
            Self::Former => 8,
            Self::Occasionally => 4,
            Self::Regularly => 2,
        }
    }
}

/// Alcohol frequency. "Never" and "Rarely" share the top score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alcohol {
    Never,
    Rarely,
    Monthly,
    Weekly,
    SeveralTimesAWeek,
    Daily,
}

impl LabelScale for Alcohol {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "Never" => Some(Self::Never),
            "Rarely" => Some(Self::Rarely),
            "Monthly" => Some(Self::Monthly),
            "Weekly" => Some(Self::Weekly),
            "Several times a week" => Some(Self::SeveralTimesAWeek),
            "Daily" => Some(Self::Daily),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::Never => 10,
            Self::Rarely => 10,
            Self::Monthly => 8,
            Self::Weekly => 6,
            Self::SeveralTimesAWeek => 4,
            Self::Daily => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyLevel {
    ConsistentlyHigh,
    GenerallyGood,
    Moderate,
    LowMostOfTheTime,
    ExtremelyLow,
}

impl EnergyLevel {
    /// The two worst energy answers trigger supplement recommendations.
    pub fn is_depleted(self) -> bool {
        matches!(self, Self::LowMostOfTheTime | Self::ExtremelyLow)
    }
}

impl LabelScale for EnergyLevel {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "Consistently high" => Some(Self::ConsistentlyHigh),
            "Generally good with some dips" => Some(Self::GenerallyGood),
            "Moderate with afternoon crashes" => Some(Self::Moderate),
            "Low most of the time" => Some(Self::LowMostOfTheTime),
            "Extremely low" => Some(Self::ExtremelyLow),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::ConsistentlyHigh => 10,
            Self::GenerallyGood => 8,
            Self::Moderate => 6,
            Self::LowMostOfTheTime => 4,
            Self::ExtremelyLow => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestiveHealth {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl DigestiveHealth {
    pub fn is_troubled(self) -> bool {
        matches!(self, Self::Poor | Self::VeryPoor)
    }
}

impl LabelScale for DigestiveHealth {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "Excellent, no issues" => Some(Self::Excellent),
            "Good, occasional minor issues" => Some(Self::Good),
            "Fair, some regular discomfort" => Some(Self::Fair),
            "Poor, frequent problems" => Some(Self::Poor),
            "Very poor, daily issues" => Some(Self::VeryPoor),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::Excellent => 10,
            Self::Good => 8,
            Self::Fair => 6,
            Self::Poor => 4,
            Self::VeryPoor => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinCondition {
    Clear,
    GenerallyGood,
    Moderate,
    Poor,
    VeryPoor,
}

impl SkinCondition {
    pub fn is_troubled(self) -> bool {
        matches!(self, Self::Poor | Self::VeryPoor)
    }
}

impl LabelScale for SkinCondition {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "Clear and healthy" => Some(Self::Clear),
            "Generally good with minor issues" => Some(Self::GenerallyGood),
            "Moderate issues (acne, dryness, etc.)" => Some(Self::Moderate),
            "Poor with frequent problems" => Some(Self::Poor),
            "Very poor, multiple skin concerns" => Some(Self::VeryPoor),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::Clear => 10,
            Self::GenerallyGood => 8,
            Self::Moderate => 6,
            Self::Poor => 4,
            Self::VeryPoor => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentalClarity {
    Sharp,
    GenerallyGood,
    Moderate,
    Poor,
    VeryPoor,
}

impl LabelScale for MentalClarity {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "Sharp and focused" => Some(Self::Sharp),
            "Generally good" => Some(Self::GenerallyGood),
            "Moderate, some brain fog" => Some(Self::Moderate),
            "Poor, frequent brain fog" => Some(Self::Poor),
            "Very poor, constant mental cloudiness" => Some(Self::VeryPoor),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::Sharp => 10,
            Self::GenerallyGood => 8,
            Self::Moderate => 6,
            Self::Poor => 4,
            Self::VeryPoor => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodStability {
    VeryStable,
    GenerallyStable,
    Moderate,
    FrequentSwings,
    VeryUnstable,
}

impl LabelScale for MoodStability {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "Very stable and positive" => Some(Self::VeryStable),
            "Generally stable" => Some(Self::GenerallyStable),
            "Moderate fluctuations" => Some(Self::Moderate),
            "Frequent mood swings" => Some(Self::FrequentSwings),
            "Very unstable" => Some(Self::VeryUnstable),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::VeryStable => 10,
            Self::GenerallyStable => 8,
            Self::Moderate => 6,
            Self::FrequentSwings => 4,
            Self::VeryUnstable => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaffeineIntake {
    None,
    OneToTwoCups,
    ThreeToFourCups,
    FivePlusCups,
    EnergyDrinks,
}

impl LabelScale for CaffeineIntake {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "None" => Some(Self::None),
            "1-2 cups of coffee/tea" => Some(Self::OneToTwoCups),
            "3-4 cups of coffee/tea" => Some(Self::ThreeToFourCups),
            "5+ cups of coffee/tea" => Some(Self::FivePlusCups),
            "Multiple energy drinks" => Some(Self::EnergyDrinks),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::None => 10,
            Self::OneToTwoCups => 8,
            Self::ThreeToFourCups => 6,
            Self::FivePlusCups => 4,
            Self::EnergyDrinks => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunExposure {
    ThirtyPlusMinutes,
    FifteenToThirty,
    FiveToFifteen,
    MostlyIndoors,
    AlmostNone,
}

impl LabelScale for SunExposure {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "30+ minutes outdoors" => Some(Self::ThirtyPlusMinutes),
            "15-30 minutes outdoors" => Some(Self::FifteenToThirty),
            "5-15 minutes outdoors" => Some(Self::FiveToFifteen),
            "Mostly indoors" => Some(Self::MostlyIndoors),
            "Almost no sunlight" => Some(Self::AlmostNone),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::ThirtyPlusMinutes => 10,
            Self::FifteenToThirty => 8,
            Self::FiveToFifteen => 6,
            Self::MostlyIndoors => 4,
            Self::AlmostNone => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialConnections {
    VeryStrong,
    Good,
    Moderate,
    Limited,
    Isolated,
}

impl LabelScale for SocialConnections {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "Very strong support network" => Some(Self::VeryStrong),
            "Good relationships" => Some(Self::Good),
            "Moderate social connections" => Some(Self::Moderate),
            "Limited social connections" => Some(Self::Limited),
            "Isolated/lonely" => Some(Self::Isolated),
            _ => None,
        }
    }

    fn points(self) -> u32 {
        match self {
            Self::VeryStrong => 10,
            Self::Good => 8,
            Self::Moderate => 6,
            Self::Limited => 4,
            Self::Isolated => 2,
        }
    }
}

/// Prostate concern answer. Carries no score points; it exists to trigger a
/// supplement recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProstateConcerns {
    Significant,
    Some,
    NoConcerns,
    NotApplicable,
}

impl ProstateConcerns {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Yes, significant concerns" => Some(Self::Significant),
            "Yes, some concerns" => Some(Self::Some),
            "No concerns" => Some(Self::NoConcerns),
            "Not applicable" => Some(Self::NotApplicable),
            _ => None,
        }
    }

    pub fn is_concerned(self) -> bool {
        matches!(self, Self::Significant | Self::Some)
    }
}

/// Belly-fat answer. Recommendation trigger only, no score points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BellyFat {
    Significantly,
    Somewhat,
    No,
    NotSure,
}

impl BellyFat {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Yes, significantly" => Some(Self::Significantly),
            "Yes, somewhat" => Some(Self::Somewhat),
            "No" => Some(Self::No),
            "Not sure" => Some(Self::NotSure),
            _ => None,
        }
    }

    pub fn is_struggling(self) -> bool {
        matches!(self, Self::Significantly | Self::Somewhat)
    }
}
