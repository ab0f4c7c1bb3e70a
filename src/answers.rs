use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A single raw answer as collected by the quiz flow.
///
/// Answers arrive untyped: bounded-number questions produce numbers,
/// single-choice questions produce one label, multi-choice questions produce
/// a list of labels. Deserialization is untagged so answer files stay plain:
///
/// ```json
/// { "sleep_hours": 8, "sleep_quality": "Good", "exercise_types": ["Walking"] }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Label(String),
    Selections(Vec<String>),
}

/// A complete set of quiz responses, keyed by question id.
///
/// Keys absent from the map are unanswered questions. The scoring engine
/// receives this read-only; accessors never fail, they return `None` (or an
/// empty slice) for anything missing or of the wrong shape, and the scorers
/// turn that into their lowest contribution.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AnswerSet(BTreeMap<String, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, value: AnswerValue) {
        self.0.insert(id.into(), value);
    }

    pub fn get(&self, id: &str) -> Option<&AnswerValue> {
        self.0.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The answer as a single label, if it was given as one.
    pub fn label(&self, id: &str) -> Option<&str> {
        match self.0.get(id) {
            Some(AnswerValue::Label(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The answer as a number, if it was given as one. Labels are not
    /// coerced: a non-numeric answer to a numeric question scores the same
    /// as no answer.
    pub fn number(&self, id: &str) -> Option<f64> {
        match self.0.get(id) {
            Some(AnswerValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// The answer as a multi-select list. Empty when absent or when the
    /// answer is not a list.
    pub fn selections(&self, id: &str) -> &[String] {
        match self.0.get(id) {
            Some(AnswerValue::Selections(items)) => items,
            _ => &[],
        }
    }
}

/// Convenience constructors used by tests and by callers that assemble
/// answer sets in code rather than from a file.
impl AnswerSet {
    pub fn with_label(mut self, id: &str, label: &str) -> Self {
        self.insert(id, AnswerValue::Label(label.to_string()));
        self
    }

    pub fn with_number(mut self, id: &str, n: f64) -> Self {
        self.insert(id, AnswerValue::Number(n));
        self
    }

    pub fn with_selections(mut self, id: &str, items: &[&str]) -> Self {
        self.insert(
            id,
            AnswerValue::Selections(items.iter().map(|s| s.to_string()).collect()),
        );
        self
    }
}

/// Load an answer set from a JSON or YAML file.
///
/// The format is picked by extension (`.yaml`/`.yml` parse as YAML,
/// everything else as JSON).
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or does not
/// parse as a map of question ids to answers.
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    if !path.exists() {
        anyhow::bail!("Answer file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answer file at {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    let answers: AnswerSet = if is_yaml {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Invalid YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?
    };

    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_answer_shapes_parse() {
        let json = r#"{
            "sleep_hours": 8,
            "sleep_quality": "Good",
            "exercise_types": ["Walking", "Sports"]
        }"#;
        let answers: AnswerSet = serde_json::from_str(json).unwrap();

        assert_eq!(answers.number("sleep_hours"), Some(8.0));
        assert_eq!(answers.label("sleep_quality"), Some("Good"));
        assert_eq!(answers.selections("exercise_types").len(), 2);
    }

    #[test]
    fn test_missing_keys_are_none() {
        let answers = AnswerSet::new();
        assert_eq!(answers.label("sleep_quality"), None);
        assert_eq!(answers.number("sleep_hours"), None);
        assert!(answers.selections("exercise_types").is_empty());
    }

    #[test]
    fn test_wrong_shape_is_not_coerced() {
        let answers = AnswerSet::new()
            .with_label("sleep_hours", "8")
            .with_number("sleep_quality", 10.0)
            .with_label("exercise_types", "Walking");

        assert_eq!(answers.number("sleep_hours"), None);
        assert_eq!(answers.label("sleep_quality"), None);
        assert!(answers.selections("exercise_types").is_empty());
    }

    #[test]
    fn test_yaml_answer_file_shape() {
        let yaml = r#"
sleep_hours: 7
diet_type: "Mediterranean"
exercise_types:
  - "Cardio/Aerobic"
  - "Strength Training"
"#;
        let answers: AnswerSet = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(answers.number("sleep_hours"), Some(7.0));
        assert_eq!(answers.label("diet_type"), Some("Mediterranean"));
        assert_eq!(answers.selections("exercise_types").len(), 2);
    }

    #[test]
    fn test_load_answers_missing_file() {
        let result = load_answers(Path::new("/nonexistent/answers.json"));
        assert!(result.is_err());
    }
}
