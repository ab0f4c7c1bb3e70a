use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::catalog::{InputKind, QUESTIONS};
use crate::scoring::Results;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Color a 0-100 score by the same thresholds the vitality tiers use:
/// green >= 85, blue >= 70, yellow >= 55, red below.
fn paint_score(score: u8) -> String {
    let text = format!("{:>3}", score);
    match score {
        85..=u8::MAX => text.green().to_string(),
        70..=84 => text.blue().to_string(),
        55..=69 => text.yellow().to_string(),
        _ => text.red().to_string(),
    }
}

/// A score bar like `██████████░░░░░░░░░░`, filled proportionally.
fn score_bar(score: u8, width: usize) -> String {
    let filled = (score as usize * width).div_ceil(100).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

const CATEGORY_LABEL_WIDTH: usize = 8; // fits "Exercise"

/// Render the full report: headline, category breakdown, recommendations.
pub fn format_report(results: &Results, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let headline = format!(
        "Overall vitality: {} / 100 ({})",
        results.overall_score, results.vitality
    );
    if use_colors {
        lines.push(headline.bold().to_string());
    } else {
        lines.push(headline);
    }
    lines.push(String::new());

    // Bar width adapts to the terminal; pipes get a fixed width.
    let bar_width = get_terminal_width()
        .map(|w| w.saturating_sub(CATEGORY_LABEL_WIDTH + 8).clamp(10, 30))
        .unwrap_or(20);

    let scores = results.category_scores;
    for (label, score) in [
        ("Sleep", scores.sleep),
        ("Diet", scores.diet),
        ("Exercise", scores.exercise),
        ("Stress", scores.stress),
        ("Health", scores.health),
    ] {
        let bar = score_bar(score, bar_width);
        if use_colors {
            lines.push(format!(
                "{:<width$} {}  {}",
                label,
                paint_score(score),
                bar.dimmed(),
                width = CATEGORY_LABEL_WIDTH
            ));
        } else {
            lines.push(format!(
                "{:<width$} {:>3}  {}",
                label,
                score,
                bar,
                width = CATEGORY_LABEL_WIDTH
            ));
        }
    }

    let advice = advice_lines(results);
    if !advice.is_empty() {
        lines.push(String::new());
        let header = "Recommendations".to_string();
        if use_colors {
            lines.push(header.bold().to_string());
        } else {
            lines.push(header);
        }
        for item in advice {
            lines.push(format!("  - {}", item));
        }
    }

    lines.join("\n")
}

/// The recommendation list for a result, in report order: the general
/// supplement note, each specific supplement with its blurb, the diet-plan
/// suggestions, then per-category improvement notes for scores below 70.
pub fn advice_lines(results: &Results) -> Vec<String> {
    let mut items = Vec::new();
    let recs = &results.recommendations;

    if recs.supplements {
        items.push(
            "Consider targeted nutritional supplements to address specific health concerns"
                .to_string(),
        );
    }
    for supplement in &recs.specific_supplements {
        items.push(format!("{}: {}", supplement.name(), supplement.blurb()));
    }
    if recs.ketogenic {
        items.push("Consider a ketogenic diet to optimize metabolic health and energy".to_string());
    }
    if recs.paleo {
        items.push(
            "Consider a paleo diet to reduce inflammation and improve overall health".to_string(),
        );
    }

    let scores = results.category_scores;
    if scores.sleep < 70 {
        items.push("Focus on improving sleep quality and consistency (aim for 7-9 hours)".to_string());
    }
    if scores.exercise < 70 {
        items.push("Increase physical activity with regular exercise (3-5 times per week)".to_string());
    }
    if scores.stress < 70 {
        items.push(
            "Implement stress management techniques like meditation or deep breathing".to_string(),
        );
    }
    if scores.diet < 70 {
        items.push("Improve your diet with more whole foods and less processed options".to_string());
    }

    items
}

/// List the question catalog, grouped as authored, so users can write an
/// answer file by hand.
pub fn format_questions(use_colors: bool) -> String {
    let mut lines = Vec::new();
    let mut current_category = "";

    for question in QUESTIONS {
        if question.category != current_category {
            if !current_category.is_empty() {
                lines.push(String::new());
            }
            current_category = question.category;
            if use_colors {
                lines.push(question.category.bold().to_string());
            } else {
                lines.push(question.category.to_string());
            }
        }

        if use_colors {
            lines.push(format!("  {}  {}", question.id.cyan(), question.prompt));
        } else {
            lines.push(format!("  {}  {}", question.id, question.prompt));
        }

        match question.kind {
            InputKind::SingleChoice { options } => {
                lines.push(format!("      one of: {}", options.join(" | ")));
            }
            InputKind::MultiChoice { options } => {
                lines.push(format!("      any of: [{}]", options.join(" | ")));
            }
            InputKind::Number { min, max, unit } => {
                lines.push(format!("      number: {}-{} {}", min, max, unit));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerSet;
    use crate::scoring::compute_results;

    fn sample_results() -> Results {
        let answers = AnswerSet::new()
            .with_number("sleep_hours", 8.0)
            .with_label("sleep_quality", "Excellent")
            .with_label("sleep_consistency", "Always")
            .with_label("ear_ringing", "Frequently");
        compute_results(&answers)
    }

    #[test]
    fn test_report_contains_headline_and_categories() {
        let report = format_report(&sample_results(), false);
        assert!(report.contains("Overall vitality:"));
        for label in ["Sleep", "Diet", "Exercise", "Stress", "Health"] {
            assert!(report.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_report_lists_triggered_supplement() {
        let report = format_report(&sample_results(), false);
        assert!(report.contains("Quietum Plus"));
        assert!(report.contains("ear health"));
    }

    #[test]
    fn test_advice_includes_low_category_notes() {
        let results = compute_results(&AnswerSet::new());
        let advice = advice_lines(&results);

        // Every category floors below 70 on an empty answer set.
        assert!(advice.iter().any(|l| l.contains("sleep quality")));
        assert!(advice.iter().any(|l| l.contains("physical activity")));
        assert!(advice.iter().any(|l| l.contains("stress management")));
        assert!(advice.iter().any(|l| l.contains("whole foods")));
    }

    #[test]
    fn test_advice_keto_and_paleo_travel_together() {
        let results = compute_results(&AnswerSet::new());
        let advice = advice_lines(&results);
        assert!(advice.iter().any(|l| l.contains("ketogenic diet")));
        assert!(advice.iter().any(|l| l.contains("paleo diet")));
    }

    #[test]
    fn test_score_bar_bounds() {
        assert_eq!(score_bar(0, 20), "░".repeat(20));
        assert_eq!(score_bar(100, 20), "█".repeat(20));
        assert_eq!(score_bar(50, 20).chars().filter(|&c| c == '█').count(), 10);
    }

    #[test]
    fn test_questions_listing_covers_catalog() {
        let listing = format_questions(false);
        assert!(listing.contains("sleep_hours"));
        assert!(listing.contains("social_connections"));
        assert!(listing.contains("one of:"));
        assert!(listing.contains("number: 0-12 hours"));
    }
}
