use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Project;

/// Three-band classification of a similarity score. Lower bounds are
/// inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
}

impl MatchTier {
    pub const EXCELLENT_FLOOR: f64 = 0.9;
    pub const GOOD_FLOOR: f64 = 0.8;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::EXCELLENT_FLOOR {
            MatchTier::Excellent
        } else if score >= Self::GOOD_FLOOR {
            MatchTier::Good
        } else {
            MatchTier::Fair
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent Match",
            MatchTier::Good => "Good Match",
            MatchTier::Fair => "Fair Match",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "#4CAF50",
            MatchTier::Good => "#FF9800",
            MatchTier::Fair => "#f44336",
        }
    }
}

/// One project, pre-formatted for display.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub cost: f64,
    pub cost_display: String,
    pub duration: String,
    pub client: String,
    pub completed_display: String,
    pub similarity_score: f64,
    pub match_percent: i64,
    pub tier: MatchTier,
    pub tier_label: &'static str,
    pub tier_color: &'static str,
    pub tags: Vec<String>,
}

impl ProjectCard {
    pub fn from_project(project: &Project) -> Self {
        let tier = MatchTier::from_score(project.similarity_score);
        Self {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            cost: project.cost,
            cost_display: format_currency(project.cost),
            duration: project.duration.clone(),
            client: project.client.clone(),
            completed_display: format_date(project.completion_date),
            similarity_score: project.similarity_score,
            match_percent: match_percent(project.similarity_score),
            tier,
            tier_label: tier.label(),
            tier_color: tier.color(),
            tags: project.technology_stack.clone(),
        }
    }
}

/// Score as a whole percentage, rounded half away from zero.
pub fn match_percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// en-US currency: `$` prefix, comma grouping, at most three fraction digits
/// with trailing zeros dropped. `485000.0` renders as `$485,000`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }

    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{frac_part}")
    }
}

/// en-US medium date, e.g. `Mar 15, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
