use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Pursue,
    Decline,
    ReviewRequired,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Pursue => "PURSUE",
            Recommendation::Decline => "DECLINE",
            Recommendation::ReviewRequired => "REVIEW_REQUIRED",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Recommendation::Pursue => "pursue",
            Recommendation::Decline => "decline",
            Recommendation::ReviewRequired => "review",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AI-generated bid/no-bid memo. Only present when the backend runs the
/// decision stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiDecision {
    pub recommendation: Recommendation,
    pub confidence_score: f64,
    pub executive_summary: String,
    #[serde(default)]
    pub key_factors: Vec<String>,
    pub risk_assessment: String,
    pub financial_analysis: String,
    #[serde(default)]
    pub next_steps: Vec<String>,
}
