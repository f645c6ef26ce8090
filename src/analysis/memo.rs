use serde::Serialize;

use crate::models::AiDecision;

/// The executive memo, rendered verbatim from the decision.
#[derive(Debug, Clone, Serialize)]
pub struct MemoView {
    pub file_name: String,
    pub recommendation: &'static str,
    pub recommendation_class: &'static str,
    pub confidence_score: f64,
    pub executive_summary: String,
    pub key_factors: Vec<String>,
    pub risk_assessment: String,
    pub financial_analysis: String,
    pub next_steps: Vec<String>,
}

impl MemoView {
    pub fn build(decision: &AiDecision, file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            recommendation: decision.recommendation.as_str(),
            recommendation_class: decision.recommendation.css_class(),
            confidence_score: decision.confidence_score,
            executive_summary: decision.executive_summary.clone(),
            key_factors: decision.key_factors.clone(),
            risk_assessment: decision.risk_assessment.clone(),
            financial_analysis: decision.financial_analysis.clone(),
            next_steps: decision.next_steps.clone(),
        }
    }
}
