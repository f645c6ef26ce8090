//! Display computations over the projects and memo returned by the backend.

pub mod card;
pub mod memo;
pub mod summary;

use serde::Serialize;

use crate::models::{AiDecision, Project};

pub use card::{MatchTier, ProjectCard, format_currency, format_date};
pub use memo::MemoView;
pub use summary::{CostSummary, rank_by_similarity};

/// Everything the results section renders: aggregate stats above the cards,
/// cards in descending similarity order.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub summary: Option<SummaryView>,
    pub cards: Vec<ProjectCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub count: usize,
    pub average_cost: f64,
    pub min_cost: f64,
    pub max_cost: f64,
    pub average_display: String,
    pub range_display: String,
}

impl ResultsView {
    pub fn build(projects: &[Project]) -> Self {
        let summary = CostSummary::from_projects(projects).map(|s| SummaryView {
            count: s.count,
            average_cost: s.average,
            min_cost: s.min,
            max_cost: s.max,
            average_display: format_currency(s.average),
            range_display: format!("{} - {}", format_currency(s.min), format_currency(s.max)),
        });

        let mut ranked = projects.to_vec();
        rank_by_similarity(&mut ranked);

        Self {
            summary,
            cards: ranked.iter().map(ProjectCard::from_project).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Memo view for an optional decision.
pub fn memo_view(decision: Option<&AiDecision>, file_name: Option<&str>) -> Option<MemoView> {
    match (decision, file_name) {
        (Some(decision), Some(file_name)) => Some(MemoView::build(decision, file_name)),
        _ => None,
    }
}
