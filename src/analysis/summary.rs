use crate::models::Project;

/// Aggregate cost statistics over a result set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostSummary {
    pub count: usize,
    pub total: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl CostSummary {
    /// `None` for an empty slice; there is no meaningful average of nothing.
    pub fn from_projects(projects: &[Project]) -> Option<Self> {
        let first = projects.first()?;

        let (total, min, max) = projects.iter().fold(
            (0.0, first.cost, first.cost),
            |(total, min, max), p| (total + p.cost, min.min(p.cost), max.max(p.cost)),
        );

        Some(Self {
            count: projects.len(),
            total,
            average: total / projects.len() as f64,
            min,
            max,
        })
    }
}

/// Sort most similar first. Stable, so equal scores keep their input order.
pub fn rank_by_similarity(projects: &mut [Project]) {
    projects.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
}
