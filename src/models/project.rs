use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A completed past engagement returned by the analysis backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub cost: f64,
    pub duration: String,
    #[serde(default)]
    pub technology_stack: Vec<String>,
    pub client: String,
    pub completion_date: NaiveDate,
    /// Similarity to the uploaded RFP, in [0, 1].
    pub similarity_score: f64,
}
