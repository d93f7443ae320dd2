use serde::{Deserialize, Serialize};

/// Comparison dimensions as extracted from the backend data. `None` means the
/// value is unknown and is left out of normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMetrics {
    pub duration: Option<f64>,
    pub cost: Option<f64>,
    pub cluster: Option<f64>,
    pub availability: Option<f64>,
}

/// The same dimensions rescaled to 0-100 where higher is always better.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMetrics {
    pub duration: f64,
    pub cost: f64,
    pub cluster: f64,
    pub availability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub slot: usize,
    pub id: String,
    pub name: String,
    pub raw: RawMetrics,
    pub norm: NormalizedMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestValue {
    pub id: String,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub rows: Vec<MetricRow>,
    pub best: Option<BestValue>,
}

impl Comparison {
    pub fn ids(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.id.clone()).collect()
    }

    pub fn is_best(&self, id: &str) -> bool {
        self.best.as_ref().is_some_and(|best| best.id == id)
    }
}
