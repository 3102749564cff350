use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SourceRowViewModel {
    pub name: String,
    pub total: u64,
    pub fake: u64,
    pub fake_percent: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DistributionRowViewModel {
    pub range: String,
    pub label: String,
    pub count: u64,
    pub percent: String,
}

/// The dashboard summary, fully derived for a given time window.
#[derive(Debug, Clone, Serialize)]
pub struct StatsViewModel {
    pub window: String,
    pub total_analyzed: u64,
    pub recent_analyzed: u64,
    pub fake_count: u64,
    pub fake_percent: String,
    pub real_count: u64,
    pub real_percent: String,
    pub average_confidence: String,
    pub min_confidence: String,
    pub max_confidence: String,
    pub sources: Vec<SourceRowViewModel>,
    pub distribution: Vec<DistributionRowViewModel>,
}
