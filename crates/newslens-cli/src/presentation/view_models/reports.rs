use super::common::StatusLevel;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReportRowViewModel {
    pub status: String,
    pub severity: StatusLevel,
    pub title: String,
    pub source: String,
    pub confidence_percent: String,
    pub confidence_level: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportListViewModel {
    pub rows: Vec<ReportRowViewModel>,
    pub fake_only: bool,
    pub total_count: usize,
}

/// Detail for one report; carries the full text alongside the truncated
/// brief so tabs can switch without refetching anything.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDetailViewModel {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub date: String,
    pub classification: String,
    pub severity: StatusLevel,
    pub confidence: f64,
    pub confidence_percent: String,
    pub confidence_level: String,
    pub brief_explanation: String,
    pub content: String,
    pub explanation: String,
}
