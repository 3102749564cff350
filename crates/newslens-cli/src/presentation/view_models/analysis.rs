use super::common::StatusLevel;
use serde::Serialize;

/// A verdict prepared for display. Every derived field (percent strings,
/// level label, severity) is computed by the presenter; renderers only print.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisViewModel {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub verdict: String,
    pub severity: StatusLevel,
    pub is_fake: bool,
    pub confidence: f64,
    pub confidence_percent: String,
    pub confidence_level: String,
    pub explanation: String,
}
