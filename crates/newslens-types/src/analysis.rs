use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text-mode submission sent to the detection endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsSubmission {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Verdict returned by the detection service.
///
/// The upload endpoint responds without `content`/`source` and with an extra
/// `filename` field, so those are lenient on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub title: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub content: String,
    pub is_fake: bool,
    pub confidence: f64,
    pub explanation: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A persisted analysis, as listed by the reports endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub content: String,
    pub is_fake: bool,
    pub confidence: f64,
    pub explanation: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Envelope of the reports endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPage {
    pub items: Vec<ReportRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_skips_absent_source() {
        let submission = NewsSubmission {
            title: "A".to_string(),
            content: "B".to_string(),
            source: None,
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json, serde_json::json!({"title": "A", "content": "B"}));
    }

    #[test]
    fn result_parses_detect_shape() {
        let json = r#"{
            "is_fake": false,
            "confidence": 0.72,
            "explanation": "Consistent with wire reports.",
            "title": "Markets rally",
            "content": "Stocks rose...",
            "source": "Reuters"
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(!result.is_fake);
        assert_eq!(result.source.as_deref(), Some("Reuters"));
        assert!(result.timestamp.is_none());
    }

    #[test]
    fn result_parses_upload_shape() {
        // Upload responses carry a filename instead of content/source.
        let json = r#"{
            "is_fake": true,
            "confidence": 0.91,
            "explanation": "Sensational claims without attribution.",
            "title": "Shocking Cure",
            "filename": "shocking_cure.txt"
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.is_fake);
        assert_eq!(result.content, "");
        assert_eq!(result.source, None);
    }

    #[test]
    fn report_page_unwraps_items() {
        let json = r#"{"items": [{
            "id": "65a1",
            "title": "T",
            "content": "C",
            "is_fake": true,
            "confidence": 0.8,
            "explanation": "E",
            "timestamp": "2026-01-05T14:30:00Z"
        }]}"#;
        let page: ReportPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id.as_deref(), Some("65a1"));
        assert!(page.items[0].timestamp.is_some());
    }
}
