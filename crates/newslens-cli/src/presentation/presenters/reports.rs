use crate::presentation::formatters::text::{
    confidence_percent, confidence_percent_short, truncate, BRIEF_EXPLANATION_CAP, TITLE_CAP,
};
use crate::presentation::formatters::time::format_timestamp;
use crate::presentation::view_models::{
    ReportDetailViewModel, ReportListViewModel, ReportRowViewModel,
};
use newslens_types::{ConfidenceLevel, ReportRecord, SeverityBucket};

pub fn present_list(records: &[ReportRecord], fake_only: bool) -> ReportListViewModel {
    ReportListViewModel {
        rows: records.iter().map(present_row).collect(),
        fake_only,
        total_count: records.len(),
    }
}

pub fn present_row(record: &ReportRecord) -> ReportRowViewModel {
    ReportRowViewModel {
        status: if record.is_fake { "Fake" } else { "Real" }.to_string(),
        severity: SeverityBucket::classify(record.confidence, record.is_fake).into(),
        title: truncate(&record.title, TITLE_CAP),
        source: record
            .source
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        confidence_percent: confidence_percent_short(record.confidence),
        confidence_level: ConfidenceLevel::from_confidence(record.confidence)
            .label()
            .to_string(),
        date: format_timestamp(record.timestamp),
    }
}

pub fn present_detail(record: &ReportRecord) -> ReportDetailViewModel {
    ReportDetailViewModel {
        title: record.title.clone(),
        source: record.source.clone(),
        date: format_timestamp(record.timestamp),
        classification: if record.is_fake { "Fake News" } else { "Real News" }.to_string(),
        severity: SeverityBucket::classify(record.confidence, record.is_fake).into(),
        confidence: record.confidence,
        confidence_percent: confidence_percent(record.confidence),
        confidence_level: ConfidenceLevel::from_confidence(record.confidence)
            .label()
            .to_string(),
        brief_explanation: truncate(&record.explanation, BRIEF_EXPLANATION_CAP),
        content: record.content.clone(),
        explanation: record.explanation.clone(),
    }
}
