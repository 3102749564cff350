use crate::presentation::formatters::text::confidence_percent;
use crate::presentation::view_models::AnalysisViewModel;
use newslens_types::{AnalysisResult, ConfidenceLevel, SeverityBucket};

pub fn present_result(result: &AnalysisResult) -> AnalysisViewModel {
    let verdict = if result.is_fake {
        "Potentially Fake News"
    } else {
        "Likely Real News"
    };

    AnalysisViewModel {
        title: result.title.clone(),
        source: result.source.clone(),
        verdict: verdict.to_string(),
        severity: SeverityBucket::classify(result.confidence, result.is_fake).into(),
        is_fake: result.is_fake,
        confidence: result.confidence,
        confidence_percent: confidence_percent(result.confidence),
        confidence_level: ConfidenceLevel::from_confidence(result.confidence)
            .label()
            .to_string(),
        explanation: result.explanation.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;

    #[test]
    fn confident_fake_presents_as_error_with_very_high_level() {
        let result = AnalysisResult {
            title: "A".to_string(),
            source: None,
            content: "B".to_string(),
            is_fake: true,
            confidence: 0.93,
            explanation: "Fabricated quotes.".to_string(),
            timestamp: None,
        };

        let model = present_result(&result);
        assert_eq!(model.verdict, "Potentially Fake News");
        assert_eq!(model.severity, StatusLevel::Error);
        assert_eq!(model.confidence_percent, "93.0%");
        assert_eq!(model.confidence_level, "Very High");
    }

    #[test]
    fn uncertain_real_presents_as_info() {
        let result = AnalysisResult {
            title: "A".to_string(),
            source: Some("Reuters".to_string()),
            content: "B".to_string(),
            is_fake: false,
            confidence: 0.41,
            explanation: "Partially corroborated.".to_string(),
            timestamp: None,
        };

        let model = present_result(&result);
        assert_eq!(model.verdict, "Likely Real News");
        assert_eq!(model.severity, StatusLevel::Info);
        assert_eq!(model.confidence_level, "Moderate");
    }
}
