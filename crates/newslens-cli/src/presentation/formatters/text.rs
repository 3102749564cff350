use newslens_client::ApiError;

/// Display caps for list rendering. Truncation is display-only; the
/// underlying records always keep their full text.
pub const TITLE_CAP: usize = 50;
pub const BRIEF_EXPLANATION_CAP: usize = 300;

/// Advisory shown instead of the raw message when the service signals quota
/// exhaustion: the backend switches to a degraded rule-based classifier
/// rather than failing outright.
pub const RATE_LIMIT_ADVISORY: &str = "The AI analysis rate limit has been exceeded. \
The service now falls back to a simple rule-based classifier that is less accurate \
but keeps the app usable. For best results, try again later.";

/// Truncate and normalize a string for one-line display:
/// - newlines become spaces, runs of whitespace collapse
/// - respects UTF-8 character boundaries
/// - appends "..." when something was cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    let normalized = text
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if normalized.chars().count() <= max_chars {
        normalized
    } else {
        let kept: String = normalized.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// A value already in percent units, one decimal: 23.84 -> "23.8%".
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// A confidence fraction in [0,1], one decimal: 0.93 -> "93.0%".
pub fn confidence_percent(confidence: f64) -> String {
    format_percent(confidence * 100.0)
}

/// A confidence fraction without decimals, for narrow columns: 0.93 -> "93%".
pub fn confidence_percent_short(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}

/// The message a user should read for a failure. Rate limiting gets the
/// fallback advisory; everything else uses the error's own message.
pub fn error_message(err: &ApiError) -> String {
    match err {
        ApiError::RateLimited(_) => RATE_LIMIT_ADVISORY.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text_and_collapses_whitespace() {
        assert_eq!(truncate("a  b\nc", 50), "a b c");
    }

    #[test]
    fn truncate_cuts_long_text_with_ellipsis() {
        let long = "x".repeat(80);
        let cut = truncate(&long, 50);
        assert_eq!(cut.chars().count(), 50);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn truncate_respects_multibyte_boundaries() {
        let text = "ü".repeat(60);
        let cut = truncate(&text, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(confidence_percent(0.93), "93.0%");
        assert_eq!(confidence_percent_short(0.934), "93%");
    }

    #[test]
    fn rate_limit_errors_surface_the_advisory() {
        let err = ApiError::RateLimited("quota exceeded".to_string());
        assert_eq!(error_message(&err), RATE_LIMIT_ADVISORY);

        let err = ApiError::Server("Error processing news: boom".to_string());
        assert_eq!(error_message(&err), "Error processing news: boom");
    }
}
