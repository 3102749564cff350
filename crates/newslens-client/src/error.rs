use std::fmt;

/// Result type for newslens-client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Everything that can go wrong talking to the detection service, reduced to
/// the fixed set of kinds the UI knows how to present. Every failure is
/// converted to exactly one of these at the client boundary; callers store it
/// in their error state and never see a transport error directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Required input missing or unreadable; raised before any network call.
    Validation(String),

    /// The service signalled quota/throttling exhaustion.
    RateLimited(String),

    /// The requested resource does not exist.
    NotFound,

    /// The service rejected the credentials (401/403).
    Unauthorized,

    /// The service reported a failure; carries its detail message.
    Server(String),

    /// The request never reached the service or no response arrived.
    Network(String),

    /// None of the above, e.g. a malformed success payload.
    Unexpected(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => f.write_str(msg),
            ApiError::RateLimited(detail) => write!(f, "Rate limit exceeded: {}", detail),
            ApiError::NotFound => f.write_str("The requested resource was not found."),
            ApiError::Unauthorized => {
                f.write_str("You are not authorized to perform this action.")
            }
            ApiError::Server(detail) => f.write_str(detail),
            ApiError::Network(_) => {
                f.write_str("Could not connect to the server. Please check your connection.")
            }
            ApiError::Unexpected(_) => {
                f.write_str("An error occurred while processing your request.")
            }
        }
    }
}

impl std::error::Error for ApiError {}

const GENERIC_SERVER_MESSAGE: &str = "An error occurred on the server.";

/// Markers that identify quota exhaustion in a detail message even when the
/// status code says otherwise.
const RATE_LIMIT_MARKERS: [&str; 3] = ["429", "quota", "rate limit"];

/// Map an HTTP failure status plus the service's optional detail message to
/// an error kind.
pub fn classify_failure(status: u16, detail: Option<String>) -> ApiError {
    let detail = detail.filter(|d| !d.trim().is_empty());

    if status == 429 || detail_mentions_rate_limit(detail.as_deref()) {
        return ApiError::RateLimited(
            detail.unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_string()),
        );
    }

    match status {
        404 => ApiError::NotFound,
        401 | 403 => ApiError::Unauthorized,
        _ => ApiError::Server(detail.unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_string())),
    }
}

fn detail_mentions_rate_limit(detail: Option<&str>) -> bool {
    let Some(detail) = detail else {
        return false;
    };
    let lowered = detail.to_lowercase();
    RATE_LIMIT_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_429_is_rate_limited() {
        let err = classify_failure(429, Some("Daily quota exhausted".to_string()));
        assert_eq!(err, ApiError::RateLimited("Daily quota exhausted".to_string()));
    }

    #[test]
    fn rate_limit_marker_in_detail_wins_over_status() {
        let err = classify_failure(500, Some("Gemini quota exceeded for key".to_string()));
        assert!(matches!(err, ApiError::RateLimited(_)));

        let err = classify_failure(500, Some("upstream rate limit reached".to_string()));
        assert!(matches!(err, ApiError::RateLimited(_)));
    }

    #[test]
    fn fixed_kinds_for_missing_and_unauthorized() {
        assert_eq!(classify_failure(404, None), ApiError::NotFound);
        assert_eq!(classify_failure(401, None), ApiError::Unauthorized);
        assert_eq!(classify_failure(403, Some("nope".to_string())), ApiError::Unauthorized);
    }

    #[test]
    fn server_detail_is_kept_verbatim() {
        let err = classify_failure(500, Some("Error processing news: boom".to_string()));
        assert_eq!(err, ApiError::Server("Error processing news: boom".to_string()));
        assert_eq!(err.to_string(), "Error processing news: boom");
    }

    #[test]
    fn missing_or_blank_detail_falls_back_to_generic() {
        assert_eq!(
            classify_failure(500, None),
            ApiError::Server("An error occurred on the server.".to_string())
        );
        assert_eq!(
            classify_failure(502, Some("   ".to_string())),
            ApiError::Server("An error occurred on the server.".to_string())
        );
    }

    #[test]
    fn user_facing_messages_are_stable() {
        assert_eq!(
            ApiError::NotFound.to_string(),
            "The requested resource was not found."
        );
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Could not connect to the server. Please check your connection."
        );
    }
}
