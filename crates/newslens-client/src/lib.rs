//! HTTP client for the news-credibility service.
//!
//! One method per service operation, no retries, no caching: every call is a
//! fresh round trip, and every failure is reduced to an [`ApiError`] kind
//! before it leaves this crate.

pub mod error;

pub use error::{classify_failure, ApiError, Result};

use newslens_types::{
    AnalysisResult, ChartKind, NewsSubmission, ReportPage, ReportRecord, StatisticsSummary,
    TimeWindow,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body the service sends alongside failure statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client for the detection service. Construct one explicitly and share it;
/// it is cheap to clone the inner connection pool and safe across threads.
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Unexpected(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit article text for classification.
    pub fn detect(&self, submission: &NewsSubmission) -> Result<AnalysisResult> {
        let url = format!("{}/api/detect", self.base_url);
        debug!(url = %url, title = %submission.title, "submitting text for analysis");

        let response = self
            .http
            .post(&url)
            .json(submission)
            .send()
            .map_err(transport_error)?;
        parse_json(response)
    }

    /// Upload a local file for classification. Reading the file happens
    /// before any network traffic, so a bad path is a validation failure.
    pub fn upload(&self, path: &Path) -> Result<AnalysisResult> {
        let bytes = std::fs::read(path).map_err(|e| {
            ApiError::Validation(format!("Could not read {}: {}", path.display(), e))
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.txt".to_string());

        let url = format!("{}/api/upload", self.base_url);
        debug!(url = %url, file = %file_name, size = bytes.len(), "uploading file for analysis");

        let part = reqwest::blocking::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::blocking::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .map_err(transport_error)?;
        parse_json(response)
    }

    /// Fetch the aggregate summary for a time window.
    pub fn statistics(&self, window: TimeWindow) -> Result<StatisticsSummary> {
        let url = format!(
            "{}/api/statistics?days={}",
            self.base_url,
            window.query_days()
        );
        debug!(url = %url, "fetching statistics");

        let response = self.http.get(&url).send().map_err(transport_error)?;
        parse_json(response)
    }

    /// Fetch recent reports, optionally restricted to fake verdicts. The
    /// server applies both the filter and the size limit.
    pub fn recent_reports(&self, limit: usize, fake_only: bool) -> Result<Vec<ReportRecord>> {
        let url = format!(
            "{}/api/recent?limit={}&fake_only={}",
            self.base_url, limit, fake_only
        );
        debug!(url = %url, "fetching reports");

        let response = self.http.get(&url).send().map_err(transport_error)?;
        let page: ReportPage = parse_json(response)?;
        Ok(page.items)
    }

    /// Fetch a server-rendered chart as raw PNG bytes. The image is opaque to
    /// the client.
    pub fn chart(&self, kind: ChartKind, window: TimeWindow) -> Result<Vec<u8>> {
        let url = format!(
            "{}/api/chart/{}?days={}",
            self.base_url,
            kind.as_str(),
            window.query_days()
        );
        debug!(url = %url, "fetching chart image");

        let response = self.http.get(&url).send().map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.json::<ErrorBody>().ok().and_then(|body| body.detail);
            return Err(classify_failure(status.as_u16(), detail));
        }

        let bytes = response
            .bytes()
            .map_err(|e| ApiError::Unexpected(format!("failed to read chart bytes: {}", e)))?;
        Ok(bytes.to_vec())
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    warn!(error = %err, "request did not complete");
    ApiError::Network(err.to_string())
}

fn parse_json<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let detail = response.json::<ErrorBody>().ok().and_then(|body| body.detail);
        let err = classify_failure(status.as_u16(), detail);
        warn!(status = status.as_u16(), error = %err, "service returned a failure");
        return Err(err);
    }

    response
        .json::<T>()
        .map_err(|e| ApiError::Unexpected(format!("malformed response payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn result_body() -> serde_json::Value {
        json!({
            "is_fake": true,
            "confidence": 0.93,
            "explanation": "Multiple fabricated quotes.",
            "title": "A",
            "content": "B",
            "source": null
        })
    }

    #[test]
    fn detect_posts_json_and_parses_result() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/detect")
            .match_body(Matcher::PartialJson(json!({"title": "A", "content": "B"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(result_body().to_string())
            .expect(1)
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let submission = NewsSubmission {
            title: "A".to_string(),
            content: "B".to_string(),
            source: None,
        };
        let result = client.detect(&submission).unwrap();

        mock.assert();
        assert!(result.is_fake);
        assert_eq!(result.confidence, 0.93);
    }

    #[test]
    fn detect_classifies_rate_limit_response() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/detect")
            .with_status(429)
            .with_header("content-type", "application/json")
            .with_body(json!({"detail": "Gemini API quota exceeded"}).to_string())
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let submission = NewsSubmission {
            title: "A".to_string(),
            content: "B".to_string(),
            source: None,
        };
        let err = client.detect(&submission).unwrap_err();
        assert_eq!(err, ApiError::RateLimited("Gemini API quota exceeded".to_string()));
    }

    #[test]
    fn detect_maps_error_without_detail_to_generic_server_error() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/detect")
            .with_status(500)
            .with_body("boom")
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let submission = NewsSubmission {
            title: "A".to_string(),
            content: "B".to_string(),
            source: None,
        };
        let err = client.detect(&submission).unwrap_err();
        assert_eq!(err, ApiError::Server("An error occurred on the server.".to_string()));
    }

    #[test]
    fn upload_sends_multipart_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("breaking_story.txt");
        std::fs::write(&path, "Breaking: something happened.").unwrap();

        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/upload")
            .match_header(
                "content-type",
                Matcher::Regex("multipart/form-data.*".to_string()),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "is_fake": false,
                    "confidence": 0.64,
                    "explanation": "Plausible, sourced.",
                    "title": "Breaking Story",
                    "filename": "breaking_story.txt"
                })
                .to_string(),
            )
            .expect(1)
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let result = client.upload(&path).unwrap();

        mock.assert();
        assert!(!result.is_fake);
        assert_eq!(result.content, "");
    }

    #[test]
    fn upload_rejects_missing_file_before_any_request() {
        let server = mockito::Server::new();
        let client = ApiClient::new(server.url()).unwrap();

        let err = client.upload(Path::new("/no/such/file.txt")).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn statistics_encodes_all_time_sentinel() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/statistics")
            .match_query(Matcher::UrlEncoded("days".into(), "-1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "total_count": {"total": 2, "fake": 1, "real": 1},
                    "recent_count": {"total": 0, "fake": 0, "real": 0},
                    "by_source": {},
                    "confidence_stats": {
                        "average": 0.5, "min": 0.2, "max": 0.8, "distribution": {}
                    }
                })
                .to_string(),
            )
            .expect(1)
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let summary = client.statistics(TimeWindow::All).unwrap();

        mock.assert();
        assert_eq!(summary.total_count.total, 2);
    }

    #[test]
    fn recent_reports_unwraps_items_envelope() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/recent")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "5".into()),
                Matcher::UrlEncoded("fake_only".into(), "true".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"items": [{
                    "id": "1",
                    "title": "T",
                    "content": "C",
                    "is_fake": true,
                    "confidence": 0.7,
                    "explanation": "E"
                }]})
                .to_string(),
            )
            .expect(1)
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let records = client.recent_reports(5, true).unwrap();

        mock.assert();
        assert_eq!(records.len(), 1);
        assert!(records.iter().all(|r| r.is_fake));
    }

    #[test]
    fn chart_returns_raw_bytes() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/chart/pie")
            .match_query(Matcher::UrlEncoded("days".into(), "7".into()))
            .with_status(200)
            .with_header("content-type", "image/png")
            .with_body([0x89, b'P', b'N', b'G'])
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let bytes = client.chart(ChartKind::Pie, TimeWindow::Week).unwrap();
        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn unreachable_server_is_a_network_error() {
        // Nothing listens on port 9 (discard); connection is refused locally.
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let err = client.statistics(TimeWindow::Week).unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
