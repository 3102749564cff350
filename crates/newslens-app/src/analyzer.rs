use newslens_client::ApiError;
use newslens_types::{AnalysisResult, NewsSubmission};
use std::path::PathBuf;

/// Which submission mode the form is in. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Text,
    File,
}

/// Raw text-mode form fields, as typed. Validation happens on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionForm {
    pub title: String,
    pub content: String,
    pub source: String,
}

impl SubmissionForm {
    fn to_submission(&self) -> NewsSubmission {
        let source = self.source.trim();
        NewsSubmission {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            source: if source.is_empty() {
                None
            } else {
                Some(source.to_string())
            },
        }
    }
}

/// Lifecycle of one analysis session.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Submitting,
    Success(AnalysisResult),
    Failed(ApiError),
}

/// What the shell should send, stamped with the generation that must still be
/// current when the outcome comes back.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub generation: u64,
    pub payload: SubmissionPayload,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionPayload {
    Text(NewsSubmission),
    File(PathBuf),
}

/// The submission workflow: Idle -> Submitting -> Success | Failed, back to
/// Idle on reset or the next submission. At most one request in flight.
#[derive(Debug, Default)]
pub struct AnalysisWorkflow {
    mode: InputMode,
    form: SubmissionForm,
    file: Option<PathBuf>,
    phase: AnalysisPhase,
    generation: u64,
}

impl AnalysisWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    pub fn file(&self) -> Option<&PathBuf> {
        self.file.as_ref()
    }

    pub fn phase(&self) -> &AnalysisPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Submitting)
    }

    /// Switch between text and file mode. Ignored mid-submission; a mode
    /// change clears any previous result or error.
    pub fn set_mode(&mut self, mode: InputMode) {
        if self.is_submitting() || mode == self.mode {
            return;
        }
        self.mode = mode;
        self.phase = AnalysisPhase::Idle;
    }

    pub fn set_title(&mut self, title: String) {
        if !self.is_submitting() {
            self.form.title = title;
        }
    }

    pub fn set_content(&mut self, content: String) {
        if !self.is_submitting() {
            self.form.content = content;
        }
    }

    pub fn set_source(&mut self, source: String) {
        if !self.is_submitting() {
            self.form.source = source;
        }
    }

    pub fn select_file(&mut self, path: PathBuf) {
        if !self.is_submitting() {
            self.file = Some(path);
        }
    }

    pub fn clear_file(&mut self) {
        if !self.is_submitting() {
            self.file = None;
        }
    }

    /// Validate and start a submission. Returns the ticket to execute, or
    /// `None` when the guard failed (the phase then carries the validation
    /// error) or a submission is already in flight. No network is touched on
    /// the `None` path.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.is_submitting() {
            return None;
        }

        let payload = match self.mode {
            InputMode::Text => {
                let submission = self.form.to_submission();
                if submission.title.is_empty() || submission.content.is_empty() {
                    self.phase = AnalysisPhase::Failed(ApiError::Validation(
                        "Please provide both title and content.".to_string(),
                    ));
                    return None;
                }
                SubmissionPayload::Text(submission)
            }
            InputMode::File => match &self.file {
                Some(path) => SubmissionPayload::File(path.clone()),
                None => {
                    self.phase = AnalysisPhase::Failed(ApiError::Validation(
                        "Please select a file to upload.".to_string(),
                    ));
                    return None;
                }
            },
        };

        self.generation += 1;
        self.phase = AnalysisPhase::Submitting;
        Some(Submission {
            generation: self.generation,
            payload,
        })
    }

    /// Apply the outcome of a submission. Outcomes from a superseded
    /// generation, or arriving after a reset, are discarded.
    pub fn complete(&mut self, generation: u64, outcome: Result<AnalysisResult, ApiError>) {
        if generation != self.generation || !self.is_submitting() {
            return;
        }
        self.phase = match outcome {
            Ok(result) => AnalysisPhase::Success(result),
            Err(err) => AnalysisPhase::Failed(err),
        };
    }

    /// Back to an empty Idle form from any state. Bumps the generation so an
    /// in-flight response lands stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.form = SubmissionForm::default();
        self.file = None;
        self.phase = AnalysisPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_result(confidence: f64) -> AnalysisResult {
        AnalysisResult {
            title: "A".to_string(),
            source: None,
            content: "B".to_string(),
            is_fake: true,
            confidence,
            explanation: "Fabricated sourcing.".to_string(),
            timestamp: None,
        }
    }

    #[test]
    fn empty_content_fails_validation_without_a_ticket() {
        let mut workflow = AnalysisWorkflow::new();
        workflow.set_title("A headline".to_string());

        assert!(workflow.submit().is_none());
        match workflow.phase() {
            AnalysisPhase::Failed(ApiError::Validation(msg)) => {
                assert_eq!(msg, "Please provide both title and content.");
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn whitespace_only_fields_do_not_pass_the_guard() {
        let mut workflow = AnalysisWorkflow::new();
        workflow.set_title("   ".to_string());
        workflow.set_content("\n\t".to_string());
        assert!(workflow.submit().is_none());
    }

    #[test]
    fn file_mode_requires_a_selected_file() {
        let mut workflow = AnalysisWorkflow::new();
        workflow.set_mode(InputMode::File);

        assert!(workflow.submit().is_none());
        match workflow.phase() {
            AnalysisPhase::Failed(ApiError::Validation(msg)) => {
                assert_eq!(msg, "Please select a file to upload.");
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn successful_submission_reaches_success() {
        let mut workflow = AnalysisWorkflow::new();
        workflow.set_title("A".to_string());
        workflow.set_content("B".to_string());

        let submission = workflow.submit().expect("guard should pass");
        assert!(workflow.is_submitting());
        match &submission.payload {
            SubmissionPayload::Text(body) => {
                assert_eq!(body.title, "A");
                assert_eq!(body.source, None);
            }
            other => panic!("expected text payload, got {:?}", other),
        }

        workflow.complete(submission.generation, Ok(fake_result(0.93)));
        match workflow.phase() {
            AnalysisPhase::Success(result) => assert_eq!(result.confidence, 0.93),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut workflow = AnalysisWorkflow::new();
        workflow.set_title("A".to_string());
        workflow.set_content("B".to_string());

        let first = workflow.submit().unwrap();
        assert!(workflow.submit().is_none());
        assert!(workflow.is_submitting());

        workflow.complete(first.generation, Ok(fake_result(0.5)));
        assert!(matches!(workflow.phase(), AnalysisPhase::Success(_)));
    }

    #[test]
    fn response_after_reset_is_discarded() {
        let mut workflow = AnalysisWorkflow::new();
        workflow.set_title("A".to_string());
        workflow.set_content("B".to_string());

        let submission = workflow.submit().unwrap();
        workflow.reset();

        workflow.complete(submission.generation, Ok(fake_result(0.9)));
        assert_eq!(*workflow.phase(), AnalysisPhase::Idle);
        assert_eq!(workflow.form().title, "");
    }

    #[test]
    fn resubmission_supersedes_the_previous_request() {
        let mut workflow = AnalysisWorkflow::new();
        workflow.set_title("A".to_string());
        workflow.set_content("B".to_string());
        let first = workflow.submit().unwrap();

        // First attempt errors; the user resubmits before the stale success
        // from attempt one arrives.
        workflow.complete(first.generation, Err(ApiError::NotFound));
        let second = workflow.submit().unwrap();

        workflow.complete(first.generation, Ok(fake_result(0.2)));
        assert!(workflow.is_submitting(), "stale response must not land");

        workflow.complete(second.generation, Ok(fake_result(0.8)));
        match workflow.phase() {
            AnalysisPhase::Success(result) => assert_eq!(result.confidence, 0.8),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn mode_change_is_ignored_mid_submission_and_clears_results_otherwise() {
        let mut workflow = AnalysisWorkflow::new();
        workflow.set_title("A".to_string());
        workflow.set_content("B".to_string());
        let submission = workflow.submit().unwrap();

        workflow.set_mode(InputMode::File);
        assert_eq!(workflow.mode(), InputMode::Text);

        workflow.complete(submission.generation, Ok(fake_result(0.9)));
        assert!(matches!(workflow.phase(), AnalysisPhase::Success(_)));

        workflow.set_mode(InputMode::File);
        assert_eq!(workflow.mode(), InputMode::File);
        assert_eq!(*workflow.phase(), AnalysisPhase::Idle);
    }

    #[test]
    fn rate_limit_failure_is_kept_distinct() {
        let mut workflow = AnalysisWorkflow::new();
        workflow.set_title("A".to_string());
        workflow.set_content("B".to_string());
        let submission = workflow.submit().unwrap();

        workflow.complete(
            submission.generation,
            Err(ApiError::RateLimited("quota exhausted".to_string())),
        );
        assert!(matches!(
            workflow.phase(),
            AnalysisPhase::Failed(ApiError::RateLimited(_))
        ));
    }
}
