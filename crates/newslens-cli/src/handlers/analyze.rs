use crate::context::ExecutionContext;
use crate::presentation::formatters::text::error_message;
use crate::presentation::presenters;
use crate::presentation::renderers::ConsoleRenderer;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};
use crate::presentation::views::AnalysisView;
use crate::types::OutputFormat;
use anyhow::{bail, Result};
use newslens_app::{AnalysisPhase, AnalysisWorkflow, InputMode, SubmissionPayload};
use newslens_client::{ApiClient, ApiError};
use newslens_types::AnalysisResult;
use std::path::PathBuf;

pub fn handle(
    ctx: &ExecutionContext,
    title: Option<String>,
    content: Option<String>,
    source: Option<String>,
    file: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut workflow = AnalysisWorkflow::new();
    match file {
        Some(path) => {
            workflow.set_mode(InputMode::File);
            workflow.select_file(path);
        }
        None => {
            workflow.set_title(title.unwrap_or_default());
            workflow.set_content(content.unwrap_or_default());
            workflow.set_source(source.unwrap_or_default());
        }
    }

    // Validation runs before the client is even constructed; a rejected
    // submission never touches the network.
    let Some(submission) = workflow.submit() else {
        if let AnalysisPhase::Failed(err) = workflow.phase() {
            bail!(error_message(err));
        }
        bail!("submission was rejected");
    };

    let client = ctx.client()?;
    let outcome = execute_submission(&client, &submission.payload);
    workflow.complete(submission.generation, outcome);

    match workflow.phase() {
        AnalysisPhase::Success(result) => render_success(result, format),
        AnalysisPhase::Failed(err) => bail!(error_message(err)),
        _ => Ok(()),
    }
}

/// Run a submission ticket against the service. Shared with the TUI, which
/// executes the same payloads on worker threads.
pub(crate) fn execute_submission(
    client: &ApiClient,
    payload: &SubmissionPayload,
) -> Result<AnalysisResult, ApiError> {
    match payload {
        SubmissionPayload::Text(body) => client.detect(body),
        SubmissionPayload::File(path) => client.upload(path),
    }
}

fn render_success(result: &AnalysisResult, format: OutputFormat) -> Result<()> {
    let model = presenters::analysis::present_result(result);
    let badge = StatusBadge::new(model.severity, model.verdict.clone());
    let output = CommandResultViewModel::new(model.clone())
        .with_badge(badge)
        .with_suggestion(
            Guidance::new("Browse past verdicts").with_command("newslens reports"),
        );

    ConsoleRenderer::new(format).render(&output, AnalysisView::new(&model))
}
