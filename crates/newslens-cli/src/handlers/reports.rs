use crate::context::ExecutionContext;
use crate::presentation::formatters::text::error_message;
use crate::presentation::presenters::reports::present_list;
use crate::presentation::renderers::ConsoleRenderer;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};
use crate::presentation::views::ReportTableView;
use crate::types::OutputFormat;
use anyhow::{anyhow, Result};

pub fn handle(
    ctx: &ExecutionContext,
    limit: usize,
    fake_only: bool,
    format: OutputFormat,
) -> Result<()> {
    let client = ctx.client()?;
    let records = client
        .recent_reports(limit, fake_only)
        .map_err(|err| anyhow!(error_message(&err)))?;

    let model = present_list(&records, fake_only);

    let mut output = CommandResultViewModel::new(model.clone());
    if model.total_count == 0 {
        output = output
            .with_badge(StatusBadge::info("No reports found"))
            .with_suggestion(
                Guidance::new("Start analyzing news to see reports here")
                    .with_command("newslens analyze --title ... --content ..."),
            );
    } else {
        let label = if model.total_count == 1 {
            "1 report found".to_string()
        } else {
            format!("{} reports found", model.total_count)
        };
        output = output.with_badge(StatusBadge::success(label));

        if model.total_count >= limit {
            output = output.with_suggestion(
                Guidance::new(format!(
                    "Showing first {} reports, use --limit to see more",
                    limit
                ))
                .with_command(format!("newslens reports --limit {}", limit * 2)),
            );
        }
    }

    ConsoleRenderer::new(format).render(&output, ReportTableView::new(&model))
}
