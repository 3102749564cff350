use crate::context::ExecutionContext;
use crate::presentation::formatters::text::error_message;
use crate::presentation::presenters::stats::present_statistics;
use crate::presentation::renderers::ConsoleRenderer;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};
use crate::presentation::views::StatsView;
use crate::types::OutputFormat;
use anyhow::{anyhow, Result};
use newslens_types::TimeWindow;

pub fn handle(ctx: &ExecutionContext, window: TimeWindow, format: OutputFormat) -> Result<()> {
    let client = ctx.client()?;
    let summary = client
        .statistics(window)
        .map_err(|err| anyhow!(error_message(&err)))?;

    let model = present_statistics(&summary, window);

    let mut output = CommandResultViewModel::new(model.clone());
    if model.total_analyzed == 0 {
        output = output
            .with_badge(StatusBadge::info("No analyses recorded yet"))
            .with_suggestion(
                Guidance::new("Analyze an article to populate the dashboard")
                    .with_command("newslens analyze --title ... --content ..."),
            );
    } else {
        output = output.with_badge(StatusBadge::success(format!(
            "{} articles analyzed",
            model.total_analyzed
        )));
    }

    ConsoleRenderer::new(format).render(&output, StatsView::new(&model))
}
