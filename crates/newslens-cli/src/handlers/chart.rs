use crate::context::ExecutionContext;
use crate::presentation::formatters::text::error_message;
use crate::presentation::renderers::ConsoleRenderer;
use crate::presentation::view_models::{ChartSavedViewModel, CommandResultViewModel, StatusBadge};
use crate::presentation::views::ChartSavedView;
use crate::types::OutputFormat;
use anyhow::{anyhow, Context, Result};
use newslens_types::{ChartKind, TimeWindow};
use std::path::PathBuf;

pub fn handle(
    ctx: &ExecutionContext,
    kind: ChartKind,
    window: TimeWindow,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let client = ctx.client()?;
    let bytes = client
        .chart(kind, window)
        .map_err(|err| anyhow!(error_message(&err)))?;

    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!("newslens-{}-{}.png", kind.as_str(), window.slug()))
    });
    std::fs::write(&path, &bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;

    let model = ChartSavedViewModel {
        kind: kind.as_str().to_string(),
        window: window.label().to_string(),
        path: path.display().to_string(),
        bytes: bytes.len() as u64,
    };
    let result = CommandResultViewModel::new(model.clone())
        .with_badge(StatusBadge::success("Chart downloaded"));

    ConsoleRenderer::new(format).render(&result, ChartSavedView::new(&model))
}
