use crate::config::chart_cache_dir;
use crate::context::ExecutionContext;
use crate::presentation::tui::TuiApp;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let client = ctx.client()?;
    let chart_dir = chart_cache_dir()?;
    TuiApp::new(client, chart_dir).run()
}
