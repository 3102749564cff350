use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::types::LogLevel;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    // The TUI owns the terminal; log lines would tear the alternate screen.
    if !matches!(command, Commands::Tui) {
        init_tracing(cli.log_level);
    }

    let ctx = ExecutionContext::new(cli.api_url);

    match command {
        Commands::Analyze {
            title,
            content,
            source,
            file,
        } => handlers::analyze::handle(&ctx, title, content, source, file, cli.format),

        Commands::Stats { days } => handlers::stats::handle(&ctx, days, cli.format),

        Commands::Reports { limit, fake_only } => {
            handlers::reports::handle(&ctx, limit, fake_only, cli.format)
        }

        Commands::Chart { kind, days, output } => {
            handlers::chart::handle(&ctx, kind, days, output, cli.format)
        }

        Commands::Tui => handlers::tui::handle(&ctx),
    }
}

fn init_tracing(level: LogLevel) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn show_guidance() {
    println!("newslens - analyze news credibility and browse detection reports");
    println!();
    println!("Common commands:");
    println!("  newslens analyze --title <T> --content <C>   Analyze article text");
    println!("  newslens analyze --file <PATH>               Analyze a local file");
    println!("  newslens stats --days 30                     Detection statistics");
    println!("  newslens reports --fake-only                 Recent fake verdicts");
    println!("  newslens chart pie --days 7                  Download a chart image");
    println!("  newslens tui                                 Interactive terminal UI");
    println!();
    println!("Run 'newslens --help' for all options.");
}
