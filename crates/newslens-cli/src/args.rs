use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use newslens_types::{ChartKind, TimeWindow};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "newslens")]
#[command(about = "Analyze news credibility and browse detection reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the detection service (overrides config and environment)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit an article for credibility analysis
    Analyze {
        /// Article headline
        #[arg(long)]
        title: Option<String>,

        /// Article body text
        #[arg(long)]
        content: Option<String>,

        /// Where the article came from (outlet, URL)
        #[arg(long)]
        source: Option<String>,

        /// Upload a local file instead of passing text inline
        #[arg(long, value_name = "PATH", conflicts_with_all = ["title", "content", "source"])]
        file: Option<PathBuf>,
    },

    /// Show aggregate detection statistics for a time window
    Stats {
        /// Time window: 7, 30, 90, 365 or "all"
        #[arg(long, default_value = "7", value_parser = parse_window)]
        days: TimeWindow,
    },

    /// List recent analysis reports
    Reports {
        /// Maximum number of reports to fetch
        #[arg(long, default_value = "50")]
        limit: usize,

        /// Only show reports classified as fake
        #[arg(long)]
        fake_only: bool,
    },

    /// Download a server-rendered statistics chart as PNG
    Chart {
        /// Chart kind: pie, trend, sources or confidence
        #[arg(value_parser = parse_chart_kind)]
        kind: ChartKind,

        /// Time window: 7, 30, 90, 365 or "all"
        #[arg(long, default_value = "7", value_parser = parse_window)]
        days: TimeWindow,

        /// Where to write the image (default: ./newslens-<kind>-<window>.png)
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Interactive terminal UI: analyzer, dashboard and report browser
    Tui,
}

fn parse_window(s: &str) -> Result<TimeWindow, String> {
    s.parse()
}

fn parse_chart_kind(s: &str) -> Result<ChartKind, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn stats_parses_all_time_window() {
        let cli = Cli::parse_from(["newslens", "stats", "--days", "all"]);
        match cli.command {
            Some(Commands::Stats { days }) => assert_eq!(days, TimeWindow::All),
            _ => panic!("expected stats command"),
        }
    }

    #[test]
    fn analyze_file_conflicts_with_text_fields() {
        let result = Cli::try_parse_from([
            "newslens", "analyze", "--file", "a.txt", "--title", "T",
        ]);
        assert!(result.is_err());
    }
}
