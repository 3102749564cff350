pub mod analysis;
pub mod chart;
pub mod reports;
pub mod stats;

pub use analysis::AnalysisView;
pub use chart::ChartSavedView;
pub use reports::ReportTableView;
pub use stats::StatsView;

use crate::presentation::view_models::StatusLevel;
use owo_colors::AnsiColors;

/// Terminal color for a status level, shared by every console view.
pub fn status_level_color(level: StatusLevel) -> AnsiColors {
    match level {
        StatusLevel::Success => AnsiColors::Green,
        StatusLevel::Info => AnsiColors::Cyan,
        StatusLevel::Warning => AnsiColors::Yellow,
        StatusLevel::Error => AnsiColors::Red,
    }
}
