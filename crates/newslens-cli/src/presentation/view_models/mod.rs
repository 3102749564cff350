pub mod analysis;
pub mod chart;
pub mod common;
pub mod reports;
pub mod stats;

pub use analysis::AnalysisViewModel;
pub use chart::ChartSavedViewModel;
pub use common::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
pub use reports::{ReportDetailViewModel, ReportListViewModel, ReportRowViewModel};
pub use stats::{DistributionRowViewModel, SourceRowViewModel, StatsViewModel};
