//! State machines behind the newslens views.
//!
//! Each view owns its state exclusively and performs no I/O. Anything that
//! needs the network returns a ticket stamped with a generation counter; the
//! shell executes the request (on whatever thread it likes) and feeds the
//! outcome back through `complete(generation, ..)`. A completion whose
//! generation no longer matches is stale and is discarded, which is what
//! keeps rapid parameter changes last-write-wins regardless of response
//! arrival order.

pub mod analyzer;
pub mod dashboard;
pub mod reports;

pub use analyzer::{
    AnalysisPhase, AnalysisWorkflow, InputMode, Submission, SubmissionForm, SubmissionPayload,
};
pub use dashboard::{ChartFetch, ChartPanel, ChartStatus, DashboardState, SavedChart, StatsFetch};
pub use reports::{DetailTab, ReportsFetch, ReportsState, ROWS_PER_PAGE_CHOICES};
