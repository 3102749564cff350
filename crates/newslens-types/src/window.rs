use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recency filter applied to statistics and charts. Fixed set; "all time"
/// is encoded as the `days=-1` sentinel on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    #[default]
    Week,
    Month,
    Quarter,
    Year,
    All,
}

impl TimeWindow {
    pub const ALL_WINDOWS: [TimeWindow; 5] = [
        TimeWindow::Week,
        TimeWindow::Month,
        TimeWindow::Quarter,
        TimeWindow::Year,
        TimeWindow::All,
    ];

    /// Value of the `days` query parameter.
    pub fn query_days(self) -> i64 {
        match self {
            TimeWindow::Week => 7,
            TimeWindow::Month => 30,
            TimeWindow::Quarter => 90,
            TimeWindow::Year => 365,
            TimeWindow::All => -1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeWindow::Week => "Last 7 days",
            TimeWindow::Month => "Last 30 days",
            TimeWindow::Quarter => "Last 3 months",
            TimeWindow::Year => "Last year",
            TimeWindow::All => "All time",
        }
    }

    /// Short form for file names and slugs.
    pub fn slug(self) -> &'static str {
        match self {
            TimeWindow::Week => "7d",
            TimeWindow::Month => "30d",
            TimeWindow::Quarter => "90d",
            TimeWindow::Year => "365d",
            TimeWindow::All => "all",
        }
    }

    pub fn next(self) -> Self {
        let windows = Self::ALL_WINDOWS;
        let index = windows.iter().position(|w| *w == self).unwrap_or(0);
        windows[(index + 1) % windows.len()]
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7" => Ok(TimeWindow::Week),
            "30" => Ok(TimeWindow::Month),
            "90" => Ok(TimeWindow::Quarter),
            "365" => Ok(TimeWindow::Year),
            "all" => Ok(TimeWindow::All),
            other => Err(format!(
                "invalid time window '{}' (expected 7, 30, 90, 365 or all)",
                other
            )),
        }
    }
}

/// Chart variants the service can render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Pie,
    Trend,
    Sources,
    Confidence,
}

impl ChartKind {
    pub const ALL_KINDS: [ChartKind; 4] = [
        ChartKind::Pie,
        ChartKind::Trend,
        ChartKind::Sources,
        ChartKind::Confidence,
    ];

    /// Path segment of the chart endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Trend => "trend",
            ChartKind::Sources => "sources",
            ChartKind::Confidence => "confidence",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Pie => "Distribution",
            ChartKind::Trend => "Trends",
            ChartKind::Sources => "Sources",
            ChartKind::Confidence => "Confidence",
        }
    }

    pub fn next(self) -> Self {
        let kinds = Self::ALL_KINDS;
        let index = kinds.iter().position(|k| *k == self).unwrap_or(0);
        kinds[(index + 1) % kinds.len()]
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pie" => Ok(ChartKind::Pie),
            "trend" => Ok(ChartKind::Trend),
            "sources" => Ok(ChartKind::Sources),
            "confidence" => Ok(ChartKind::Confidence),
            other => Err(format!(
                "invalid chart kind '{}' (expected pie, trend, sources or confidence)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_parse_and_encode() {
        assert_eq!("7".parse::<TimeWindow>().unwrap(), TimeWindow::Week);
        assert_eq!("all".parse::<TimeWindow>().unwrap(), TimeWindow::All);
        assert!("14".parse::<TimeWindow>().is_err());

        assert_eq!(TimeWindow::Week.query_days(), 7);
        assert_eq!(TimeWindow::All.query_days(), -1);
    }

    #[test]
    fn window_cycle_wraps() {
        let mut window = TimeWindow::Week;
        for _ in 0..TimeWindow::ALL_WINDOWS.len() {
            window = window.next();
        }
        assert_eq!(window, TimeWindow::Week);
    }

    #[test]
    fn chart_kinds_parse_to_path_segment() {
        for kind in ChartKind::ALL_KINDS {
            assert_eq!(kind.as_str().parse::<ChartKind>().unwrap(), kind);
        }
        assert!("scatter".parse::<ChartKind>().is_err());
    }
}
