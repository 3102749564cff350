use crate::presentation::view_models::StatsViewModel;
use std::fmt;

pub struct StatsView<'a> {
    data: &'a StatsViewModel,
}

impl<'a> StatsView<'a> {
    pub fn new(data: &'a StatsViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for StatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Time range: {}", self.data.window)?;
        writeln!(f)?;
        writeln!(
            f,
            "Total analyzed:  {} ({} in selected period)",
            self.data.total_analyzed, self.data.recent_analyzed
        )?;
        writeln!(
            f,
            "Fake detected:   {} ({} of total)",
            self.data.fake_count, self.data.fake_percent
        )?;
        writeln!(
            f,
            "Real confirmed:  {} ({} of total)",
            self.data.real_count, self.data.real_percent
        )?;
        writeln!(
            f,
            "Avg confidence:  {} (min {} | max {})",
            self.data.average_confidence, self.data.min_confidence, self.data.max_confidence
        )?;

        if !self.data.sources.is_empty() {
            writeln!(f)?;
            writeln!(f, "Top sources")?;
            writeln!(f, "{}", "-".repeat(60))?;
            writeln!(f, "{:<30} {:>8} {:>8} {:>10}", "SOURCE", "TOTAL", "FAKE", "FAKE %")?;
            for source in &self.data.sources {
                writeln!(
                    f,
                    "{:<30} {:>8} {:>8} {:>10}",
                    source.name, source.total, source.fake, source.fake_percent
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Confidence distribution")?;
        writeln!(f, "{}", "-".repeat(60))?;
        for row in &self.data.distribution {
            writeln!(
                f,
                "{:<9} {:<26} {:>6} {:>8}",
                row.range, row.label, row.count, row.percent
            )?;
        }

        Ok(())
    }
}
