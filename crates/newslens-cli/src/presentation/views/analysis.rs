use super::status_level_color;
use crate::presentation::view_models::AnalysisViewModel;
use owo_colors::OwoColorize;
use std::fmt;

const BAR_WIDTH: usize = 24;

pub struct AnalysisView<'a> {
    data: &'a AnalysisViewModel,
}

impl<'a> AnalysisView<'a> {
    pub fn new(data: &'a AnalysisViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for AnalysisView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let color = status_level_color(self.data.severity);

        writeln!(f, "Title:      {}", self.data.title)?;
        if let Some(source) = &self.data.source {
            writeln!(f, "Source:     {}", source)?;
        }
        writeln!(f, "Verdict:    {}", self.data.verdict.color(color).bold())?;

        let filled = (self.data.confidence * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
        writeln!(
            f,
            "Confidence: {} ({})  {}",
            self.data.confidence_percent,
            self.data.confidence_level,
            bar.color(color)
        )?;

        writeln!(f)?;
        writeln!(f, "Explanation:")?;
        writeln!(f, "{}", self.data.explanation)?;

        Ok(())
    }
}
