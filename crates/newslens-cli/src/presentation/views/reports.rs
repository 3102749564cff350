use crate::presentation::view_models::{ReportListViewModel, StatusLevel};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::fmt;

pub struct ReportTableView<'a> {
    data: &'a ReportListViewModel,
}

impl<'a> ReportTableView<'a> {
    pub fn new(data: &'a ReportListViewModel) -> Self {
        Self { data }
    }
}

fn status_cell_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

impl<'a> fmt::Display for ReportTableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.rows.is_empty() {
            writeln!(f, "No reports found.")?;
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["STATUS", "TITLE", "SOURCE", "CONFIDENCE", "DATE"]);

        for row in &self.data.rows {
            table.add_row(vec![
                Cell::new(&row.status).fg(status_cell_color(row.severity)),
                Cell::new(&row.title),
                Cell::new(&row.source),
                Cell::new(format!("{} ({})", row.confidence_percent, row.confidence_level)),
                Cell::new(&row.date),
            ]);
        }

        writeln!(f, "{}", table)
    }
}
