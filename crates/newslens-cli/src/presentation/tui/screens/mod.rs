//! Screen renderers. Each screen draws from the view state machines through
//! the presenters; no derived value is stored between frames.

pub mod analyzer;
pub mod dashboard;
pub mod reports;
pub mod status_bar;

use crate::presentation::view_models::StatusLevel;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Color;

pub fn level_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// A rect centered in `area`, sized as a percentage of it. Used for the
/// report detail overlay.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);

    horizontal[1]
}
