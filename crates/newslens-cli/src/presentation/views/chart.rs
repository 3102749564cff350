use crate::presentation::view_models::ChartSavedViewModel;
use std::fmt;

pub struct ChartSavedView<'a> {
    data: &'a ChartSavedViewModel,
}

impl<'a> ChartSavedView<'a> {
    pub fn new(data: &'a ChartSavedViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ChartSavedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Saved {} chart for {} ({} KB) to {}",
            self.data.kind,
            self.data.window,
            self.data.bytes.div_ceil(1024),
            self.data.path
        )
    }
}
