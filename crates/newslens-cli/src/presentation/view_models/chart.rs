use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ChartSavedViewModel {
    pub kind: String,
    pub window: String,
    pub path: String,
    pub bytes: u64,
}
