pub mod analysis;
pub mod stats;
pub mod verdict;
pub mod window;

pub use analysis::*;
pub use stats::*;
pub use verdict::*;
pub use window::*;
