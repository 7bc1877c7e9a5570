pub mod axis;
pub mod stats;

pub use axis::evenly_spaced;
pub use stats::StatsHelper;
