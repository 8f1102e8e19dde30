pub mod missing;

pub use missing::{calculate_missing_levels, MissingLevels};
