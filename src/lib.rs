pub mod args;
pub mod classify;
pub mod errors;
pub mod extract;
pub mod gerrit;
pub mod git;
pub mod report;
pub mod tracker;

// Re-export commonly used items for convenience
pub use errors::AppError;
pub use extract::ReferenceMap;
pub use report::{Report, ReportLine};
pub use tracker::Tracker;
