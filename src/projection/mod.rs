//! Multi-year cash-flow and equity projection

mod engine;
mod snapshot;

pub use engine::{ProjectionConfig, ProjectionEngine, DEFAULT_HORIZON_YEARS, MAX_HORIZON_YEARS};
pub use snapshot::{ProjectionResult, ProjectionSummary, YearlySnapshot};
