//! ROI Engine - Property investment financial analysis
//!
//! This library provides:
//! - Input validation and market-default resolution
//! - Yield metrics (gross/net yield, cap rate, cash-on-cash)
//! - Fixed-rate mortgage amortization schedules
//! - Multi-year cash-flow, equity and break-even projections
//! - Rent, vacancy and interest-rate sensitivity grids
//! - Exit-sale return scenarios and tiered report assembly

pub mod analysis;
pub mod assumptions;
pub mod error;
pub mod exit;
pub mod metrics;
pub mod mortgage;
pub mod normalize;
pub mod projection;
pub mod property;
pub mod report;
pub mod sensitivity;

// Re-export commonly used types
pub use analysis::{analyze, AnalysisConfig, AnalysisEngine, AnalysisResult};
pub use error::{ExitError, ValidationError, ValidationIssue};
pub use exit::{ExitCalculator, ExitScenario};
pub use metrics::{calculate_yields, Metric, UndefinedReason, YieldMetrics};
pub use mortgage::{amortize, AmortizationSchedule};
pub use normalize::{AnalysisInput, InputNormalizer};
pub use projection::{ProjectionEngine, ProjectionResult, YearlySnapshot};
pub use property::{FinancingInput, PropertyInput};
pub use report::{assemble, Report, Tier};
pub use sensitivity::{SensitivityAnalyzer, SensitivityResult};
