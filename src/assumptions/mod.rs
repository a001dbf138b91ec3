//! Operating assumptions and closing-cost defaults

mod closing_costs;
mod operating;
pub mod loader;

pub use closing_costs::{ClosingCostSchedule, ResolvedClosingRates};
pub use loader::{load_overrides, load_overrides_from_reader};
pub use operating::{AssumptionOverrides, OperatingAssumptions};
