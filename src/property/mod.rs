//! Property and financing inputs plus portfolio loading

mod data;
pub mod loader;

pub use data::{FinancingInput, PropertyInput};
pub use loader::{load_portfolio, load_portfolio_from_reader, PortfolioEntry};
