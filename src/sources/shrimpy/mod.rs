pub mod collector;
pub mod models;

pub use collector::ShrimpyAdapter;
pub use models::{BalanceMapper, PortfolioSnapshot};
