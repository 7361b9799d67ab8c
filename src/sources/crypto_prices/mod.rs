pub mod collector;
pub mod models;

pub use collector::PoloniexAdapter;
pub use models::{TickerMapper, TickerResponse, TRACKED_PAIRS};
