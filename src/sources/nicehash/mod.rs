pub mod collector;
pub mod models;
pub mod signing;

pub use collector::NiceHashAdapter;
pub use models::{MiningMapper, MiningSnapshot};
pub use signing::ApiCredentials;
