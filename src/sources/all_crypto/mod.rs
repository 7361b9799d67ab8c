pub mod collector;
pub mod models;

pub use collector::AllCryptoAdapter;
pub use models::{AllCryptoMapper, SpotPrices, SymbolMap};
