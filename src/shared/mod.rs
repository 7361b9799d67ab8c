pub mod config;
pub mod error;
pub mod http;
pub mod poller;
pub mod sink;
pub mod traits;

pub use error::*;
pub use traits::*;
