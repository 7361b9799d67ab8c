pub mod collector;
pub mod models;

pub use collector::{EchoSensor, WaterLevelAdapter, DEFAULT_TANK_HEIGHT_CM};
pub use models::{TankMapper, TankReading, SPEED_OF_SOUND_CM_S};
