pub mod all_crypto;
pub mod bandwidth;
pub mod crypto_prices;
pub mod nicehash;
pub mod shrimpy;
pub mod water_level;
pub mod weather_forecast;
pub mod weather_station;
