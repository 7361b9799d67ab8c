use std::time::Duration;

use async_trait::async_trait;

use crate::shared::error::CollectError;
use crate::shared::traits::SourceAdapter;
use crate::sources::water_level::models::TankReading;

pub const DEFAULT_TANK_HEIGHT_CM: f64 = 183.0;

/// Triggers the ultrasonic sensor and measures the echo pulse width.
/// The GPIO wiring and pulse timing live behind this seam; an echo that
/// never arrives is reported as a sensor error.
pub trait EchoSensor: Send {
    fn pulse(&mut self) -> Result<Duration, CollectError>;
}

/// Converts the echo pulse to a distance and a percent-full reading for
/// the cistern tank.
pub struct WaterLevelAdapter<S> {
    sensor: S,
    tank_height_cm: f64,
}

impl<S: EchoSensor> WaterLevelAdapter<S> {
    pub fn new(sensor: S, tank_height_cm: f64) -> Self {
        Self {
            sensor,
            tank_height_cm,
        }
    }

    pub fn with_default_height(sensor: S) -> Self {
        Self::new(sensor, DEFAULT_TANK_HEIGHT_CM)
    }
}

#[async_trait]
impl<S: EchoSensor> SourceAdapter for WaterLevelAdapter<S> {
    type Raw = TankReading;

    fn name(&self) -> &str {
        "water_level"
    }

    async fn fetch(&mut self) -> Result<TankReading, CollectError> {
        let pulse = self.sensor.pulse()?;
        Ok(TankReading::from_pulse(pulse, self.tank_height_cm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::water_level::models::SPEED_OF_SOUND_CM_S;

    struct FixedSensor {
        pulse: Duration,
    }

    impl EchoSensor for FixedSensor {
        fn pulse(&mut self) -> Result<Duration, CollectError> {
            Ok(self.pulse)
        }
    }

    struct DeadSensor;

    impl EchoSensor for DeadSensor {
        fn pulse(&mut self) -> Result<Duration, CollectError> {
            Err(CollectError::Sensor("echo pulse never arrived".to_string()))
        }
    }

    #[tokio::test]
    async fn converts_pulse_to_reading() {
        let pulse = Duration::from_secs_f64(50.0 * 2.0 / SPEED_OF_SOUND_CM_S);
        let mut adapter = WaterLevelAdapter::with_default_height(FixedSensor { pulse });

        let reading = adapter.fetch().await.unwrap();
        assert_eq!(reading.percent_full, 72.0);
    }

    #[tokio::test]
    async fn sensor_failure_is_recoverable() {
        let mut adapter = WaterLevelAdapter::with_default_height(DeadSensor);
        assert!(matches!(
            adapter.fetch().await,
            Err(CollectError::Sensor(_))
        ));
    }
}
