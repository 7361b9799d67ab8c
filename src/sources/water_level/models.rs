use std::time::Duration;

use crate::shared::error::CollectError;
use crate::shared::sink::MetricPoint;
use crate::shared::traits::FieldMapper;

/// Sonic speed in cm/s; the echo pulse covers the round trip.
pub const SPEED_OF_SOUND_CM_S: f64 = 34300.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankReading {
    pub distance_cm: f64,
    pub percent_full: f64,
}

impl TankReading {
    pub fn from_pulse(pulse: Duration, tank_height_cm: f64) -> Self {
        let distance_cm = pulse.as_secs_f64() * SPEED_OF_SOUND_CM_S / 2.0;
        let percent_full = ((tank_height_cm - distance_cm) / tank_height_cm * 100.0).floor();
        Self {
            distance_cm,
            percent_full,
        }
    }
}

pub struct TankMapper;

impl FieldMapper<TankReading> for TankMapper {
    fn map(&self, raw: &TankReading) -> Result<Vec<MetricPoint>, CollectError> {
        let point = MetricPoint::new("water_level")
            .field("percent_full", raw.percent_full)
            .field("distance_cm", raw.distance_cm);
        Ok(vec![point])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sink::FieldValue;

    fn pulse_for_distance(distance_cm: f64) -> Duration {
        Duration::from_secs_f64(distance_cm * 2.0 / SPEED_OF_SOUND_CM_S)
    }

    #[test]
    fn fifty_cm_in_a_183_cm_tank_is_72_percent() {
        let reading = TankReading::from_pulse(pulse_for_distance(50.0), 183.0);

        assert!((reading.distance_cm - 50.0).abs() < 0.01);
        assert_eq!(reading.percent_full, 72.0);
    }

    #[test]
    fn percent_full_is_floored() {
        // 18.3 cm from the sensor: exactly 90% remains.
        let reading = TankReading::from_pulse(pulse_for_distance(18.3), 183.0);
        assert!((reading.percent_full - 90.0).abs() <= 1.0);

        // Just past half empty floors down, never rounds up.
        let reading = TankReading::from_pulse(pulse_for_distance(91.6), 183.0);
        assert_eq!(reading.percent_full, 49.0);
    }

    #[test]
    fn mapper_writes_both_fields() {
        let reading = TankReading {
            distance_cm: 40.0,
            percent_full: 78.0,
        };
        let points = TankMapper.map(&reading).unwrap();

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].measurement(), "water_level");
        assert_eq!(
            points[0].fields().get("percent_full"),
            Some(&FieldValue::Float(78.0))
        );
        assert_eq!(
            points[0].fields().get("distance_cm"),
            Some(&FieldValue::Float(40.0))
        );
    }
}
