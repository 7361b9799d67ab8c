use serde::Deserialize;

use crate::shared::error::CollectError;
use crate::shared::sink::MetricPoint;
use crate::shared::traits::FieldMapper;

/// The slice of the 5-day daily forecast we keep: one narrative string
/// per day.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    pub narrative: Vec<String>,
}

pub struct ForecastMapper;

impl FieldMapper<DailyForecast> for ForecastMapper {
    fn map(&self, raw: &DailyForecast) -> Result<Vec<MetricPoint>, CollectError> {
        let today = raw
            .narrative
            .first()
            .ok_or_else(|| CollectError::MissingField("narrative[0]".to_string()))?;
        let tomorrow = raw
            .narrative
            .get(1)
            .ok_or_else(|| CollectError::MissingField("narrative[1]".to_string()))?;

        // Narrative text is written as-is; these fields are opaque strings.
        let point = MetricPoint::new("weather_forecast")
            .field("today", today.as_str())
            .field("tomorrow", tomorrow.as_str());
        Ok(vec![point])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sink::FieldValue;

    #[test]
    fn maps_first_two_narratives() {
        let raw = DailyForecast {
            narrative: vec![
                "Sunny and mild".to_string(),
                "Rain likely".to_string(),
                "Clearing late".to_string(),
            ],
        };
        let points = ForecastMapper.map(&raw).unwrap();

        assert_eq!(points.len(), 1);
        let point = &points[0];
        assert_eq!(point.measurement(), "weather_forecast");
        assert_eq!(
            point.fields().get("today"),
            Some(&FieldValue::Text("Sunny and mild".to_string()))
        );
        assert_eq!(
            point.fields().get("tomorrow"),
            Some(&FieldValue::Text("Rain likely".to_string()))
        );
    }

    #[test]
    fn short_forecast_is_a_missing_field() {
        let raw = DailyForecast {
            narrative: vec!["Sunny".to_string()],
        };
        assert!(matches!(
            ForecastMapper.map(&raw),
            Err(CollectError::MissingField(field)) if field == "narrative[1]"
        ));
    }
}
