use std::collections::BTreeMap;

/// A field value is either a float or opaque text, never nested.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Float(f64),
    Text(String),
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// One time-series point: a measurement name plus a flat field set.
/// Field keys are unique within a point; the timestamp is assigned by
/// the sink at write time. Constructed fresh each poll cycle and never
/// mutated after it is handed to the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricPoint {
    measurement: String,
    fields: BTreeMap<String, FieldValue>,
}

impl MetricPoint {
    pub fn new(measurement: impl Into<String>) -> Self {
        Self {
            measurement: measurement.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a field. Re-using a key overwrites the earlier value, keeping
    /// keys unique within the point.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn measurement(&self) -> &str {
        &self.measurement
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keys_stay_unique() {
        let point = MetricPoint::new("weather")
            .field("temperature", 71.2)
            .field("temperature", 72.4);

        assert_eq!(point.fields().len(), 1);
        assert_eq!(
            point.fields().get("temperature"),
            Some(&FieldValue::Float(72.4))
        );
    }

    #[test]
    fn float_and_text_values() {
        let point = MetricPoint::new("weather_forecast")
            .field("today", "Sunny and mild")
            .field("uv", 3.0);

        assert_eq!(
            point.fields().get("today"),
            Some(&FieldValue::Text("Sunny and mild".to_string()))
        );
        assert_eq!(point.fields().get("uv"), Some(&FieldValue::Float(3.0)));
    }

    #[test]
    fn empty_point_reports_empty() {
        assert!(MetricPoint::new("fiber").is_empty());
        assert!(!MetricPoint::new("fiber").field("in", 1.0).is_empty());
    }
}
