use scraper::{Html, Selector};

use crate::shared::error::CollectError;
use crate::shared::sink::MetricPoint;
use crate::shared::traits::FieldMapper;

/// Every form input scraped from the station's `livedata.htm`, still as
/// raw strings. Decoding happens here at the fetch boundary so a missing
/// input surfaces as a typed error, not a silent key miss.
#[derive(Debug, Clone, PartialEq)]
pub struct StationReadings {
    pub in_battery: String,
    pub out_battery: String,
    pub in_temp: String,
    pub in_humidity: String,
    pub abs_pressure: String,
    pub rel_pressure: String,
    pub out_temp: String,
    pub out_humidity: String,
    pub wind_dir: String,
    pub wind_speed: String,
    pub wind_gust: String,
    pub solar_radiation: String,
    pub uv: String,
    pub uv_index: String,
    pub rain_hourly: String,
}

fn form_value(document: &Html, name: &str) -> Result<String, CollectError> {
    let selector = Selector::parse(&format!("input[name=\"{}\"]", name))
        .map_err(|e| CollectError::Decode(e.to_string()))?;
    document
        .select(&selector)
        .next()
        .and_then(|input| input.value().attr("value"))
        .map(str::to_string)
        .ok_or_else(|| CollectError::MissingField(name.to_string()))
}

impl StationReadings {
    pub fn parse(html: &str) -> Result<Self, CollectError> {
        let document = Html::parse_document(html);
        Ok(Self {
            in_battery: form_value(&document, "inBattSta")?,
            out_battery: form_value(&document, "outBattSta1")?,
            in_temp: form_value(&document, "inTemp")?,
            in_humidity: form_value(&document, "inHumi")?,
            abs_pressure: form_value(&document, "AbsPress")?,
            rel_pressure: form_value(&document, "RelPress")?,
            out_temp: form_value(&document, "outTemp")?,
            out_humidity: form_value(&document, "outHumi")?,
            wind_dir: form_value(&document, "windir")?,
            wind_speed: form_value(&document, "avgwind")?,
            wind_gust: form_value(&document, "gustspeed")?,
            solar_radiation: form_value(&document, "solarrad")?,
            uv: form_value(&document, "uv")?,
            uv_index: form_value(&document, "uvi")?,
            rain_hourly: form_value(&document, "rainofhourly")?,
        })
    }
}

fn float_field(name: &str, raw: &str) -> Result<f64, CollectError> {
    raw.parse::<f64>()
        .map_err(|e| CollectError::Decode(format!("{}: {}", name, e)))
}

pub struct StationMapper;

impl FieldMapper<StationReadings> for StationMapper {
    fn map(&self, raw: &StationReadings) -> Result<Vec<MetricPoint>, CollectError> {
        let point = MetricPoint::new("weather")
            .field("temperature", float_field("outTemp", &raw.out_temp)?)
            .field("humidity", float_field("outHumi", &raw.out_humidity)?)
            .field("windDir", float_field("windir", &raw.wind_dir)?)
            .field("windSpeed", float_field("avgwind", &raw.wind_speed)?)
            .field("windGust", float_field("gustspeed", &raw.wind_gust)?)
            .field(
                "solarRadiation",
                float_field("solarrad", &raw.solar_radiation)?,
            )
            .field("uv", float_field("uv", &raw.uv)?)
            .field("uvi", float_field("uvi", &raw.uv_index)?)
            .field("rainHourly", float_field("rainofhourly", &raw.rain_hourly)?);
        Ok(vec![point])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sink::FieldValue;

    const SAMPLE: &str = r#"
        <html><body><form>
        <input name="inBattSta" value="Normal">
        <input name="outBattSta1" value="Normal">
        <input name="inTemp" value="71.1">
        <input name="inHumi" value="40">
        <input name="AbsPress" value="29.87">
        <input name="RelPress" value="29.92">
        <input name="outTemp" value="58.6">
        <input name="outHumi" value="81">
        <input name="windir" value="226">
        <input name="avgwind" value="3.4">
        <input name="gustspeed" value="5.1">
        <input name="solarrad" value="112.03">
        <input name="uv" value="301">
        <input name="uvi" value="1">
        <input name="rainofhourly" value="0.00">
        </form></body></html>
    "#;

    #[test]
    fn parses_all_form_inputs() {
        let readings = StationReadings::parse(SAMPLE).unwrap();

        assert_eq!(readings.out_temp, "58.6");
        assert_eq!(readings.in_battery, "Normal");
        assert_eq!(readings.wind_dir, "226");
        assert_eq!(readings.rain_hourly, "0.00");
    }

    #[test]
    fn missing_input_is_a_missing_field() {
        let html = r#"<html><body><input name="inTemp" value="71.1"></body></html>"#;
        assert!(matches!(
            StationReadings::parse(html),
            Err(CollectError::MissingField(name)) if name == "inBattSta"
        ));
    }

    #[test]
    fn maps_numeric_fields_as_floats() {
        let readings = StationReadings::parse(SAMPLE).unwrap();
        let points = StationMapper.map(&readings).unwrap();

        assert_eq!(points.len(), 1);
        let point = &points[0];
        assert_eq!(point.measurement(), "weather");
        assert_eq!(point.fields().len(), 9);
        assert_eq!(
            point.fields().get("temperature"),
            Some(&FieldValue::Float(58.6))
        );
        assert_eq!(point.fields().get("humidity"), Some(&FieldValue::Float(81.0)));
        assert_eq!(
            point.fields().get("rainHourly"),
            Some(&FieldValue::Float(0.0))
        );
    }

    #[test]
    fn non_numeric_reading_is_a_decode_error() {
        let mut readings = StationReadings::parse(SAMPLE).unwrap();
        readings.out_temp = "--".to_string();
        assert!(matches!(
            StationMapper.map(&readings),
            Err(CollectError::Decode(_))
        ));
    }
}
