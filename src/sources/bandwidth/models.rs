use crate::shared::error::CollectError;
use crate::shared::sink::MetricPoint;
use crate::shared::traits::FieldMapper;

/// Octet counters for one WAN link, already coerced to floats.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkCounters {
    pub measurement: String,
    pub inbound: f64,
    pub outbound: f64,
}

pub struct BandwidthMapper;

impl FieldMapper<Vec<LinkCounters>> for BandwidthMapper {
    fn map(&self, raw: &Vec<LinkCounters>) -> Result<Vec<MetricPoint>, CollectError> {
        Ok(raw
            .iter()
            .map(|link| {
                MetricPoint::new(link.measurement.as_str())
                    .field("in", link.inbound)
                    .field("out", link.outbound)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sink::FieldValue;

    #[test]
    fn one_point_per_link() {
        let raw = vec![
            LinkCounters {
                measurement: "fiber".to_string(),
                inbound: 100.0,
                outbound: 200.0,
            },
            LinkCounters {
                measurement: "starlink".to_string(),
                inbound: 7.0,
                outbound: 9.0,
            },
        ];
        let points = BandwidthMapper.map(&raw).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].measurement(), "fiber");
        assert_eq!(points[0].fields().get("in"), Some(&FieldValue::Float(100.0)));
        assert_eq!(points[0].fields().get("out"), Some(&FieldValue::Float(200.0)));
        assert_eq!(points[1].measurement(), "starlink");
    }
}
