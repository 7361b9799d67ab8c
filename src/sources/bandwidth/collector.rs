use async_trait::async_trait;

use crate::shared::error::CollectError;
use crate::shared::traits::SourceAdapter;
use crate::sources::bandwidth::models::LinkCounters;

/// IF-MIB ifInOctets / ifOutOctets column OIDs; the interface index is
/// appended per link.
pub const IF_IN_OCTETS: &str = ".1.3.6.1.2.1.2.2.1.10";
pub const IF_OUT_OCTETS: &str = ".1.3.6.1.2.1.2.2.1.16";

/// One SNMP GET against the gateway. The session itself (transport,
/// community, version) is an external collaborator; blocking inside a
/// cycle is acceptable.
pub trait SnmpSession: Send {
    fn get(&mut self, oid: &str) -> Result<String, CollectError>;
}

#[derive(Debug, Clone)]
pub struct WanLink {
    pub measurement: String,
    pub if_index: u32,
}

impl WanLink {
    pub fn new(measurement: impl Into<String>, if_index: u32) -> Self {
        Self {
            measurement: measurement.into(),
            if_index,
        }
    }
}

/// Reads the in/out octet counters for each WAN link, one GET per
/// counter per cycle.
pub struct BandwidthAdapter<S> {
    session: S,
    links: Vec<WanLink>,
}

impl<S: SnmpSession> BandwidthAdapter<S> {
    pub fn new(session: S, links: Vec<WanLink>) -> Self {
        Self { session, links }
    }

    /// The home gateway's WAN layout: fiber on ifIndex 2, starlink on 3.
    pub fn with_default_links(session: S) -> Self {
        Self::new(
            session,
            vec![WanLink::new("fiber", 2), WanLink::new("starlink", 3)],
        )
    }

    fn read_counter(&mut self, column: &str, if_index: u32) -> Result<f64, CollectError> {
        let oid = format!("{}.{}", column, if_index);
        let value = self.session.get(&oid)?;
        value
            .parse::<f64>()
            .map_err(|e| CollectError::Decode(format!("{}: {}", oid, e)))
    }
}

#[async_trait]
impl<S: SnmpSession> SourceAdapter for BandwidthAdapter<S> {
    type Raw = Vec<LinkCounters>;

    fn name(&self) -> &str {
        "bandwidth"
    }

    async fn fetch(&mut self) -> Result<Vec<LinkCounters>, CollectError> {
        let links = self.links.clone();
        let mut counters = Vec::with_capacity(links.len());
        for link in links {
            let inbound = self.read_counter(IF_IN_OCTETS, link.if_index)?;
            let outbound = self.read_counter(IF_OUT_OCTETS, link.if_index)?;
            counters.push(LinkCounters {
                measurement: link.measurement,
                inbound,
                outbound,
            });
        }
        Ok(counters)
    }
}
