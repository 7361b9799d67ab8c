/// One camera event extracted from a broker topic.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraEvent {
    pub location: String,
    pub object: String,
}

impl CameraEvent {
    pub fn message(&self) -> String {
        format!("Alert from {} - Found {}", self.location, self.object)
    }
}

/// The filter-and-forward rule: a topic produces an alert only if it
/// contains the snapshot keyword, does not contain the state keyword,
/// and names one of the allowed camera locations.
#[derive(Debug, Clone)]
pub struct TopicFilter {
    locations: Vec<String>,
}

impl TopicFilter {
    pub fn new(locations: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            locations: locations.into_iter().map(Into::into).collect(),
        }
    }

    /// The cameras worth being notified about.
    pub fn default_locations() -> Self {
        Self::new(["backdeck", "driveway"])
    }

    pub fn evaluate(&self, topic: &str) -> Option<CameraEvent> {
        if !topic.contains("snapshot") || topic.contains("state") {
            return None;
        }
        if !self.locations.iter().any(|l| topic.contains(l.as_str())) {
            return None;
        }

        // frigate/backdeck/person/snapshot -> [backdeck, person]
        let stripped = topic.replace("frigate", "").replace("snapshot", "");
        let mut segments = stripped.split('/').filter(|s| !s.is_empty());
        let location = segments.next()?;
        let object = segments.next()?;
        Some(CameraEvent {
            location: location.to_string(),
            object: object.to_string(),
        })
    }
}
