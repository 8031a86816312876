//! Small records persisted as JSON under a single key
//!
//! Every field carries `#[serde(default)]` so that a record written by an
//! older build still decodes after fields are added.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A page on a specific wiki
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageTitle {
    /// Wiki language code, e.g. `en`
    #[serde(default)]
    pub wiki: String,
    #[serde(default)]
    pub namespace: String,
    pub text: String,
}

impl PageTitle {
    pub fn new(wiki: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            wiki: wiki.into(),
            namespace: String::new(),
            text: text.into(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

/// An open browsing tab and its back stack
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tab {
    pub back_stack: Vec<PageTitle>,
    pub back_stack_position: i32,
}

/// Analytics session counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionData {
    /// Epoch milliseconds
    pub start_time: i64,
    pub last_touch_time: i64,
    pub pages_from_search: u32,
    pub pages_from_random: u32,
    pub pages_from_links: u32,
    pub pages_from_history: u32,
    pub pages_from_reading_list: u32,
    pub pages_from_back: u32,
}

impl SessionData {
    /// Sum of the page counters, saturating at `u32::MAX`
    pub fn total_pages(&self) -> u32 {
        [
            self.pages_from_search,
            self.pages_from_random,
            self.pages_from_links,
            self.pages_from_history,
            self.pages_from_reading_list,
            self.pages_from_back,
        ]
        .into_iter()
        .fold(0u32, u32::saturating_add)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub rate: f64,
    pub unit: String,
}

/// Event stream configuration fetched from the intake service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub stream: String,
    pub schema_title: String,
    pub destination_event_service: String,
    pub sampling: Option<SamplingConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationResult {
    /// ISO-8601 timestamp
    pub date_time: String,
    pub from_web: bool,
}

/// A recommendation source title and how far into its results we have read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceWithOffset {
    pub title: String,
    #[serde(default)]
    pub offset: u32,
}

/// Last map viewport, stored as `latitude|longitude|zoom`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
}

impl MapPosition {
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split('|').map(|p| p.trim().parse::<f64>());
        let latitude = parts.next()?.ok()?;
        let longitude = parts.next()?.ok()?;
        let zoom = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
            zoom,
        })
    }
}

impl fmt::Display for MapPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.latitude, self.longitude, self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_position_round_trip() {
        let pos = MapPosition {
            latitude: 52.52,
            longitude: -13.4,
            zoom: 15.0,
        };
        assert_eq!(pos.to_string(), "52.52|-13.4|15");
        assert_eq!(MapPosition::parse(&pos.to_string()), Some(pos));
    }

    #[test]
    fn test_map_position_rejects_malformed() {
        assert_eq!(MapPosition::parse(""), None);
        assert_eq!(MapPosition::parse("1|2"), None);
        assert_eq!(MapPosition::parse("1|x|3"), None);
        assert_eq!(MapPosition::parse("1|2|3|4"), None);
    }

    #[test]
    fn test_records_decode_with_missing_fields() {
        let session: SessionData = serde_json::from_str(r#"{"pages_from_search": 2}"#).unwrap();
        assert_eq!(session.pages_from_search, 2);
        assert_eq!(session.total_pages(), 2);

        let title: PageTitle = serde_json::from_str(r#"{"text": "Rust"}"#).unwrap();
        assert_eq!(title, PageTitle::new("", "Rust"));
    }

    #[test]
    fn test_total_pages_saturates() {
        let session: SessionData =
            serde_json::from_str(r#"{"pages_from_search": 4294967295, "pages_from_random": 1}"#)
                .unwrap();
        assert_eq!(session.total_pages(), u32::MAX);
    }

    #[test]
    fn test_tab_with_negative_position_decodes() {
        let tabs: Vec<Tab> = serde_json::from_str(
            r#"[{"back_stack": [{"text": "Rust"}], "back_stack_position": -1},
                {"back_stack": [], "back_stack_position": 0}]"#,
        )
        .unwrap();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].back_stack_position, -1);
    }
}
