use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod sample;

/// Display name used when a directive line carries no name
pub const UNKNOWN_CHANNEL_NAME: &str = "Unknown Channel";

/// Category used when a directive line carries no `group-title`
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A playable station, as parsed from a playlist or served by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub logo: String,
    pub category: String,
    pub epg_id: String,
    pub stream_url: String,
}

impl Channel {
    /// Create a channel with no stream URL yet, defaulting the optional
    /// metadata the same way the playlist parser does.
    pub fn pending(
        name: impl Into<String>,
        logo: Option<String>,
        category: Option<String>,
        epg_id: Option<String>,
    ) -> Self {
        let name = name.into();
        let epg_id = epg_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| normalize_epg_id(&name));

        Self {
            logo: logo.unwrap_or_default(),
            category: category
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            epg_id,
            name,
            stream_url: String::new(),
        }
    }

    /// Identifier used to key guide data, falling back to the normalized name
    pub fn guide_id(&self) -> String {
        if self.epg_id.is_empty() {
            normalize_epg_id(&self.name)
        } else {
            self.epg_id.clone()
        }
    }
}

/// Derive an EPG identifier from a display name: lowercased, spaces to underscores.
pub fn normalize_epg_id(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// A single scheduled programme in the guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpgProgram {
    pub title: String,
    /// `YYYYMMDDHHMMSS`, local time
    pub start: String,
    /// `YYYYMMDDHHMMSS`, local time
    pub end: String,
    pub description: String,
}

/// Guide data keyed by channel EPG id
pub type EpgData = BTreeMap<String, Vec<EpgProgram>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_epg_id() {
        assert_eq!(normalize_epg_id("BBC News"), "bbc_news");
        assert_eq!(normalize_epg_id("Unknown Channel"), "unknown_channel");
        assert_eq!(normalize_epg_id("a  b"), "a__b");
    }

    #[test]
    fn test_pending_channel_defaults() {
        let channel = Channel::pending("Test Stream", None, None, None);
        assert_eq!(channel.logo, "");
        assert_eq!(channel.category, UNCATEGORIZED);
        assert_eq!(channel.epg_id, "test_stream");
        assert!(channel.stream_url.is_empty());
    }

    #[test]
    fn test_pending_channel_empty_attributes_fall_back() {
        let channel = Channel::pending(
            "Nasa Live",
            Some(String::new()),
            Some(String::new()),
            Some(String::new()),
        );
        assert_eq!(channel.category, UNCATEGORIZED);
        assert_eq!(channel.epg_id, "nasa_live");
    }

    #[test]
    fn test_channel_serializes_with_api_field_names() {
        let mut channel = Channel::pending("BBC News", None, Some("News".into()), None);
        channel.stream_url = "http://example.com/s.m3u8".to_string();

        let value = serde_json::to_value(&channel).unwrap();
        assert_eq!(value["name"], "BBC News");
        assert_eq!(value["category"], "News");
        assert_eq!(value["epg_id"], "bbc_news");
        assert_eq!(value["stream_url"], "http://example.com/s.m3u8");
        assert_eq!(value["logo"], "");
    }
}
