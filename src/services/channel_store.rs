use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::{sample::sample_channels, Channel};

/// Shared in-memory channel list.
///
/// Cloning the store clones the handle; all clones see the same channels.
/// Uploads swap the whole list under one write lock, so readers never see a
/// partially replaced playlist.
#[derive(Clone, Default)]
pub struct ChannelStore {
    channels: Arc<RwLock<Vec<Channel>>>,
}

impl ChannelStore {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self {
            channels: Arc::new(RwLock::new(channels)),
        }
    }

    pub fn with_sample_channels() -> Self {
        Self::new(sample_channels())
    }

    pub async fn list(&self) -> Vec<Channel> {
        self.channels.read().await.clone()
    }

    /// First channel whose name matches case-insensitively
    pub async fn find_by_name(&self, name: &str) -> Option<Channel> {
        let wanted = name.to_lowercase();
        let channels = self.channels.read().await;
        channels
            .iter()
            .find(|c| c.name.to_lowercase() == wanted)
            .cloned()
    }

    /// Distinct categories, sorted
    pub async fn categories(&self) -> Vec<String> {
        let channels = self.channels.read().await;
        channels
            .iter()
            .map(|c| c.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub async fn replace_all(&self, channels: Vec<Channel>) {
        let count = channels.len();
        {
            let mut current = self.channels.write().await;
            *current = channels;
        }
        info!("Channel store replaced with {} channels", count);
    }

    pub async fn len(&self) -> usize {
        self.channels.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.channels.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_m3u;

    #[tokio::test]
    async fn test_sample_store() {
        let store = ChannelStore::with_sample_channels();
        assert_eq!(store.len().await, 4);
        assert!(!store.is_empty().await);
    }

    #[tokio::test]
    async fn test_find_by_name_is_case_insensitive() {
        let store = ChannelStore::with_sample_channels();

        let channel = store.find_by_name("nasa live").await.unwrap();
        assert_eq!(channel.epg_id, "nasa.gov");
        assert!(store.find_by_name("NASA").await.is_none());
    }

    #[tokio::test]
    async fn test_categories_are_distinct_and_sorted() {
        let store = ChannelStore::with_sample_channels();
        assert_eq!(store.categories().await, vec!["News", "Science", "Test"]);
    }

    #[tokio::test]
    async fn test_replace_all_is_visible_through_clones() {
        let store = ChannelStore::with_sample_channels();
        let handle = store.clone();

        handle
            .replace_all(parse_m3u("#EXTINF:-1,Only\nhttp://a/only\n"))
            .await;

        let channels = store.list().await;
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, "Only");
        assert_eq!(store.categories().await, vec!["Uncategorized"]);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = ChannelStore::default();
        assert!(store.is_empty().await);
        assert!(store.categories().await.is_empty());
    }
}
