//! # provider-static
//!
//! A video source backed by an in-process list.
//!
//! The list is built once and handed to the source at construction time, so
//! the gallery can swap it for the remote source without touching global
//! state. [`bird_nest_videos`] is the built-in catalogue.

use async_trait::async_trait;
use std::sync::Arc;
use tori_live_core::prelude::*;
use tracing::debug;

/// A video source that serves a fixed list of records.
#[derive(Debug, Clone)]
pub struct StaticVideoSource {
    videos: Arc<[VideoRecord]>,
}

impl StaticVideoSource {
    /// Create a source serving `videos` in the given order.
    pub fn new(videos: Vec<VideoRecord>) -> Self {
        Self {
            videos: videos.into(),
        }
    }

    /// Create a source serving the built-in bird-nest catalogue.
    pub fn bird_nests() -> Self {
        Self::new(bird_nest_videos())
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Default for StaticVideoSource {
    fn default() -> Self {
        Self::bird_nests()
    }
}

#[async_trait]
impl VideoSource for StaticVideoSource {
    fn id(&self) -> &'static str {
        "static"
    }

    async fn videos(&self) -> Result<Vec<VideoRecord>> {
        debug!("Serving {} static video(s)", self.videos.len());
        Ok(self.videos.to_vec())
    }
}

/// The built-in bird-nest live streams.
pub fn bird_nest_videos() -> Vec<VideoRecord> {
    vec![VideoRecord {
        id: "B4-L2nfGcuE".to_string(),
        title: "Big Bear Bald Eagle Live Nest - Cam 1".to_string(),
        channel_name: "FOBBV CAM".to_string(),
        view_count: Some(15437),
        upload_date: Some("2021-09-16".to_string()),
        thumbnail_url: "https://img.youtube.com/vi/B4-L2nfGcuE/maxresdefault.jpg".to_string(),
        // Big Bear Lake, California; the stream went up during PDT
        timezone: Some("America/Los_Angeles".to_string()),
        timezone_offset: Some("-07:00".to_string()),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record(id: &str) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            title: format!("Nest {}", id),
            channel_name: "Test Channel".to_string(),
            view_count: None,
            upload_date: None,
            thumbnail_url: format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", id),
            timezone: None,
            timezone_offset: None,
        }
    }

    #[test]
    fn test_source_id() {
        assert_eq!(StaticVideoSource::bird_nests().id(), "static");
    }

    #[tokio::test]
    async fn test_bird_nests_catalogue() {
        let source = StaticVideoSource::default();
        let videos = source.videos().await.unwrap();

        assert_eq!(videos, bird_nest_videos());
        assert_eq!(videos.len(), 1);

        let eagle = &videos[0];
        assert_eq!(eagle.id, "B4-L2nfGcuE");
        assert_eq!(eagle.channel_name, "FOBBV CAM");
        assert_eq!(eagle.view_count, Some(15437));
        assert_eq!(
            eagle.filming_zone(),
            Some(("America/Los_Angeles", "-07:00"))
        );
    }

    #[test]
    fn test_catalogue_ids_are_unique() {
        let videos = bird_nest_videos();
        let mut ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), videos.len());
    }

    #[tokio::test]
    async fn test_preserves_order() {
        let source = StaticVideoSource::new(vec![test_record("b"), test_record("a"), test_record("c")]);
        let ids: Vec<String> = source
            .videos()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_empty_source() {
        let source = StaticVideoSource::new(vec![]);
        assert!(source.is_empty());
        assert!(source.videos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_calls_return_same_records() {
        let source = StaticVideoSource::bird_nests();
        let first = source.videos().await.unwrap();
        let second = source.videos().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(source.len(), 1);
    }
}
