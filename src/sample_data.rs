//! Embedded sample catalog, served when no API key is configured and when the
//! popular listing cannot be fetched.

use std::sync::LazyLock;

use serde::Deserialize;

use crate::models::{Category, Channel, Video};

#[derive(Debug, Deserialize)]
struct SampleCatalog {
    videos: Vec<Video>,
    channels: Vec<Channel>,
    categories: Vec<Category>,
}

static CATALOG: LazyLock<SampleCatalog> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/sample.json"))
        .expect("embedded sample catalog is valid JSON")
});

/// All sample videos, in catalog order.
pub fn videos() -> Vec<Video> {
    CATALOG.videos.clone()
}

pub fn channels() -> Vec<Channel> {
    CATALOG.channels.clone()
}

pub fn categories() -> Vec<Category> {
    CATALOG.categories.clone()
}

/// Sample videos whose title contains `query`, ignoring case.
pub fn search_videos(query: &str) -> Vec<Video> {
    let needle = query.to_lowercase();
    CATALOG
        .videos
        .iter()
        .filter(|video| video.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn video_by_id(id: &str) -> Option<Video> {
    CATALOG.videos.iter().find(|video| video.id == id).cloned()
}

pub fn channel_by_id(id: &str) -> Option<Channel> {
    CATALOG
        .channels
        .iter()
        .find(|channel| channel.id == id)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_non_empty() {
        let video_ids: HashSet<_> = videos().into_iter().map(|v| v.id).collect();
        assert_eq!(video_ids.len(), videos().len());
        assert!(video_ids.iter().all(|id| !id.is_empty()));

        let channel_ids: HashSet<_> = channels().into_iter().map(|c| c.id).collect();
        assert_eq!(channel_ids.len(), channels().len());

        let category_ids: HashSet<_> = categories().into_iter().map(|c| c.id).collect();
        assert_eq!(category_ids.len(), categories().len());
    }

    #[test]
    fn every_video_belongs_to_a_sample_channel() {
        for video in videos() {
            let channel = channel_by_id(&video.channel_id)
                .unwrap_or_else(|| panic!("{} has unknown channel {}", video.id, video.channel_id));
            assert_eq!(video.channel_title, channel.title);
        }
    }

    #[test]
    fn video_counts_are_plain_digits() {
        for channel in channels() {
            assert!(!channel.video_count.is_empty());
            assert!(channel.video_count.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn catalog_fits_in_one_popular_page() {
        assert!(videos().len() <= 24);
        assert!(!categories().is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let ids: Vec<_> = search_videos("RUST").into_iter().map(|v| v.id).collect();
        assert_eq!(ids, ["sample-v02", "sample-v11"]);
        assert!(search_videos("no such video anywhere").is_empty());
        assert_eq!(search_videos("").len(), videos().len());
    }

    #[test]
    fn lookups_by_id() {
        assert_eq!(video_by_id("sample-v03").unwrap().title, "15-Minute Garlic Noodles");
        assert!(video_by_id("missing").is_none());
        assert_eq!(channel_by_id("UCsample-games").unwrap().banner, "");
        assert!(channel_by_id("missing").is_none());
    }
}
