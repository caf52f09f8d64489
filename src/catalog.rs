//! Retrieval functions used by the pages.
//!
//! Each function consults the [`DataSource`] it is given. Failures on the live
//! path are logged and recovered here, never returned, and the recovery differs
//! per function:
//!
//! - [`fetch_popular_videos`] falls back to the sample catalog,
//! - [`search_videos`] returns no results,
//! - [`fetch_video_by_id`] and [`fetch_channel_by_id`] return `None`.
//!
//! Callers therefore cannot tell sample data from live data, and must not
//! assume a result is non-empty.

use crate::models::{Category, Channel, Video};
use crate::sample_data;
use crate::source::DataSource;

/// The home feed: the most-popular chart, or the sample catalog.
pub async fn fetch_popular_videos(source: &DataSource) -> Vec<Video> {
    let DataSource::Live(api) = source else {
        return sample_data::videos();
    };

    match api.most_popular_videos().await {
        Ok(videos) => videos,
        Err(e) => {
            tracing::warn!("failed to fetch popular videos, using sample data: {}", e);
            sample_data::videos()
        }
    }
}

/// Videos matching `query`. Sample search matches titles case-insensitively.
pub async fn search_videos(source: &DataSource, query: &str) -> Vec<Video> {
    let DataSource::Live(api) = source else {
        return sample_data::search_videos(query);
    };

    match api.search_videos(query).await {
        Ok(videos) => videos,
        Err(e) => {
            tracing::warn!(query, "failed to search videos: {}", e);
            Vec::new()
        }
    }
}

pub async fn fetch_video_by_id(source: &DataSource, video_id: &str) -> Option<Video> {
    let DataSource::Live(api) = source else {
        return sample_data::video_by_id(video_id);
    };

    match api.video(video_id).await {
        Ok(video) => video,
        Err(e) => {
            tracing::warn!(video_id, "failed to fetch video: {}", e);
            None
        }
    }
}

pub async fn fetch_channel_by_id(source: &DataSource, channel_id: &str) -> Option<Channel> {
    let DataSource::Live(api) = source else {
        return sample_data::channel_by_id(channel_id);
    };

    match api.channel(channel_id).await {
        Ok(channel) => channel,
        Err(e) => {
            tracing::warn!(channel_id, "failed to fetch channel: {}", e);
            None
        }
    }
}

/// Browsing categories. There is no category discovery, so this is the fixed
/// sample list for every source.
pub async fn fetch_categories(_source: &DataSource) -> Vec<Category> {
    sample_data::categories()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn sample_source_serves_catalog() {
        let source = DataSource::Sample;
        assert_eq!(fetch_popular_videos(&source).await, sample_data::videos());
        assert_eq!(fetch_categories(&source).await, sample_data::categories());
    }

    #[tokio::test]
    async fn sample_search_matches_titles() {
        let source = DataSource::Sample;
        let results = search_videos(&source, "noodles").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "sample-v03");
        assert!(search_videos(&source, "zzz-unmatched").await.is_empty());
    }

    #[tokio::test]
    async fn sample_lookups_return_none_when_absent() {
        let source = DataSource::Sample;
        assert!(fetch_video_by_id(&source, "nope").await.is_none());
        assert!(fetch_channel_by_id(&source, "nope").await.is_none());
        assert_eq!(
            fetch_channel_by_id(&source, "UCsample-tech").await.unwrap().title,
            "Tech Explained"
        );
    }

    #[tokio::test]
    async fn repeated_calls_are_equal() {
        let source = DataSource::Sample;
        assert_eq!(
            fetch_popular_videos(&source).await,
            fetch_popular_videos(&source).await
        );
        assert_eq!(
            search_videos(&source, "rust").await,
            search_videos(&source, "rust").await
        );
        assert_eq!(
            fetch_video_by_id(&source, "sample-v07").await,
            fetch_video_by_id(&source, "sample-v07").await
        );
    }
}
