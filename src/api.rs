//! Minimal YouTube Data API v3 client covering the four read-only calls the
//! browser needs, plus the mapping from API resources into [`crate::models`].

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::format::{Count, format_duration, format_subscribers, format_time_ago, format_views};
use crate::models::{Channel, Video};

pub const YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Page size of the most-popular chart.
pub const POPULAR_MAX_RESULTS: u32 = 24;
/// Page size of a search.
pub const SEARCH_MAX_RESULTS: u32 = 20;
/// Region the most-popular chart is requested for.
pub const POPULAR_REGION_CODE: &str = "US";

const VIDEO_PARTS: &str = "snippet,contentDetails,statistics";
const CHANNEL_PARTS: &str = "snippet,statistics,brandingSettings";

/// Placeholder for fields the search endpoint does not return.
pub const SEARCH_VIEWS_PLACEHOLDER: &str = "N/A";
pub const SEARCH_DURATION_PLACEHOLDER: &str = "0:00";

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ApiThumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ApiThumbnails {
    medium: ApiThumbnail,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiVideoSnippet {
    title: String,
    description: Option<String>,
    thumbnails: ApiThumbnails,
    channel_id: String,
    channel_title: String,
    /// RFC 3339; formatted leniently so one bad value only degrades its item.
    published_at: String,
}

#[derive(Debug, Deserialize)]
struct ApiContentDetails {
    duration: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiVideoStatistics {
    /// Absent when the owner hides the count.
    view_count: Option<String>,
}

/// A `video` resource from `videos.list`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiVideo {
    id: String,
    snippet: ApiVideoSnippet,
    content_details: ApiContentDetails,
    statistics: ApiVideoStatistics,
}

impl ApiVideo {
    fn into_video(self) -> Video {
        Video {
            id: self.id,
            title: self.snippet.title,
            thumbnail: self.snippet.thumbnails.medium.url,
            channel_title: self.snippet.channel_title,
            // videos.list does not carry the channel avatar
            channel_avatar: String::new(),
            channel_id: self.snippet.channel_id,
            views: format_views(self.statistics.view_count.as_deref().unwrap_or_default()),
            published_at: format_time_ago(&self.snippet.published_at),
            duration: format_duration(&self.content_details.duration),
            description: self.snippet.description,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSearchId {
    video_id: String,
}

/// A `searchResult` resource from `search.list` with `type=video`.
#[derive(Debug, Deserialize)]
struct ApiSearchResult {
    id: ApiSearchId,
    snippet: ApiVideoSnippet,
}

impl ApiSearchResult {
    fn into_video(self) -> Video {
        Video {
            id: self.id.video_id,
            title: self.snippet.title,
            thumbnail: self.snippet.thumbnails.medium.url,
            channel_title: self.snippet.channel_title,
            channel_avatar: String::new(),
            channel_id: self.snippet.channel_id,
            views: SEARCH_VIEWS_PLACEHOLDER.to_string(),
            published_at: format_time_ago(&self.snippet.published_at),
            duration: SEARCH_DURATION_PLACEHOLDER.to_string(),
            description: self.snippet.description,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiChannelSnippet {
    title: String,
    description: Option<String>,
    thumbnails: ApiThumbnails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiChannelStatistics {
    subscriber_count: Option<String>,
    video_count: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiBrandingImage {
    banner_external_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiBrandingSettings {
    image: Option<ApiBrandingImage>,
}

/// A `channel` resource from `channels.list`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiChannel {
    id: String,
    snippet: ApiChannelSnippet,
    statistics: ApiChannelStatistics,
    branding_settings: Option<ApiBrandingSettings>,
}

impl ApiChannel {
    fn into_channel(self) -> Channel {
        let video_count = Count::from(self.statistics.video_count.as_deref().unwrap_or_default());
        let banner = self
            .branding_settings
            .and_then(|branding| branding.image)
            .and_then(|image| image.banner_external_url)
            .unwrap_or_default();

        Channel {
            id: self.id,
            title: self.snippet.title,
            avatar: self.snippet.thumbnails.medium.url,
            subscribers: format_subscribers(
                self.statistics.subscriber_count.as_deref().unwrap_or_default(),
            ),
            video_count: video_count.0.to_string(),
            description: self.snippet.description.unwrap_or_default(),
            banner,
        }
    }
}

/// YouTube Data API client authenticated with an API key.
#[derive(Debug, Clone)]
pub struct YouTubeApi {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeApi {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, YOUTUBE_API_BASE_URL)
    }

    /// Create a client that talks to `base_url` instead of the public API.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// GET `{base_url}/{resource}` and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, resource: &str, params: &[(&str, &str)]) -> Result<T> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, resource))
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }

        Ok(response.json().await?)
    }

    /// The most-popular chart for [`POPULAR_REGION_CODE`], one page of
    /// [`POPULAR_MAX_RESULTS`].
    #[instrument(skip(self))]
    pub async fn most_popular_videos(&self) -> Result<Vec<Video>> {
        let max_results = POPULAR_MAX_RESULTS.to_string();
        let response: ListResponse<ApiVideo> = self
            .get(
                "videos",
                &[
                    ("part", VIDEO_PARTS),
                    ("chart", "mostPopular"),
                    ("regionCode", POPULAR_REGION_CODE),
                    ("maxResults", max_results.as_str()),
                ],
            )
            .await?;

        let videos: Vec<Video> = response.items.into_iter().map(ApiVideo::into_video).collect();
        tracing::debug!(count = videos.len(), "fetched popular videos");
        Ok(videos)
    }

    /// Search videos matching `query`.
    ///
    /// The search endpoint carries no statistics or content details, so view
    /// count and duration are placeholders.
    #[instrument(skip(self))]
    pub async fn search_videos(&self, query: &str) -> Result<Vec<Video>> {
        let max_results = SEARCH_MAX_RESULTS.to_string();
        let response: ListResponse<ApiSearchResult> = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("q", query),
                    ("type", "video"),
                    ("maxResults", max_results.as_str()),
                ],
            )
            .await?;

        let videos: Vec<Video> = response
            .items
            .into_iter()
            .map(ApiSearchResult::into_video)
            .collect();
        tracing::debug!(count = videos.len(), "fetched search results");
        Ok(videos)
    }

    /// Fetch a single video. `Ok(None)` when the API knows no such id.
    #[instrument(skip(self))]
    pub async fn video(&self, video_id: &str) -> Result<Option<Video>> {
        let response: ListResponse<ApiVideo> = self
            .get("videos", &[("part", VIDEO_PARTS), ("id", video_id)])
            .await?;

        Ok(response.items.into_iter().next().map(ApiVideo::into_video))
    }

    /// Fetch a single channel. `Ok(None)` when the API knows no such id.
    #[instrument(skip(self))]
    pub async fn channel(&self, channel_id: &str) -> Result<Option<Channel>> {
        let response: ListResponse<ApiChannel> = self
            .get("channels", &[("part", CHANNEL_PARTS), ("id", channel_id)])
            .await?;

        Ok(response.items.into_iter().next().map(ApiChannel::into_channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_resource_maps_and_formats() {
        let item: ApiVideo = serde_json::from_str(
            r#"{
                "id": "abc",
                "snippet": {
                    "title": "A video",
                    "description": "About it",
                    "thumbnails": {"default": {"url": "d"}, "medium": {"url": "m"}},
                    "channelId": "UC1",
                    "channelTitle": "Chan",
                    "publishedAt": "2001-01-01T00:00:00Z"
                },
                "contentDetails": {"duration": "PT1H2M3S"},
                "statistics": {"viewCount": "1500", "likeCount": "3"}
            }"#,
        )
        .unwrap();

        let video = item.into_video();
        assert_eq!(video.id, "abc");
        assert_eq!(video.thumbnail, "m");
        assert_eq!(video.channel_avatar, "");
        assert_eq!(video.views, "1.5K views");
        assert_eq!(video.duration, "1:02:03");
        assert!(video.published_at.ends_with("years ago"));
        assert_eq!(video.description.as_deref(), Some("About it"));
    }

    #[test]
    fn hidden_view_count_reads_as_zero() {
        let item: ApiVideo = serde_json::from_str(
            r#"{
                "id": "abc",
                "snippet": {
                    "title": "t",
                    "thumbnails": {"medium": {"url": "m"}},
                    "channelId": "UC1",
                    "channelTitle": "c",
                    "publishedAt": "2001-01-01T00:00:00Z"
                },
                "contentDetails": {"duration": "PT3S"},
                "statistics": {}
            }"#,
        )
        .unwrap();

        let video = item.into_video();
        assert_eq!(video.views, "0 views");
        assert_eq!(video.description, None);
    }

    #[test]
    fn channel_video_count_is_normalised_and_banner_defaults_empty() {
        let item: ApiChannel = serde_json::from_str(
            r#"{
                "id": "UC1",
                "snippet": {"title": "Chan", "thumbnails": {"medium": {"url": "avatar"}}},
                "statistics": {"subscriberCount": "2500000", "videoCount": "0042"}
            }"#,
        )
        .unwrap();

        let channel = item.into_channel();
        assert_eq!(channel.subscribers, "2.5M subscribers");
        assert_eq!(channel.video_count, "42");
        assert_eq!(channel.banner, "");
        assert_eq!(channel.description, "");
    }

    #[test]
    fn bad_published_at_only_degrades_its_item() {
        let response: ListResponse<ApiVideo> = serde_json::from_str(
            r#"{"items": [
                {
                    "id": "good",
                    "snippet": {
                        "title": "t",
                        "thumbnails": {"medium": {"url": "m"}},
                        "channelId": "UC1",
                        "channelTitle": "c",
                        "publishedAt": "2001-01-01T00:00:00Z"
                    },
                    "contentDetails": {"duration": "PT3S"},
                    "statistics": {"viewCount": "5"}
                },
                {
                    "id": "bad",
                    "snippet": {
                        "title": "t",
                        "thumbnails": {"medium": {"url": "m"}},
                        "channelId": "UC1",
                        "channelTitle": "c",
                        "publishedAt": "not-a-date"
                    },
                    "contentDetails": {"duration": "PT4S"},
                    "statistics": {"viewCount": "6"}
                }
            ]}"#,
        )
        .unwrap();

        let videos: Vec<Video> = response.items.into_iter().map(ApiVideo::into_video).collect();
        assert_eq!(videos.len(), 2);
        assert!(videos[0].published_at.ends_with("years ago"));
        assert_eq!(videos[1].id, "bad");
        assert_eq!(videos[1].published_at, "just now");
        assert_eq!(videos[1].duration, "0:04");
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let api = YouTubeApi::with_base_url("key", "http://localhost:1234/v3/").unwrap();
        assert_eq!(api.base_url, "http://localhost:1234/v3");
    }
}
