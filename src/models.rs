use serde::{Deserialize, Serialize};

/// A video as handed to presentation code.
///
/// `views`, `published_at` and `duration` are already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub channel_title: String,
    /// Empty when the source does not carry it (the popular and search listings).
    pub channel_avatar: String,
    pub channel_id: String,
    pub views: String,
    pub published_at: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A channel as handed to presentation code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    pub title: String,
    pub avatar: String,
    pub subscribers: String,
    /// Plain decimal digits, e.g. `"1234"`.
    pub video_count: String,
    pub description: String,
    /// Empty when the channel has no banner.
    #[serde(default)]
    pub banner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}
