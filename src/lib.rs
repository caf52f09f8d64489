pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod sample_data;
pub mod source;

pub use catalog::{
    fetch_categories, fetch_channel_by_id, fetch_popular_videos, fetch_video_by_id, search_videos,
};
pub use models::{Category, Channel, Video};
pub use source::DataSource;
