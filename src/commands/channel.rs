use serde_json::json;

use crate::catalog::{fetch_channel_by_id, fetch_popular_videos};
use crate::error::Result;
use crate::source::DataSource;

use super::{print_json, print_video_list};

/// Number of videos shown under a channel header.
const CHANNEL_VIDEOS: usize = 12;

pub async fn run(source: &DataSource, channel_id: &str, json: bool) -> Result<()> {
    // There is no per-channel listing call; the page shows the popular feed.
    let (channel, mut videos) = tokio::join!(
        fetch_channel_by_id(source, channel_id),
        fetch_popular_videos(source)
    );
    videos.truncate(CHANNEL_VIDEOS);

    let Some(channel) = channel else {
        if json {
            return print_json(&json!({ "channel": null, "videos": [] }));
        }
        println!("Channel not found: {}", channel_id);
        return Ok(());
    };

    if json {
        return print_json(&json!({ "channel": channel, "videos": videos }));
    }

    println!("{}", channel.title);
    println!("{}", "=".repeat(channel.title.chars().count()));
    println!("{} · {} videos", channel.subscribers, channel.video_count);
    if !channel.banner.is_empty() {
        println!("Banner: {}", channel.banner);
    }
    if !channel.description.is_empty() {
        println!("\n{}", channel.description);
    }

    if videos.is_empty() {
        println!("\nNo videos found for channel: {}", channel_id);
        return Ok(());
    }

    println!("\nVideos\n------\n");
    print_video_list(&videos);

    Ok(())
}
