use serde_json::json;

use crate::catalog::{fetch_popular_videos, fetch_video_by_id};
use crate::error::Result;
use crate::source::DataSource;

use super::{print_json, print_video_list};

/// Length of the suggested-videos rail.
const SUGGESTED_VIDEOS: usize = 8;

pub async fn run(source: &DataSource, video_id: &str, json: bool) -> Result<()> {
    let (video, mut suggested) = tokio::join!(
        fetch_video_by_id(source, video_id),
        fetch_popular_videos(source)
    );
    suggested.truncate(SUGGESTED_VIDEOS);

    let Some(video) = video else {
        if json {
            return print_json(&json!({ "video": null, "suggested": suggested }));
        }
        println!("Video not found: {}", video_id);
        return Ok(());
    };

    if json {
        return print_json(&json!({ "video": video, "suggested": suggested }));
    }

    println!("{}", video.title);
    println!("{}", "=".repeat(video.title.chars().count()));
    println!("Channel:   {} ({})", video.channel_title, video.channel_id);
    println!("Views:     {}", video.views);
    println!("Published: {}", video.published_at);
    println!("Duration:  {}", video.duration);
    println!("URL:       https://www.youtube.com/watch?v={}", video.id);
    if let Some(description) = video.description.as_deref().filter(|d| !d.is_empty()) {
        println!("\n{}", description);
    }

    if !suggested.is_empty() {
        println!("\nSuggested\n---------\n");
        print_video_list(&suggested);
    }

    Ok(())
}
