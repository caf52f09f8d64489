use serde_json::json;

use crate::catalog::{fetch_categories, fetch_popular_videos};
use crate::error::Result;
use crate::source::DataSource;

use super::{print_json, print_video_list};

pub async fn run(source: &DataSource, json: bool) -> Result<()> {
    let (videos, categories) = tokio::join!(fetch_popular_videos(source), fetch_categories(source));

    if json {
        return print_json(&json!({ "categories": categories, "videos": videos }));
    }

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    println!("[{}]\n", names.join("] ["));

    if videos.is_empty() {
        println!("No videos available.");
        return Ok(());
    }

    print_video_list(&videos);

    println!("To watch a video, run:");
    println!("  yt-browse watch <id>");

    Ok(())
}
