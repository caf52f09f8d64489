pub mod categories;
pub mod channel;
pub mod home;
pub mod init;
pub mod search;
pub mod watch;

use serde::Serialize;

use crate::error::Result;
use crate::models::Video;

/// Print any serializable value as pretty JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_video_entry(index: usize, video: &Video) {
    println!("{}. {}", index, video.title);

    let meta_parts: Vec<&str> = [
        video.channel_title.as_str(),
        video.views.as_str(),
        video.published_at.as_str(),
        video.duration.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();
    if !meta_parts.is_empty() {
        println!("   {}", meta_parts.join(" · "));
    }

    println!("   id: {}", video.id);
    println!();
}

fn print_video_list(videos: &[Video]) {
    for (i, video) in videos.iter().enumerate() {
        print_video_entry(i + 1, video);
    }
}
