use crate::catalog::search_videos;
use crate::error::Result;
use crate::source::DataSource;

use super::{print_json, print_video_list};

pub async fn run(source: &DataSource, query: &str, json: bool) -> Result<()> {
    let results = search_videos(source, query).await;

    if json {
        return print_json(&results);
    }

    if results.is_empty() {
        println!("No results found for: {}", query);
        return Ok(());
    }

    println!("Found {} result(s) for '{}':\n", results.len(), query);
    print_video_list(&results);

    Ok(())
}
