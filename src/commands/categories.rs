use crate::catalog::fetch_categories;
use crate::error::Result;
use crate::source::DataSource;

use super::print_json;

pub async fn run(source: &DataSource, json: bool) -> Result<()> {
    let categories = fetch_categories(source).await;

    if json {
        return print_json(&categories);
    }

    for category in categories {
        println!("{:>3}  {}", category.id, category.name);
    }

    Ok(())
}
