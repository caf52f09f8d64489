use std::io::{self, Write};

use crate::config::{data_dir, save_api_key};
use crate::error::Result;

pub fn run(api_key: Option<String>, force: bool) -> Result<()> {
    let api_key = if let Some(key) = api_key {
        key
    } else {
        print!("Enter your YouTube Data API key: ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        input.trim().to_string()
    };

    let env_file = save_api_key(&api_key, force)?;

    println!("Config saved to {}", env_file.display());
    println!("Data directory: {}", data_dir().display());

    Ok(())
}
