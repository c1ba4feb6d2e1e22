//! Search command handler
//!
//! Runs one nearby query and prints the rendered response.

use crate::answer::answer_nearby_query;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::places::PlacesClient;
use crate::render::MapSettings;
use clap::Args;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// What to look for, e.g. "coffee shop"
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    super::init_logging();

    let query = args.query.join(" ");
    if query.trim().is_empty() {
        return Err(Error::Config("Query must not be empty".to_string()));
    }

    let config = Config::load()?;
    config.validate()?;

    let client = PlacesClient::new(&config)?;
    let map = MapSettings::from_config(&config);

    let output = answer_nearby_query(&client, &map, &query).await;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
