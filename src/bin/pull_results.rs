// Fetch per-distance results for data/athletes_list_with_ids.csv -> athlete_results.json

use anyhow::Result;
use skaterscrape::{config::Config, logging, pipeline};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    info!("startup");

    let config = Config::default();
    pipeline::pull_results(&config).await?;

    info!("all done");
    Ok(())
}
