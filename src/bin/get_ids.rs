// Resolve skater ids for data/athletes_list.csv -> data/athletes_list_with_ids.csv

use anyhow::Result;
use skaterscrape::{config::Config, logging, pipeline};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    info!("startup");

    let config = Config::default();
    pipeline::get_ids(&config).await?;

    info!("all done");
    Ok(())
}
