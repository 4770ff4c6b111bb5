// src/pipeline.rs

use anyhow::{Context, Result};
use tracing::{error, info, instrument};

use crate::athletes::{load_athletes, write_athletes, RESOLVE_COLUMNS, RESULTS_COLUMNS};
use crate::bundle::{to_pretty_json, write_bundles};
use crate::config::Config;
use crate::fetch::{fetch_results, resolve_ids, ApiClient, FetchSummary, FixedDelay, ResolveSummary};

/// How a pipeline run ended. Load and save failures are logged, not returned
/// as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<S> {
    /// The input file could not be read; nothing was requested.
    NotLoaded,
    Saved(S),
    /// Every request ran but the output could not be written.
    NotSaved(S),
}

/// Pipeline 1: names in, names plus skater ids out.
#[instrument(level = "info", skip_all)]
pub async fn get_ids(config: &Config) -> Result<Outcome<ResolveSummary>> {
    let mut table = match load_athletes(&config.athletes_input, RESOLVE_COLUMNS) {
        Ok(t) => t,
        Err(e) => {
            error!("Error loading CSV: {}", e);
            return Ok(Outcome::NotLoaded);
        }
    };
    info!("Original table:\n{}", table);

    let api = ApiClient::new(config.api_base.clone(), config.http_timeout)?;
    let summary = resolve_ids(&api, &mut table).await;
    info!(
        rows = summary.rows,
        resolved = summary.resolved,
        unmatched = summary.unmatched,
        failed = summary.failed,
        "id lookup finished"
    );
    info!("Updated table with IDs:\n{}", table);

    let out = &config.athletes_with_ids;
    match write_athletes(&table, out) {
        Ok(()) => {
            info!("saved {} rows to {}", table.len(), out.display());
            Ok(Outcome::Saved(summary))
        }
        Err(e) => {
            error!("Error saving CSV: {}", e);
            Ok(Outcome::NotSaved(summary))
        }
    }
}

/// Pipeline 2: names with ids in, per-distance results JSON out.
#[instrument(level = "info", skip_all)]
pub async fn pull_results(config: &Config) -> Result<Outcome<FetchSummary>> {
    let table = match load_athletes(&config.athletes_with_ids, RESULTS_COLUMNS) {
        Ok(t) => t,
        Err(e) => {
            error!("Error loading CSV: {}", e);
            return Ok(Outcome::NotLoaded);
        }
    };

    let api = ApiClient::new(config.api_base.clone(), config.http_timeout)?;
    let mut throttle = FixedDelay::new(config.results_interval);
    let (bundles, summary) = fetch_results(&api, &table, &mut throttle).await;
    info!(
        athletes = summary.athletes,
        requests = summary.requests,
        fetched = summary.fetched,
        empty = summary.empty,
        failed = summary.failed,
        skipped = summary.skipped,
        "results fetch finished"
    );

    let out = &config.results_output;
    if let Err(e) = write_bundles(&bundles, out) {
        error!("Error saving JSON: {}", e);
        return Ok(Outcome::NotSaved(summary));
    }
    info!("saved {} athletes to {}", bundles.len(), out.display());

    if config.echo_results {
        println!("{}", to_pretty_json(&bundles).context("rendering results")?);
    }
    Ok(Outcome::Saved(summary))
}
