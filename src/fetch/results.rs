// src/fetch/results.rs

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use super::{ApiClient, Throttle};
use crate::athletes::AthleteTable;
use crate::bundle::{is_empty_payload, AthleteResultBundle, Distance};
use crate::error::FetchError;

/// Per-run tally of [`fetch_results`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FetchSummary {
    pub athletes: usize,
    pub requests: usize,
    pub fetched: usize,
    pub empty: usize,
    pub failed: usize,
    /// Rows with no skater id, never queried.
    pub skipped: usize,
}

/// GET one (skater, distance) result set. Any 2xx body is decoded as JSON
/// and returned as-is.
pub async fn fetch_distance(
    api: &ApiClient,
    skater: u64,
    distance: Distance,
) -> Result<Value, FetchError> {
    let url = api.results_url(skater, distance);
    debug!(%url, "results");

    let transport = |source| FetchError::Transport {
        skater,
        distance,
        source,
    };
    let resp = api.http().get(url).send().await.map_err(transport)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            skater,
            distance,
            status,
        });
    }
    let body = resp.bytes().await.map_err(transport)?;
    serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
        skater,
        distance,
        source,
    })
}

/// Build one bundle per record, in table order, querying every
/// [`Distance`] for each skater one request at a time. Failed calls are
/// logged and left out; empty payloads are left out quietly.
#[instrument(level = "info", skip_all, fields(rows = table.len()))]
pub async fn fetch_results<T: Throttle>(
    api: &ApiClient,
    table: &AthleteTable,
    throttle: &mut T,
) -> (Vec<AthleteResultBundle>, FetchSummary) {
    let mut summary = FetchSummary {
        athletes: table.len(),
        ..FetchSummary::default()
    };
    let mut bundles = Vec::with_capacity(table.len());

    for record in table.records() {
        let mut bundle = AthleteResultBundle {
            skater_id: record.id,
            family_name: record.family_name.clone(),
            given_name: record.given_name.clone(),
            sport: record.sport.clone().unwrap_or_default(),
            distances: BTreeMap::new(),
        };

        let Some(skater) = record.id else {
            warn!(row = record.row, "no skater id for {}; skipping results", record.display_name());
            summary.skipped += 1;
            bundles.push(bundle);
            continue;
        };

        for distance in Distance::ALL {
            throttle.wait().await;
            info!("Fetching data for skater {} (distance {})", skater, distance);
            summary.requests += 1;

            match fetch_distance(api, skater, distance).await {
                Ok(payload) if is_empty_payload(&payload) => {
                    debug!(skater, %distance, "empty payload");
                    summary.empty += 1;
                }
                Ok(payload) => {
                    bundle.distances.insert(distance, payload);
                    summary.fetched += 1;
                }
                Err(e) => {
                    error!("{}", e);
                    summary.failed += 1;
                }
            }
        }

        bundles.push(bundle);
    }

    (bundles, summary)
}
