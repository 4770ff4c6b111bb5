// src/fetch/lookup.rs

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use super::ApiClient;
use crate::athletes::{AthleteRecord, AthleteTable};
use crate::error::LookupError;

#[derive(Debug, Deserialize)]
struct LookupResponse {
    /// Only the first entry is ever decoded further.
    skaters: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct SkaterMatch {
    id: u64,
}

/// Per-run tally of [`resolve_ids`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResolveSummary {
    pub rows: usize,
    pub resolved: usize,
    pub unmatched: usize,
    pub failed: usize,
}

/// Ask the lookup endpoint for `record`'s skater id. When several skaters
/// share the name the first one listed is taken.
pub async fn lookup_id(api: &ApiClient, record: &AthleteRecord) -> Result<Option<u64>, LookupError> {
    let name = record.display_name();
    let url = api.lookup_url(&record.family_name, &record.given_name);
    debug!(%url, "lookup");

    let transport = |source| LookupError::Transport {
        name: name.clone(),
        source,
    };
    let resp = api.http().get(url).send().await.map_err(transport)?;
    if resp.status() != StatusCode::OK {
        return Err(LookupError::Status {
            name: name.clone(),
            status: resp.status(),
        });
    }
    let body = resp.bytes().await.map_err(transport)?;
    let parsed: LookupResponse =
        serde_json::from_slice(&body).map_err(|source| LookupError::Body {
            name: name.clone(),
            source,
        })?;

    let Some(first) = parsed.skaters.into_iter().next() else {
        return Ok(None);
    };
    let first: SkaterMatch = serde_json::from_value(first).map_err(|source| LookupError::Body {
        name: name.clone(),
        source,
    })?;
    Ok(Some(first.id))
}

/// Resolve an id for every record, in order. Every row ends with either the
/// looked-up id or none; rows are never added, dropped, or reordered.
#[instrument(level = "info", skip_all, fields(rows = table.len()))]
pub async fn resolve_ids(api: &ApiClient, table: &mut AthleteTable) -> ResolveSummary {
    table.ensure_id_column();
    let mut summary = ResolveSummary {
        rows: table.len(),
        ..ResolveSummary::default()
    };

    for record in table.records_mut() {
        info!(
            "Getting ID for athlete {} {}",
            record.given_name, record.family_name
        );
        record.id = None;

        match lookup_id(api, record).await {
            Ok(Some(id)) => {
                info!("Retrieved ID: {}", id);
                record.id = Some(id);
                summary.resolved += 1;
            }
            Ok(None) => {
                warn!(row = record.row, "Retrieved ID: none (no skater named {})", record.display_name());
                summary.unmatched += 1;
            }
            Err(e) => {
                error!(row = record.row, "{}", e);
                summary.failed += 1;
            }
        }
    }

    summary
}
