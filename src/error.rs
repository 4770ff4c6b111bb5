// src/error.rs

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::bundle::Distance;

/// Reading the athlete CSV failed. Aborts the pipeline.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path:?} has no `{column}` column")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{path:?} row {row}: `{value}` is not a skater id")]
    BadId {
        path: PathBuf,
        row: usize,
        value: String,
    },
}

/// One name lookup failed. Logged; the row keeps an absent id.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("API Error for {name}: {status}")]
    Status { name: String, status: StatusCode },

    #[error("Error fetching data for {name}: {source}")]
    Transport {
        name: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected lookup body for {name}: {source}")]
    Body {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One (skater, distance) results call failed. Logged; the distance is skipped.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Error fetching data for skater {skater} (distance {distance}): HTTP {status}")]
    Status {
        skater: u64,
        distance: Distance,
        status: StatusCode,
    },

    #[error("Error fetching data for skater {skater} (distance {distance}): {source}")]
    Transport {
        skater: u64,
        distance: Distance,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error decoding data for skater {skater} (distance {distance}): {source}")]
    Decode {
        skater: u64,
        distance: Distance,
        #[source]
        source: serde_json::Error,
    },
}

/// Saving output failed. Logged; nothing is retried.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("creating {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing csv {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("writing json {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
