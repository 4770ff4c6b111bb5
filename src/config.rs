// src/config.rs

use std::{path::PathBuf, time::Duration};

use url::Url;

pub const API_BASE: &str = "https://speedskatingresults.com/api/json/";

pub const ATHLETES_INPUT: &str = "data/athletes_list.csv";
pub const ATHLETES_WITH_IDS: &str = "data/athletes_list_with_ids.csv";
pub const RESULTS_OUTPUT: &str = "athlete_results.json";

/// Pause before every results request.
pub const RESULTS_INTERVAL: Duration = Duration::from_millis(500);
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything a pipeline run needs to know about its surroundings.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: Url,
    /// Names to resolve (pipeline 1 input).
    pub athletes_input: PathBuf,
    /// Names with ids (pipeline 1 output, pipeline 2 input).
    pub athletes_with_ids: PathBuf,
    pub results_output: PathBuf,
    pub results_interval: Duration,
    pub http_timeout: Duration,
    /// Print the results document to stdout after saving it.
    pub echo_results: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: Url::parse(API_BASE).expect("API_BASE should parse"),
            athletes_input: PathBuf::from(ATHLETES_INPUT),
            athletes_with_ids: PathBuf::from(ATHLETES_WITH_IDS),
            results_output: PathBuf::from(RESULTS_OUTPUT),
            results_interval: RESULTS_INTERVAL,
            http_timeout: HTTP_TIMEOUT,
            echo_results: true,
        }
    }
}
