// src/fetch/mod.rs

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use url::Url;

use crate::bundle::Distance;

pub mod lookup;
pub mod results;
pub mod throttle;

pub use lookup::{resolve_ids, ResolveSummary};
pub use results::{fetch_results, FetchSummary};
pub use throttle::{FixedDelay, Throttle};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: Url, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self::with_client(http, base))
    }

    fn with_client(http: Client, mut base: Url) -> Self {
        // endpoint names are appended directly to the base path
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self { http, base }
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    fn endpoint(&self, name: &str) -> Url {
        let mut url = self.base.clone();
        let path = format!("{}{}", self.base.path(), name);
        url.set_path(&path);
        url
    }

    /// `skater_lookup?familyname=<family>&givenname=<given>`
    pub fn lookup_url(&self, family_name: &str, given_name: &str) -> Url {
        let mut url = self.endpoint("skater_lookup");
        url.query_pairs_mut()
            .append_pair("familyname", family_name)
            .append_pair("givenname", given_name);
        url
    }

    /// `skater_results.php?skater=<id>&distance=<label>`
    pub fn results_url(&self, skater: u64, distance: Distance) -> Url {
        let mut url = self.endpoint("skater_results.php");
        url.query_pairs_mut()
            .append_pair("skater", &skater.to_string())
            .append_pair("distance", distance.label());
        url
    }
}
