//! Public exoplanet record feed.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// One exoplanet record. Field names follow the feed exactly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Exoplanet {
    pub pl_name: String,
    pub disc_year: i32,
    pub discoverymethod: String,
    pub hostname: String,
    pub disc_facility: String,
    pub disc_instrument: String,
    pub pl_orbper_reflink: String,
}

pub struct ExoplanetService {
    http: reqwest::Client,
    url: String,
}

impl ExoplanetService {
    pub fn new(url: impl Into<String>) -> Self {
        ExoplanetService {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Fetch the exoplanet list. Any failure (transport, non-2xx status,
    /// parse) is logged and yields an empty list; this never errors.
    pub async fn fetch(&self) -> Vec<Exoplanet> {
        match self.try_fetch().await {
            Ok(planets) => planets,
            Err(e) => {
                log::warn!("exoplanet fetch failed: {e:#}");
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self) -> anyhow::Result<Vec<Exoplanet>> {
        self.http
            .get(&self.url)
            .send()
            .await
            .context("exoplanet request failed")?
            .error_for_status()
            .context("exoplanet feed returned an error status")?
            .json()
            .await
            .context("exoplanet response was not a record array")
    }
}
