// src/core/net.rs

// Blocking HTTP GET for the quote pages

use std::{thread, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::{JITTER_MS, REQUEST_TIMEOUT_SECS, SCRAPE_DELAY_MS, USER_AGENT};
use crate::error::ScrapeError;

pub struct Http {
    client: Client,
}

impl Http {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }

    pub fn get(&self, url: &str) -> Result<String, ScrapeError> {
        logf!("Visiting {url}");
        let http = |source| ScrapeError::Http { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(http)?;
        let resp = resp.error_for_status().map_err(http)?;
        let body = resp.text().map_err(http)?;

        logd!("{url}: {} bytes", body.len());
        Ok(body)
    }
}

/// Sleep between page loads; `seed` varies the jitter without a RNG.
pub fn polite_pause(seed: usize) {
    let jitter = (seed as u64 * 37) % JITTER_MS;
    thread::sleep(Duration::from_millis(SCRAPE_DELAY_MS + jitter)); // be polite
}
