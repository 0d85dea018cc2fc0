// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::metrics::Metric;

/// A raw value that is neither blank, "N/A", nor a number once commas,
/// percent signs and a magnitude suffix are removed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{metric} value `{raw}` is not a number")]
pub struct ParseError {
    pub metric: Metric,
    pub raw: String,
}

/// Building a [`Quote`](crate::metrics::Quote) failed on one metric.
/// No partial quote is ever returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse {metric}")]
pub struct MapError {
    pub metric: Metric,
    #[source]
    pub source: ParseError,
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("symbol cannot be empty")]
    EmptySymbol,

    #[error("could not build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not read page {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid selector `{0}`")]
    Selector(String),

    #[error("no page could be loaded for {0}")]
    NothingFetched(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error(transparent)]
    Map(#[from] MapError),
}
