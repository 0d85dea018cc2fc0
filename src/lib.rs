// src/lib.rs

#[macro_use]
mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod analysis;
pub mod error;
pub mod format;
pub mod mapper;
pub mod metrics;
pub mod normalize;
pub mod runner;
pub mod scrape;

pub use analysis::{AnalyzerKind, Report, Verdict};
pub use error::{Error, MapError, ParseError, ScrapeError};
pub use metrics::{Metric, Quote, RawMetrics};
