// src/specs/mod.rs
//! # Page specs
//!
//! One module per page of the quote site. Each spec knows *where the numbers
//! live in the HTML* and turns a document string into [`RawMetrics`]:
//!
//! - `summary` – the quote summary page; source of the PE ratio.
//! - `statistics` – the key-statistics page; label/value table rows for
//!   market cap, enterprise value, return on equity, insider ownership,
//!   shares outstanding (and trailing P/E as a fallback).
//!
//! Specs are pure: no network, no files, no logging. Fetching and merging
//! live in `scrape`. Values are passed on as the page shows them
//! (whitespace-normalized only); turning them into numbers is `normalize`'s job.
//!
//! Keep selectors tolerant to whitespace, attribute order, footnote markers
//! and wrapper elements so they can be tested offline against saved pages.
//!
//! [`RawMetrics`]: crate::metrics::RawMetrics

use scraper::{ElementRef, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::ScrapeError;

pub mod statistics;
pub mod summary;

pub(crate) fn selector(css: &'static str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector(s!(css)))
}

pub(crate) fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of the first non-empty `span` inside `el`, else the element's own text.
pub(crate) fn span_or_text(el: ElementRef<'_>, span: &Selector) -> String {
    el.select(span)
        .map(text_of)
        .find(|t| !t.is_empty())
        .unwrap_or_else(|| text_of(el))
}
