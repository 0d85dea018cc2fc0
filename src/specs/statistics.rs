// src/specs/statistics.rs
//! Key-statistics page: `/quote/{SYM}/key-statistics?p={SYM}`.
//!
//! Every figure is a table row of label cell + value cell:
//!   <tr class="fi-row"><td><span>Enterprise Value</span> <sup>3</sup></td><td>555.87B</td></tr>
//! Rows are scanned as adjacent (label, value) cell pairs; the first
//! matching label per metric wins.

use scraper::{ElementRef, Html};

use super::{selector, span_or_text, text_of};
use crate::core::sanitize::label_key;
use crate::error::ScrapeError;
use crate::metrics::{Metric, RawMetrics};

pub fn parse_doc(doc: &str) -> Result<RawMetrics, ScrapeError> {
    let html = Html::parse_document(doc);
    let row_sel = selector("tr")?;
    let cell_sel = selector("td, th")?;
    let span_sel = selector("span")?;

    let mut raw = RawMetrics::default();
    for row in html.select(&row_sel) {
        let cells: Vec<ElementRef<'_>> = row.select(&cell_sel).collect();
        for pair in cells.windows(2) {
            let label = span_or_text(pair[0], &span_sel);
            if let Some(metric) = classify(&label) {
                raw.set(metric, text_of(pair[1]));
            }
        }
    }
    Ok(raw)
}

/// Map a row label to the metric it carries.
pub fn classify(label: &str) -> Option<Metric> {
    let key = label_key(label);
    if key.starts_with("market cap") {
        Some(Metric::MarketCap)
    } else if key == "enterprise value" {
        Some(Metric::EnterpriseValue)
    } else if key.contains("return on equity") {
        Some(Metric::ReturnOnEquity)
    } else if key.contains("held by insiders") {
        Some(Metric::InsiderOwnership)
    } else if key.starts_with("shares outstanding") {
        Some(Metric::OutstandingShares)
    } else if key.starts_with("trailing p/e") {
        Some(Metric::PERatio)
    } else {
        None
    }
}
