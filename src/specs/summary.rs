// src/specs/summary.rs
//! Quote summary page: `/quote/{SYM}?p={SYM}`.
//!
//! PE ratio sits in the summary table:
//!   <td data-test="PE_RATIO-value"><span>31.25</span></td>
//! Newer markup carries it on a streamer element instead:
//!   <fin-streamer data-field="trailingPE">31.25</fin-streamer>

use scraper::Html;

use super::{selector, span_or_text, text_of};
use crate::error::ScrapeError;
use crate::metrics::{Metric, RawMetrics};

pub fn parse_doc(doc: &str) -> Result<RawMetrics, ScrapeError> {
    let html = Html::parse_document(doc);
    let pe_cell = selector(r#"td[data-test="PE_RATIO-value"]"#)?;
    let pe_field = selector(r#"[data-field="trailingPE"]"#)?;
    let span = selector("span")?;

    let mut raw = RawMetrics::default();
    if let Some(td) = html.select(&pe_cell).next() {
        raw.set(Metric::PERatio, span_or_text(td, &span));
    }
    if let Some(el) = html.select(&pe_field).next() {
        raw.set(Metric::PERatio, text_of(el));
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_pe_from_summary_cell() {
        let doc = r#"
            <html><body><table>
              <tr><td><span>Market Cap</span></td><td data-test="MARKET_CAP-value"><span>2.5T</span></td></tr>
              <tr>
                <td><span>PE Ratio (TTM)</span></td>
                <td class="Ta(end)" data-test="PE_RATIO-value"><span class="Trsdu(0.3s)"> 1,118.09 </span></td>
              </tr>
            </table></body></html>
        "#;
        let raw = parse_doc(doc).unwrap();
        assert_eq!(raw.pe_ratio, "1,118.09");
        // summary page only feeds the PE ratio
        assert_eq!(raw.market_cap, "");
    }

    #[test]
    fn blank_pe_stays_blank() {
        let doc = r#"<table><tr><td data-test="PE_RATIO-value"><span>N/A</span></td></tr></table>"#;
        assert_eq!(parse_doc(doc).unwrap().pe_ratio, "N/A");

        let doc = "<html><body><p>nothing here</p></body></html>";
        assert_eq!(parse_doc(doc).unwrap().pe_ratio, "");
    }

    #[test]
    fn falls_back_to_streamer_field() {
        let doc = r#"<ul><li><span>PE Ratio (TTM)</span>
            <fin-streamer data-field="trailingPE" data-symbol="AAPL">31.25</fin-streamer></li></ul>"#;
        assert_eq!(parse_doc(doc).unwrap().pe_ratio, "31.25");
    }
}
