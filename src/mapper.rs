// src/mapper.rs
use crate::error::MapError;
use crate::metrics::{Metric, Quote, RawMetrics};
use crate::normalize::normalize;

/// Map scraped text into a [`Quote`], metric by metric in [`Metric::ALL`] order.
/// The first metric that fails to parse aborts the whole mapping.
pub fn map(raw: &RawMetrics) -> Result<Quote, MapError> {
    let parse = |metric: Metric| {
        normalize(metric, raw.get(metric)).map_err(|source| MapError { metric, source })
    };

    let [pe, ev, mc, roe, insiders, shares] = Metric::ALL;
    Ok(Quote {
        pe_ratio: parse(pe)?,
        enterprise_value: parse(ev)?,
        market_cap: parse(mc)?,
        return_on_equity: parse(roe)?,
        insider_ownership: parse(insiders)?,
        outstanding_shares: parse(shares)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic() -> RawMetrics {
        RawMetrics {
            pe_ratio: s!("1,118.09"),
            enterprise_value: s!("555.87B"),
            market_cap: s!("555.24B"),
            return_on_equity: s!("5.59%"),
            insider_ownership: s!("20.02%"),
            ..Default::default()
        }
    }

    #[test]
    fn maps_basic_page() {
        let quote = map(&basic()).unwrap();
        assert_eq!(
            quote,
            Quote {
                pe_ratio: 1118.09,
                enterprise_value: 555_870_000_000.0,
                market_cap: 555_240_000_000.0,
                return_on_equity: 5.59,
                insider_ownership: 20.02,
                outstanding_shares: 0.0,
            }
        );
    }

    #[test]
    fn maps_trillion_and_shares() {
        let raw = RawMetrics {
            enterprise_value: s!("2.17T"),
            outstanding_shares: s!("15.73B"),
            ..basic()
        };
        let quote = map(&raw).unwrap();
        assert_eq!(quote.enterprise_value, 2_170_000_000_000.0);
        assert!((quote.outstanding_shares - 15.73e9).abs() < 1.0);
    }

    #[test]
    fn blank_and_na_default_to_zero() {
        let raw = RawMetrics {
            pe_ratio: s!("N/A"),
            ..Default::default()
        };
        assert_eq!(map(&raw).unwrap(), Quote::default());
    }

    #[test]
    fn first_bad_metric_is_reported() {
        let raw = RawMetrics {
            market_cap: s!("lots"),
            insider_ownership: s!("??"),
            ..basic()
        };
        let err = map(&raw).unwrap_err();
        assert_eq!(err.metric, Metric::MarketCap);
        assert_eq!(err.source.raw, "lots");
        assert_eq!(err.to_string(), "failed to parse Market Cap");
    }
}
