// src/normalize.rs
//! Raw metric text → f64.
//!
//! Accepted shapes: blank, `N/A`, `1,118.09`, `5.59%`, `555.87B`, `2.17T`, `47.1M`.
//! Magnitude letters are uppercase only; anything else left after cleanup
//! is a [`ParseError`].

use crate::error::ParseError;
use crate::metrics::Metric;

pub const THOUSAND: f64 = 1_000.0;
pub const MILLION: f64 = THOUSAND * THOUSAND;
pub const BILLION: f64 = MILLION * THOUSAND;
pub const TRILLION: f64 = BILLION * THOUSAND;

pub const NOT_AVAILABLE: &str = "N/A";

fn multiplier(suffix: char) -> Option<f64> {
    match suffix {
        'M' => Some(MILLION),
        'B' => Some(BILLION),
        'T' => Some(TRILLION),
        _ => None,
    }
}

pub fn normalize(metric: Metric, raw: &str) -> Result<f64, ParseError> {
    if raw.is_empty() || raw == NOT_AVAILABLE {
        return Ok(0.0);
    }

    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '%').collect();
    let fail = || ParseError { metric, raw: s!(raw) };

    let (number, scale) = match cleaned.chars().last().and_then(|c| multiplier(c).map(|m| (c, m))) {
        Some((suffix, m)) => (&cleaned[..cleaned.len() - suffix.len_utf8()], m),
        None => (cleaned.as_str(), 1.0),
    };

    parse_finite(number)
        .map(|v| v * scale)
        .filter(|v| v.is_finite())
        .ok_or_else(fail)
}

// str::parse also takes "inf"/"NaN"; those are garbage on a stats page.
fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
