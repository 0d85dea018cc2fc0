// src/format.rs
//! Compact display of big numbers:
//!
//! ```text
//!             999.0 -> 999.00
//!           1 000.0 -> 1.00 k
//!        47 123 456 -> 47.12 M
//!    28 991 029 248 -> 28.99 B
//! 5 608 991 029 248 -> 5.61 T
//! ```
//!
//! Output is fixed two-decimal with no grouping, whatever the host locale.
//!
//! Anything under 1000 never gets a suffix, even when it rounds up
//! (999.996 -> 1000.00). Past `E` the number part is not capped, so 5e24
//! prints as `5000000.00 E`.

use crate::normalize::THOUSAND;

/// One letter per power of 1000, starting at 1000^1.
pub const SUFFIXES: [char; 6] = ['k', 'M', 'B', 'T', 'P', 'E'];

pub fn fmt_with_suffix(value: f64) -> String {
    if !value.is_finite() || value.abs() < THOUSAND {
        return format!("{value:.2}");
    }

    let magnitude = value.abs();
    let mut tier = tier_of(magnitude);
    let mut scaled = magnitude / THOUSAND.powi(tier as i32);

    // 999 999 would print as "1000.00 k"; that belongs to the next tier
    if rounds_to_thousand(scaled) && tier < SUFFIXES.len() {
        tier += 1;
        scaled = magnitude / THOUSAND.powi(tier as i32);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{scaled:.2} {}", SUFFIXES[tier - 1])
}

/// floor(log1000(magnitude)), clamped to the known suffixes.
/// `magnitude` must be finite and >= 1000.
fn tier_of(magnitude: f64) -> usize {
    let mut tier = ((magnitude.log10() / 3.0).floor() as usize).clamp(1, SUFFIXES.len());

    // log10 may land a hair under an exact power of 1000 (or over it)
    while tier < SUFFIXES.len() && magnitude >= THOUSAND.powi(tier as i32 + 1) {
        tier += 1;
    }
    while tier > 1 && magnitude < THOUSAND.powi(tier as i32) {
        tier -= 1;
    }
    tier
}

fn rounds_to_thousand(scaled: f64) -> bool {
    (scaled * 100.0).round() >= THOUSAND * 100.0
}
