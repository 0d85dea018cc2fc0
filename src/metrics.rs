// src/metrics.rs
//! Metric identity plus the two shapes a symbol's statistics take:
//! raw page text ([`RawMetrics`]) and parsed numbers ([`Quote`]).

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    PERatio,
    EnterpriseValue,
    MarketCap,
    ReturnOnEquity,
    InsiderOwnership,
    OutstandingShares,
}

impl Metric {
    /// Build order used by the mapper.
    pub const ALL: [Metric; 6] = [
        Metric::PERatio,
        Metric::EnterpriseValue,
        Metric::MarketCap,
        Metric::ReturnOnEquity,
        Metric::InsiderOwnership,
        Metric::OutstandingShares,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::PERatio => "PE Ratio",
            Metric::EnterpriseValue => "Enterprise Value",
            Metric::MarketCap => "Market Cap",
            Metric::ReturnOnEquity => "Return on Equity",
            Metric::InsiderOwnership => "Insider Ownership",
            Metric::OutstandingShares => "Outstanding Shares",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw text per metric, as scraped. Missing values stay empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawMetrics {
    pub pe_ratio: String,
    pub enterprise_value: String,
    pub market_cap: String,
    pub return_on_equity: String,
    pub insider_ownership: String,
    pub outstanding_shares: String,
}

impl RawMetrics {
    pub fn get(&self, metric: Metric) -> &str {
        match metric {
            Metric::PERatio => &self.pe_ratio,
            Metric::EnterpriseValue => &self.enterprise_value,
            Metric::MarketCap => &self.market_cap,
            Metric::ReturnOnEquity => &self.return_on_equity,
            Metric::InsiderOwnership => &self.insider_ownership,
            Metric::OutstandingShares => &self.outstanding_shares,
        }
    }

    fn slot(&mut self, metric: Metric) -> &mut String {
        match metric {
            Metric::PERatio => &mut self.pe_ratio,
            Metric::EnterpriseValue => &mut self.enterprise_value,
            Metric::MarketCap => &mut self.market_cap,
            Metric::ReturnOnEquity => &mut self.return_on_equity,
            Metric::InsiderOwnership => &mut self.insider_ownership,
            Metric::OutstandingShares => &mut self.outstanding_shares,
        }
    }

    /// First non-empty value wins; later matches on the page are ignored.
    /// Returns whether the value was taken.
    pub fn set(&mut self, metric: Metric, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = self.slot(metric);
        if !slot.is_empty() || value.is_empty() {
            return false;
        }
        *slot = value;
        true
    }

    /// Fill every empty slot from `other`.
    pub fn merge(&mut self, other: RawMetrics) {
        for metric in Metric::ALL {
            self.set(metric, other.get(metric));
        }
    }

    pub fn is_empty(&self) -> bool {
        Metric::ALL.iter().all(|m| self.get(*m).is_empty())
    }
}

/// Parsed, rule-ready numbers. Every field is always set; absent values are 0.0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quote {
    pub pe_ratio: f64,
    pub enterprise_value: f64,
    pub market_cap: f64,
    pub return_on_equity: f64,
    pub insider_ownership: f64,
    pub outstanding_shares: f64,
}

impl Quote {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::PERatio => self.pe_ratio,
            Metric::EnterpriseValue => self.enterprise_value,
            Metric::MarketCap => self.market_cap,
            Metric::ReturnOnEquity => self.return_on_equity,
            Metric::InsiderOwnership => self.insider_ownership,
            Metric::OutstandingShares => self.outstanding_shares,
        }
    }
}
