// src/analysis.rs
//! Reporters over a [`Quote`].
//!
//! - `Plain` lists the five headline metrics, no judgement.
//! - `Scored` runs four independent rules:
//!   - PE Ratio above 0 passes; blank/0 means not yet profitable.
//!   - Enterprise Value below Market Cap (more cash than debt) passes.
//!   - Return on Equity above 20 passes, above 0 is partial, otherwise fails.
//!   - Insider Ownership strictly between 5 and 40 passes.
//!
//! A report is a list of lines; `Display` joins them with `\n` and adds no
//! trailing terminator.

use std::fmt;

use crate::format::fmt_with_suffix;
use crate::metrics::{Metric, Quote};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnalyzerKind {
    #[default]
    Plain,
    Scored,
}

impl AnalyzerKind {
    /// Total: unknown names fall back to `Plain`, never an error.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "scored" | "asana" => AnalyzerKind::Scored,
            _ => AnalyzerKind::Plain,
        }
    }

    pub fn analyze(self, quote: &Quote) -> Report {
        match self {
            AnalyzerKind::Plain => plain(quote),
            AnalyzerKind::Scored => scored(quote),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Partial,
    Fail,
}

impl Verdict {
    pub fn glyph(self) -> &'static str {
        match self {
            Verdict::Pass => "✅",
            Verdict::Partial => "☑️",
            Verdict::Fail => "⭕",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLine {
    pub text: String,
    pub verdict: Option<Verdict>,
}

impl ReportLine {
    fn plain(text: String) -> Self {
        Self { text, verdict: None }
    }

    fn scored(text: String, verdict: Verdict) -> Self {
        Self { text, verdict: Some(verdict) }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verdict {
            Some(v) => write!(f, "{} -> {}", self.text, v.glyph()),
            None => f.write_str(&self.text),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<ReportLine>,
}

impl Report {
    pub fn verdicts(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.lines.iter().filter_map(|l| l.verdict)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/* ---------- reporters ---------- */

const PLAIN_METRICS: [Metric; 5] = [
    Metric::PERatio,
    Metric::EnterpriseValue,
    Metric::MarketCap,
    Metric::ReturnOnEquity,
    Metric::InsiderOwnership,
];

fn plain(quote: &Quote) -> Report {
    let lines = PLAIN_METRICS
        .iter()
        .map(|m| ReportLine::plain(format!("{m} {}", fmt_with_suffix(quote.get(*m)))))
        .collect();
    Report { lines }
}

fn scored(quote: &Quote) -> Report {
    Report {
        lines: vec![
            pe_ratio_rule(quote),
            cash_vs_debt_rule(quote),
            return_on_equity_rule(quote),
            insider_ownership_rule(quote),
        ],
    }
}

fn pe_ratio_rule(quote: &Quote) -> ReportLine {
    let verdict = if quote.pe_ratio > 0.0 { Verdict::Pass } else { Verdict::Fail };
    ReportLine::scored(format!("PE Ratio {}", fmt_with_suffix(quote.pe_ratio)), verdict)
}

fn cash_vs_debt_rule(quote: &Quote) -> ReportLine {
    let (ev, mc) = (quote.enterprise_value, quote.market_cap);
    let (op, verdict) = if ev < mc {
        ("<", Verdict::Pass)
    } else if ev > mc {
        (">", Verdict::Fail)
    } else {
        ("=", Verdict::Fail)
    };
    ReportLine::scored(
        format!(
            "Enterprise Value {} {op} Market Cap {}",
            fmt_with_suffix(ev),
            fmt_with_suffix(mc)
        ),
        verdict,
    )
}

fn return_on_equity_rule(quote: &Quote) -> ReportLine {
    let roe = quote.return_on_equity;
    let verdict = if roe > 20.0 {
        Verdict::Pass
    } else if roe > 0.0 {
        Verdict::Partial
    } else {
        Verdict::Fail
    };
    ReportLine::scored(format!("Return on Equity {}", fmt_with_suffix(roe)), verdict)
}

fn insider_ownership_rule(quote: &Quote) -> ReportLine {
    let held = quote.insider_ownership;
    let verdict = if held > 5.0 && held < 40.0 { Verdict::Pass } else { Verdict::Fail };
    ReportLine::scored(format!("Insider Ownership {}", fmt_with_suffix(held)), verdict)
}
