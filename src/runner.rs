// src/runner.rs
use crate::{
    analysis::Report,
    config::options::{Options, Source},
    error::{Error, ScrapeError},
    mapper,
    metrics::{Quote, RawMetrics},
    scrape::{PageDirScraper, Scraper, YahooScraper},
};

/// Top-level runner: scrape → map → analyze.
pub fn run(opts: &Options) -> Result<Report, Error> {
    let raw = scrape(opts)?;
    let quote = mapper::map(&raw)?;
    Ok(report(opts, &quote))
}

/// Dispatch on the configured source.
pub fn scrape(opts: &Options) -> Result<RawMetrics, ScrapeError> {
    match &opts.source {
        Source::Yahoo => YahooScraper::new()?.scrape(&opts.symbol),
        Source::PageDir(dir) => PageDirScraper::new(dir).scrape(&opts.symbol),
    }
}

pub fn report(opts: &Options, quote: &Quote) -> Report {
    let report = opts.analyzer.analyze(quote);
    logf!(
        "Analysis result for {} ({:?}), {} lines",
        opts.symbol.trim().to_uppercase(),
        opts.analyzer,
        report.lines.len()
    );
    report
}
