// src/scrape.rs
use std::{error::Error as StdError, fmt, fs, path::{Path, PathBuf}};

use crate::{
    config::consts::{page_url, STATISTICS_FILE, STATISTICS_URL, SUMMARY_FILE, SUMMARY_URL},
    core::net::{self, Http},
    core::sanitize::clean_symbol,
    error::ScrapeError,
    metrics::RawMetrics,
    specs,
};

/// Anything that can produce raw statistics for one symbol.
pub trait Scraper {
    fn scrape(&self, symbol: &str) -> Result<RawMetrics, ScrapeError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Summary,
    Statistics,
}

impl Page {
    /// Load order; the summary page's PE ratio beats the statistics fallback.
    pub const ALL: [Page; 2] = [Page::Summary, Page::Statistics];

    pub fn parse(self, doc: &str) -> Result<RawMetrics, ScrapeError> {
        match self {
            Page::Summary => specs::summary::parse_doc(doc),
            Page::Statistics => specs::statistics::parse_doc(doc),
        }
    }

    fn url(self, symbol: &str) -> String {
        match self {
            Page::Summary => page_url(SUMMARY_URL, symbol),
            Page::Statistics => page_url(STATISTICS_URL, symbol),
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            Page::Summary => SUMMARY_FILE,
            Page::Statistics => STATISTICS_FILE,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Summary => f.write_str("summary page"),
            Page::Statistics => f.write_str("statistics page"),
        }
    }
}

/* ---------- live site ---------- */

pub struct YahooScraper {
    http: Http,
}

impl YahooScraper {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self { http: Http::new()? })
    }
}

impl Scraper for YahooScraper {
    fn scrape(&self, symbol: &str) -> Result<RawMetrics, ScrapeError> {
        let symbol = clean_symbol(symbol).ok_or(ScrapeError::EmptySymbol)?;

        let docs = Page::ALL.into_iter().enumerate().map(|(i, page)| {
            if i > 0 {
                net::polite_pause(i + symbol.len());
            }
            (page, self.http.get(&page.url(&symbol)))
        });
        gather(&symbol, docs)
    }
}

/* ---------- saved pages ---------- */

/// Reads `summary.html` + `key-statistics.html` from `dir/<SYMBOL>/`
/// if that exists, else straight from `dir`.
pub struct PageDirScraper {
    dir: PathBuf,
}

impl PageDirScraper {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn base_for(&self, symbol: &str) -> PathBuf {
        let per_symbol = self.dir.join(symbol);
        if per_symbol.is_dir() { per_symbol } else { self.dir.clone() }
    }
}

impl Scraper for PageDirScraper {
    fn scrape(&self, symbol: &str) -> Result<RawMetrics, ScrapeError> {
        let symbol = clean_symbol(symbol).ok_or(ScrapeError::EmptySymbol)?;
        let base = self.base_for(&symbol);

        let docs = Page::ALL
            .into_iter()
            .map(|page| (page, read_page(&base.join(page.file_name()))));
        gather(&symbol, docs)
    }
}

fn read_page(path: &Path) -> Result<String, ScrapeError> {
    logf!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|source| ScrapeError::Io { path: path.to_path_buf(), source })
}

/* ---------- helpers ---------- */

/// Merge whatever pages loaded. A page that fails to load is logged and
/// skipped; only when none loads is it an error.
fn gather(
    symbol: &str,
    docs: impl IntoIterator<Item = (Page, Result<String, ScrapeError>)>,
) -> Result<RawMetrics, ScrapeError> {
    let mut raw = RawMetrics::default();
    let mut loaded = 0usize;

    for (page, doc) in docs {
        match doc {
            Ok(doc) => {
                raw.merge(page.parse(&doc)?);
                loaded += 1;
            }
            Err(e) => loge!("{symbol}: failed to load {page}: {}", chain(&e)),
        }
    }

    if loaded == 0 {
        return Err(ScrapeError::NothingFetched(s!(symbol)));
    }
    if raw.is_empty() {
        logf!("{symbol}: no known statistics found on the pages");
    }
    logd!("{symbol}: {raw:?}");
    Ok(raw)
}

fn chain(e: &dyn StdError) -> String {
    let mut out = e.to_string();
    let mut cur = e.source();
    while let Some(inner) = cur {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        cur = inner.source();
    }
    out
}
