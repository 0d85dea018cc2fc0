// src/config/options.rs
use std::path::PathBuf;

use crate::analysis::AnalyzerKind;

/// Where the pages come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Source {
    #[default]
    Yahoo,
    /// Directory holding previously saved `summary.html` + `key-statistics.html`.
    PageDir(PathBuf),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub symbol: String,
    pub analyzer: AnalyzerKind,
    pub source: Source,
}

impl Options {
    pub fn new(symbol: &str) -> Self {
        Self { symbol: s!(symbol), ..Default::default() }
    }

    pub fn with_analyzer(mut self, name: &str) -> Self {
        self.analyzer = AnalyzerKind::from_name(name);
        self
    }

    pub fn with_pages(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source = Source::PageDir(dir.into());
        self
    }
}
