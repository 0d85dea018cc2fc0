// src/config/consts.rs

// Net config
pub const SUMMARY_URL: &str = "https://finance.yahoo.com/quote/{symbol}?p={symbol}";
pub const STATISTICS_URL: &str = "https://finance.yahoo.com/quote/{symbol}/key-statistics?p={symbol}";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Between the two page loads
pub const SCRAPE_DELAY_MS: u64 = 1_500;
pub const JITTER_MS: u64 = 1_000; // extra 0..1000 ms

// Saved pages (offline runs)
pub const SUMMARY_FILE: &str = "summary.html";
pub const STATISTICS_FILE: &str = "key-statistics.html";

// Logging
pub const LOG_ENV: &str = "LOG_LEVEL";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub fn page_url(template: &str, symbol: &str) -> String {
    template.replace("{symbol}", symbol)
}
