// src/core/sanitize.rs

/// Collapse runs of whitespace (incl. NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Row label → match key: lower-case, whitespace collapsed, trailing
/// footnote markers dropped ("Enterprise Value 3" → "enterprise value").
pub fn label_key(s: &str) -> String {
    let lc = normalize_ws(s).to_lowercase();
    lc.trim_end_matches(|c: char| c.is_ascii_digit() || c.is_whitespace())
        .to_string()
}

/// Ticker as the site expects it in URLs.
pub fn clean_symbol(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  1,118.09 \n"), "1,118.09");
        assert_eq!(normalize_ws("Market\u{a0}Cap   (intraday)"), "Market Cap (intraday)");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn label_key_drops_footnotes() {
        assert_eq!(label_key("Enterprise Value 3"), "enterprise value");
        assert_eq!(label_key("% Held by Insiders 1"), "% held by insiders");
        assert_eq!(label_key("Market Cap (intraday) 5"), "market cap (intraday)");
        assert_eq!(label_key("Trailing P/E"), "trailing p/e");
    }

    #[test]
    fn clean_symbol_uppercases() {
        assert_eq!(clean_symbol(" aapl ").as_deref(), Some("AAPL"));
        assert_eq!(clean_symbol("   "), None);
    }
}
