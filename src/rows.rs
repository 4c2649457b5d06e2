//! Raw-row parsing: one pipe-joined table row into (date, ticker, description).
//!
//! Expected shape: `DD/MM/YY | TICKER | DESCRIPCION ... | |`. The portal pads
//! sparse columns with empty cells, so empty segments are dropped from the
//! result set before positional assignment. Malformed input degrades to
//! partially-empty fields; this layer never fails.

use once_cell::sync::OnceCell;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedEvent {
    pub date: String,
    pub ticker: String,
    pub description: String,
}

/// Collapse whitespace runs (including newlines) to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").unwrap());
    re_ws.replace_all(s, " ").trim().to_string()
}

pub fn parse_row(row: &str) -> ParsedEvent {
    let parts: Vec<&str> = row
        .split('|')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    ParsedEvent {
        date: normalize_ws(parts.first().copied().unwrap_or_default()),
        ticker: normalize_ws(parts.get(1).copied().unwrap_or_default()),
        description: normalize_ws(parts.get(2).copied().unwrap_or_default()),
    }
}
