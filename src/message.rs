//! Message assembly: per-source bullets, categorized buckets, and the final
//! multi-section Telegram text. This layer cannot fail; "nothing to send" is
//! signaled by returning `None`.

use std::collections::{BTreeMap, HashSet};

use crate::classify::{classify, EventCategory};
use crate::rows::parse_row;

/// Bullet cap per section in the aggregate message.
pub const MAX_ITEMS_PER_SECTION: usize = 20;
/// Default bullet cap per category in the single-source message.
pub const DEFAULT_MAX_PER_CATEGORY: usize = 10;
/// Descriptions longer than this are cut to 87 chars plus "...".
pub const DESC_MAX_CHARS: usize = 90;

/// One source's contribution to the aggregate message.
#[derive(Debug, Clone)]
pub struct SectionReport {
    pub title: String,
    pub url: String,
    pub items: Vec<String>,
}

fn truncate_desc(desc: &str) -> String {
    if desc.chars().count() > DESC_MAX_CHARS {
        let head: String = desc.chars().take(DESC_MAX_CHARS - 3).collect();
        format!("{head}...")
    } else {
        desc.to_string()
    }
}

/// Short bullet for one new raw row: `• FECHA | TICKER | DESC`. Rows without
/// a ticker fall back to the raw text so nothing silently disappears.
pub fn bullet_for_row(row: &str) -> String {
    let ev = parse_row(row);
    if ev.ticker.is_empty() {
        format!("• {row}")
    } else {
        format!(
            "• {} | {} | {}",
            ev.date,
            ev.ticker,
            truncate_desc(&ev.description)
        )
    }
}

/// Aggregate message across sources, in the given section order. `None` when
/// every section is empty.
pub fn compose(sections: &[SectionReport], now_str: &str) -> Option<String> {
    if sections.iter().all(|s| s.items.is_empty()) {
        return None;
    }

    let mut lines: Vec<String> = Vec::new();
    lines.push("🔔 Novedades CEDEAR".into());
    lines.push(String::new());
    lines.push(format!("📅 {now_str} AR"));
    lines.push(String::new());

    for section in sections {
        if section.items.is_empty() {
            continue;
        }
        lines.push(section.title.clone());
        lines.push(String::new());
        lines.extend(
            section
                .items
                .iter()
                .take(MAX_ITEMS_PER_SECTION)
                .cloned(),
        );
        if section.items.len() > MAX_ITEMS_PER_SECTION {
            lines.push(format!(
                "• … y {} más",
                section.items.len() - MAX_ITEMS_PER_SECTION
            ));
        }
        lines.push(String::new());
        lines.push(format!("Fuente: {}", section.url));
        lines.push(String::new());
    }

    lines.push("—".into());
    lines.push("Equipo RIG Valores".into());
    lines.push(String::new());
    lines.push("Este es un mensaje automático generado por nuestro sistema de monitoreo.".into());
    lines.push("Ante cualquier inquietud, contacte con su asesor.".into());
    lines.push(String::new());

    Some(lines.join("\n").trim().to_string())
}

/// Single-source digest with stronger local dedup: dividends collapse to one
/// bullet per ticker, everything else to one per (ticker, label). `None` when
/// no category ends up non-empty.
pub fn build_message(
    new_rows: &[String],
    now_str: &str,
    url: &str,
    max_per_cat: usize,
) -> Option<String> {
    let mut buckets: BTreeMap<EventCategory, Vec<String>> = BTreeMap::new();
    let mut div_seen: HashSet<String> = HashSet::new();
    let mut other_seen: HashSet<(String, String)> = HashSet::new();

    for row in new_rows {
        let ev = parse_row(row);
        if ev.ticker.is_empty() {
            continue;
        }

        let (cat, label) = classify(&ev.description);
        if cat == EventCategory::Dividends {
            if div_seen.insert(ev.ticker.clone()) {
                buckets.entry(cat).or_default().push(format!("• {}", ev.ticker));
            }
        } else {
            let lab = label.unwrap_or("Evento");
            if other_seen.insert((ev.ticker.clone(), lab.to_string())) {
                buckets
                    .entry(cat)
                    .or_default()
                    .push(format!("• {} – {}", ev.ticker, lab));
            }
        }
    }

    if buckets.values().all(|items| items.is_empty()) {
        return None;
    }

    let mut lines: Vec<String> = Vec::new();
    lines.push("🔔 Nuevos eventos CEDEAR".into());
    lines.push(String::new());
    lines.push(format!("📅 {now_str} AR"));
    lines.push(String::new());

    // BTreeMap iterates in category declaration order.
    for (cat, items) in &buckets {
        if items.is_empty() {
            continue;
        }
        lines.push(cat.title().to_string());
        lines.push(String::new());
        lines.extend(items.iter().take(max_per_cat).cloned());
        if items.len() > max_per_cat {
            lines.push(format!("• … y {} más", items.len() - max_per_cat));
        }
        lines.push(String::new());
    }

    lines.push(format!("Fuente: {url}"));
    Some(lines.join("\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_descriptions_pass_through() {
        assert_eq!(truncate_desc("corto"), "corto");
    }

    #[test]
    fn long_descriptions_cut_at_87_chars_plus_ellipsis() {
        let desc = "á".repeat(120);
        let out = truncate_desc(&desc);
        assert_eq!(out.chars().count(), 90);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn tickerless_row_falls_back_to_raw_text() {
        assert_eq!(bullet_for_row("solo texto"), "• solo texto");
    }

    #[test]
    fn bullet_uses_parsed_fields() {
        assert_eq!(
            bullet_for_row("12/05/25 | KO | DIVIDENDO EN EFECTIVO | |"),
            "• 12/05/25 | KO | DIVIDENDO EN EFECTIVO"
        );
    }
}
