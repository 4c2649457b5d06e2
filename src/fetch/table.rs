//! First-table extraction: rendered portal markup into pipe-joined raw rows.

use scraper::{Html, Selector};

use crate::diff::dedup_rows;
use crate::rows::normalize_ws;

/// The portal's header row names the date and identification columns.
fn is_header_row(cells: &[String]) -> bool {
    let joined = cells.join(" ").to_lowercase();
    joined.contains("fecha") && joined.contains("identificación")
}

/// Rows of the first `<table>` in `html`, cells trimmed and joined with
/// `" | "`. Rows with fewer than three cells and header rows are skipped;
/// exact duplicates collapse (first occurrence wins). No table → empty.
pub fn extract_rows(html: &str) -> Vec<String> {
    let table_sel = Selector::parse("table").unwrap();
    let tr_sel = Selector::parse("tr").unwrap();
    let cell_sel = Selector::parse("td, th").unwrap();

    let doc = Html::parse_document(html);
    let Some(table) = doc.select(&table_sel).next() else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    for tr in table.select(&tr_sel) {
        let cells: Vec<String> = tr
            .select(&cell_sel)
            .map(|cell| normalize_ws(&cell.text().collect::<String>()))
            .collect();
        if cells.len() < 3 || is_header_row(&cells) {
            continue;
        }
        rows.push(cells.join(" | "));
    }

    dedup_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_table_yields_empty() {
        assert!(extract_rows("<html><body><p>nada</p></body></html>").is_empty());
    }

    #[test]
    fn header_and_short_rows_are_skipped() {
        let html = r#"
            <table>
              <tr><th>Fecha</th><th>Identificación</th><th>Descripción</th></tr>
              <tr><td>12/05/25</td><td>KO</td></tr>
              <tr><td>12/05/25</td><td>KO</td><td>DIVIDENDO</td><td></td></tr>
            </table>"#;
        assert_eq!(extract_rows(html), vec!["12/05/25 | KO | DIVIDENDO | "]);
    }

    #[test]
    fn only_first_table_is_read_and_duplicates_collapse() {
        let html = r#"
            <table>
              <tr><td>a</td><td>b</td><td>c</td></tr>
              <tr><td>a</td><td>b</td><td>c</td></tr>
            </table>
            <table>
              <tr><td>x</td><td>y</td><td>z</td></tr>
            </table>"#;
        assert_eq!(extract_rows(html), vec!["a | b | c"]);
    }

    #[test]
    fn cell_whitespace_is_normalized() {
        let html = "<table><tr><td> 12/05/25\n</td><td>KO</td><td>DIVIDENDO  EN\tEFECTIVO</td></tr></table>";
        assert_eq!(extract_rows(html), vec!["12/05/25 | KO | DIVIDENDO EN EFECTIVO"]);
    }
}
