//! New-row computation: pure set arithmetic over a fresh batch and the
//! per-source seen state.

use std::collections::HashSet;

use crate::state::SeenState;

/// First-occurrence-wins dedup preserving batch order.
pub fn dedup_rows(rows: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(rows.len());
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        if seen.insert(row.clone()) {
            out.push(row);
        }
    }
    out
}

/// Rows in `fresh` not previously recorded for `source_url`, in batch order.
/// The stored entry is replaced with the full deduplicated batch: a row that
/// drops off the live table and later reappears counts as new again.
pub fn diff(source_url: &str, fresh: Vec<String>, state: &mut SeenState) -> Vec<String> {
    let fresh = dedup_rows(fresh);

    let seen: HashSet<&str> = state
        .get(source_url)
        .map(|rows| rows.iter().map(String::as_str).collect())
        .unwrap_or_default();

    let new_rows: Vec<String> = fresh
        .iter()
        .filter(|row| !seen.contains(row.as_str()))
        .cloned()
        .collect();

    state.insert(source_url.to_string(), fresh);
    new_rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_duplicate_raw_rows_collapse_to_one() {
        let mut state = SeenState::new();
        let new = diff("u", rows(&["A|T1|X", "A|T1|X", "A|T2|Y"]), &mut state);
        assert_eq!(new, rows(&["A|T1|X", "A|T2|Y"]));
        assert_eq!(state["u"], rows(&["A|T1|X", "A|T2|Y"]));
    }

    #[test]
    fn second_identical_batch_yields_nothing() {
        let mut state = SeenState::new();
        let batch = rows(&["r1", "r2"]);
        assert_eq!(diff("u", batch.clone(), &mut state).len(), 2);
        assert!(diff("u", batch, &mut state).is_empty());
    }

    #[test]
    fn state_is_replaced_not_merged() {
        let mut state = SeenState::new();
        diff("u", rows(&["r1", "r2"]), &mut state);
        // r1 drops off the live table...
        diff("u", rows(&["r2", "r3"]), &mut state);
        assert_eq!(state["u"], rows(&["r2", "r3"]));
        // ...and counts as new when it reappears.
        let new = diff("u", rows(&["r1", "r2", "r3"]), &mut state);
        assert_eq!(new, rows(&["r1"]));
    }

    #[test]
    fn sources_track_independent_state() {
        let mut state = SeenState::new();
        diff("a", rows(&["shared"]), &mut state);
        let new = diff("b", rows(&["shared"]), &mut state);
        assert_eq!(new, rows(&["shared"]));
    }
}
