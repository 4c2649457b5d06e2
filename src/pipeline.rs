//! One watch cycle: fetch each source in declared order, diff against seen
//! state, compose the aggregate digest, deliver it. State persistence stays
//! with the caller so it happens exactly once, send outcome notwithstanding.

use anyhow::Result;
use chrono::{FixedOffset, Utc};
use tracing::{info, warn};

use crate::config::SourceSpec;
use crate::diff::diff;
use crate::fetch::RowSource;
use crate::message::{self, SectionReport};
use crate::notify::Notifier;
use crate::state::SeenState;

// Argentina has kept a fixed -03:00 offset since 2009.
const AR_OFFSET_SECS: i32 = -3 * 3600;

/// Buenos Aires wall clock, `YYYY-MM-DD HH:MM`.
pub fn now_ar_string() -> String {
    let offset = FixedOffset::east_opt(AR_OFFSET_SECS).unwrap();
    Utc::now()
        .with_timezone(&offset)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

#[derive(Debug)]
pub struct CycleOutcome {
    pub message: Option<String>,
    pub sent: bool,
}

/// Runs the full pipeline over `sources`, mutating `state` in place.
///
/// A source that fails to fetch (or yields no rows) is logged, contributes an
/// empty section, and keeps its previous seen state untouched. A delivery
/// failure propagates; the caller persists `state` either way.
pub async fn run_cycle(
    sources: &[SourceSpec],
    rows: &dyn RowSource,
    notifier: &dyn Notifier,
    state: &mut SeenState,
    now_str: &str,
) -> Result<CycleOutcome> {
    let mut sections: Vec<SectionReport> = Vec::with_capacity(sources.len());

    for source in sources {
        let fetched = match rows.fetch_rows(&source.url).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(url = %source.url, error = ?e, "falló la lectura de la fuente");
                Vec::new()
            }
        };

        if fetched.is_empty() {
            info!(url = %source.url, "No se pudieron leer eventos en la fuente.");
            sections.push(SectionReport {
                title: source.title.clone(),
                url: source.url.clone(),
                items: Vec::new(),
            });
            continue;
        }

        let new_rows = diff(&source.url, fetched, state);
        let items = new_rows.iter().map(|r| message::bullet_for_row(r)).collect();
        sections.push(SectionReport {
            title: source.title.clone(),
            url: source.url.clone(),
            items,
        });
    }

    let msg = message::compose(&sections, now_str);
    let sent = match &msg {
        Some(text) => {
            notifier.send(text).await?;
            info!("Enviado a Telegram.");
            true
        }
        None => {
            info!("Sin novedades.");
            false
        }
    };

    Ok(CycleOutcome { message: msg, sent })
}
