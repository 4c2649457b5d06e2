// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod classify;
pub mod config;
pub mod diff;
pub mod fetch;
pub mod message;
pub mod notify;
pub mod pipeline;
pub mod rows;
pub mod state;

// ---- Re-exports for stable public API ----
pub use classify::{classify, EventCategory};
pub use message::SectionReport;
pub use rows::{parse_row, ParsedEvent};
pub use state::{SeenState, StateStore};
