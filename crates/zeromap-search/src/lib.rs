//! Relevance search over in-memory place records.
//!
//! Pure functions with no I/O and no shared state: safe to call from any
//! concurrent context. `search` ranks a caller-supplied slice of
//! [`zeromap_core::PlaceRecord`] against a free-text query, `suggest`
//! derives autocomplete candidates, and `highlight` marks query hits for
//! display.

mod levenshtein;
mod score;
mod suggest;

pub use levenshtein::{distance, similarity};
pub use score::{search, MatchKind, SearchResult};
pub use suggest::{highlight, suggest};
