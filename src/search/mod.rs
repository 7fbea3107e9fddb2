//! Ranked fuzzy search over employees and skill labels.
//!
//! # Architecture
//!
//! 1. **Scorer** - case-insensitive substring / subsequence score in `[0, 1]`
//! 2. **Engine** - scores names, titles and distinct skills, boosts by
//!    source, de-duplicates, sorts and caps
//! 3. **Navigation** - dropdown state machine driven by Down/Up/Enter/Escape

mod engine;
mod fuzzy;
pub mod navigation;

pub use engine::{ResultKind, SearchEngine, SearchResult, search, skill_pool};
pub use fuzzy::{fuzzy_score, is_subsequence};
pub use navigation::{NavKey, NavState, SearchBox, Selection, SelectionHandler};
