//! ClauseKit - clause matching and rich-text rendering for reinsurance
//! clause review.
//!
//! Free-text clause lines are normalized and scored against a
//! department/reinsurer clause library using weighted token overlap.
//! Matches are resolved to one winner per clause identity across the whole
//! input, rendered with word-level insert highlighting, and serialized to
//! portable RTF for word-processor clipboards.
//!
//! All engine functions are synchronous, side-effect-free transformations
//! over immutable inputs; the only I/O lives in `library` (reading clause
//! files) and `audit` (the usage log).

pub mod audit;
pub mod config;
pub mod highlight;
pub mod interface;
pub mod library;
pub mod matching;
pub mod normalize;
pub mod registry;
pub mod render;
pub mod resolve;
pub mod rtf;
pub mod session;

pub use interface::*;
