//! Static configuration: reinsurer roster, stopwords, tuned scoring
//! constants, and the custom highlight color.
//!
//! The stopword list, weights, and threshold are tuned values carried over
//! from production use; change them only with domain sign-off.

use crate::interface::Department;
use once_cell::sync::Lazy;
use std::collections::HashSet;

// ─────────────────────────────────────────────────────────────────────────────
// SCORING
// ─────────────────────────────────────────────────────────────────────────────

/// Weight for each line token found in the clause's name+keyword pool.
pub const POOL_WEIGHT: u32 = 10;
/// Extra weight for each line token found in the clause name itself.
pub const NAME_WEIGHT: u32 = 5;
/// Minimum accepted score: one keyword-only hit qualifies, weaker signals
/// do not.
pub const MATCH_THRESHOLD: u32 = 10;

/// De-emphasized words: timing/notice boilerplate plus generic insurance
/// terms that would otherwise dominate the overlap counts.
pub static COMMON_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "and", "or", "of", "the", "clause", "limit", "value", "in", "property", "policy",
        "insured", "insurance", "company", "be", "is", "are", "to", "for", "on", "by", "with",
        "at", "an", "a", "as", "it", "this", "that", "shall", "may", "each",
        // timing/notice boilerplate
        "day", "days", "notice", "within", "period", "time", "any", "event", "request",
        "portion", "been", "force", "subject", "also", "terms", "agreement", "applicable",
        "provided", "always", "no", "refund", "allowed", "upon",
        // frequent fillers
        "per", "up", "such", "but", "not", "from", "last", "known", "address", "letter",
        "registered", "adjusted", "pro", "rata", "short", "long", "term", "if", "has",
        "under", "cost", "costs", "loss",
    ]
    .into_iter()
    .collect()
});

// ─────────────────────────────────────────────────────────────────────────────
// COLORS
// ─────────────────────────────────────────────────────────────────────────────

/// Highlight color for autocompleted/struck text, as written into span
/// styles.
pub const HIGHLIGHT_HEX: &str = "#6EADFF";
/// The same color as an rgb() triple; canonical form for exported markup.
pub const HIGHLIGHT_RGB: &str = "rgb(110,173,255)";
/// The same color as raw components, for the RTF color table and for
/// recognizing the color in any spelling.
pub const HIGHLIGHT_RGB8: (u8, u8, u8) = (110, 173, 255);
/// Grey for the "Matched on:" metadata line.
pub const META_GREY: &str = "#9aa0a6";

// ─────────────────────────────────────────────────────────────────────────────
// DEPARTMENTS
// ─────────────────────────────────────────────────────────────────────────────

/// Reinsurers a department can load clause libraries for. Administration has
/// none (admin console instead of clause checking).
pub fn reinsurers_for(department: Department) -> &'static [&'static str] {
    match department {
        Department::Property => &["Zurich", "QBE", "SwiftRE"],
        Department::Liability => &["Kiln", "QBE", "SwiftRE"],
        Department::LifeMedical => &["Zurich", "QBE", "SwiftRE"],
        Department::FinancialLines => &["Zurich", "QBE", "SwiftRE"],
        Department::ProfessionalIndemnity => &["Zurich", "QBE", "SwiftRE"],
        Department::Administration => &[],
    }
}
