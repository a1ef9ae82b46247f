//! Word-level highlight rendering of autocompleted clause text.
//!
//! Words of the clause's display text that the user's line did not already
//! contain (allowing plural variation and trailing punctuation) are wrapped
//! in highlight-color spans, so the reviewer sees exactly what the
//! autocomplete inserted.

use crate::config::{COMMON_STOPWORDS, HIGHLIGHT_HEX, META_GREY};
use crate::interface::Clause;
use crate::matching::ClausePool;
use crate::normalize::{clean_text, singularize, token_set};
use std::collections::HashSet;

const TRAILING_PUNCT: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Tokens shared by the line and the clause's name+keyword pool, sorted
/// alphabetically. Display metadata only, not used for scoring.
pub fn matched_tokens(line: &str, clause: &Clause) -> Vec<String> {
    let words = token_set(line, &COMMON_STOPWORDS);
    let pool = ClausePool::build(clause);
    words.intersection(&pool.pool).cloned().collect()
}

/// How a clause is rendered: the name alone, or "name – limit" when a
/// limit is present. Uniform across departments.
pub fn clause_display_text(clause: &Clause) -> String {
    let name = clause.name.trim();
    let limit = clause.limit_str();
    if limit.is_empty() {
        name.to_string()
    } else {
        format!("{name} \u{2013} {limit}")
    }
}

/// Wrap each word of `display_text` that is absent from `line` (after
/// punctuation stripping and singularization) in a highlight span. Word
/// order and surface forms of `display_text` are preserved; words are
/// re-joined with single spaces. When every word is already present the
/// result contains no spans at all.
pub fn highlight_autocompleted(line: &str, display_text: &str) -> String {
    let reference: HashSet<String> = clean_text(line)
        .split_whitespace()
        .map(|t| singularize(t.trim_end_matches(TRAILING_PUNCT)))
        .collect();

    display_text
        .split_whitespace()
        .map(|word| {
            let reduced = singularize(word.trim_end_matches(TRAILING_PUNCT));
            if reference.contains(&reduced) {
                word.to_string()
            } else {
                format!("<span style='color:{HIGHLIGHT_HEX};'>{word}</span>")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Grey "Matched on: …" metadata fragment shown under matched rows; empty
/// when there are no tokens.
pub fn meta_line(tokens: &[String]) -> String {
    if tokens.is_empty() {
        return String::new();
    }
    format!(
        "<div style='color:{META_GREY}; font-size:11px; margin-top:2px;'>Matched on: {}</div>",
        tokens.join(", ")
    )
}
