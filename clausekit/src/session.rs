//! Session context and per-line decision state.
//!
//! The session is an explicit value threaded into every collaborator call;
//! nothing here is process-wide. Decision sets are plain index collections
//! owned by the caller: the engine consumes them to decide rendering and
//! returns updated copies, it never mutates them in place.

use crate::interface::{Department, MatchResult};
use crate::normalize::is_lm7_line;
use std::collections::BTreeSet;

/// Who is working, and against which library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub department: Department,
    pub reinsurer: String,
    pub is_admin: bool,
}

/// Split pasted text into matchable lines: blank lines are dropped, and
/// leading/trailing bullet decorations are trimmed from the rest.
pub fn split_input_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.trim_matches(|c: char| matches!(c, '\u{2022}' | '\u{2013}' | '-' | ' '))
                .trim()
                .to_string()
        })
        .collect()
}

/// The reviewer's per-line choices, carried across UI steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionSets {
    /// Matched lines where the user keeps the original wording.
    pub overrides: BTreeSet<usize>,
    /// Unmatched lines the user retains anyway.
    pub keeps: BTreeSet<usize>,
}

impl DecisionSets {
    /// Initial state for a fresh analysis: nothing overridden, and LM7
    /// wording lines pre-kept so protected text survives review untouched.
    pub fn initial(lines: &[String], matches: &[Option<MatchResult>]) -> Self {
        debug_assert_eq!(lines.len(), matches.len());
        DecisionSets {
            overrides: BTreeSet::new(),
            keeps: lines
                .iter()
                .enumerate()
                .filter(|(_, line)| is_lm7_line(line))
                .map(|(idx, _)| idx)
                .collect(),
        }
    }
}
