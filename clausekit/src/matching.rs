//! Weighted token-overlap scoring of input lines against a clause library.
//!
//! Name tokens count twice: once through the combined name+keyword pool and
//! once on their own, so lines that echo the clause name outrank lines that
//! only graze its keywords.

use crate::config::{COMMON_STOPWORDS, MATCH_THRESHOLD, NAME_WEIGHT, POOL_WEIGHT};
use crate::interface::{Clause, MatchResult};
use crate::normalize::{is_protected_line, token_set};
use std::collections::BTreeSet;

/// Token sets derived from one clause, built once per matching run and
/// shared across all lines (the derived state never changes while the
/// library is alive).
#[derive(Debug, Clone)]
pub(crate) struct ClausePool {
    pub(crate) name_tokens: BTreeSet<String>,
    /// name tokens plus keyword tokens
    pub(crate) pool: BTreeSet<String>,
}

impl ClausePool {
    pub(crate) fn build(clause: &Clause) -> Self {
        let name_tokens = token_set(&clause.name, &COMMON_STOPWORDS);
        let mut pool = token_set(&clause.keywords.join(" "), &COMMON_STOPWORDS);
        pool.extend(name_tokens.iter().cloned());
        Self { name_tokens, pool }
    }

    pub(crate) fn build_all(clauses: &[Clause]) -> Vec<ClausePool> {
        clauses.iter().map(ClausePool::build).collect()
    }
}

/// Score one line against prepared clause pools.
///
/// Protected lines and lines whose token set is empty never match. A
/// candidate replaces the current best on a strictly higher score, or on an
/// equal score when its name is strictly shorter (more specific). The best
/// candidate is accepted only at `MATCH_THRESHOLD` or above.
pub(crate) fn score_line(
    line: &str,
    clauses: &[Clause],
    pools: &[ClausePool],
) -> Option<MatchResult> {
    if is_protected_line(line) {
        return None;
    }
    let words = token_set(line, &COMMON_STOPWORDS);
    if words.is_empty() {
        return None;
    }

    let mut best: Option<MatchResult> = None;
    for (idx, pool) in pools.iter().enumerate() {
        let overlap = words.intersection(&pool.pool).count() as u32;
        let name_overlap = words.intersection(&pool.name_tokens).count() as u32;
        let score = POOL_WEIGHT * overlap + NAME_WEIGHT * name_overlap;

        let replaces = match &best {
            None => score > 0,
            Some(b) => {
                score > b.score
                    || (score == b.score
                        && clauses[idx].name.chars().count()
                            < clauses[b.clause].name.chars().count())
            }
        };
        if replaces {
            best = Some(MatchResult { clause: idx, score });
        }
    }

    best.filter(|b| b.score >= MATCH_THRESHOLD)
}

/// Score one line against the whole library. Returns the best clause and
/// its score, or `None` when nothing reaches the acceptance threshold.
pub fn match_clause_with_score(line: &str, clauses: &[Clause]) -> Option<MatchResult> {
    let pools = ClausePool::build_all(clauses);
    score_line(line, clauses, &pools)
}
