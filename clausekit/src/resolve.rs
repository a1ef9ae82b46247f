//! Cross-line resolution: one winner per clause uniqueness key.
//!
//! Scoring alone can hand the same clause to several lines. The resolver
//! keeps the match only on the single best-scoring line per clause identity
//! and demotes every other line to no-match, whatever its own score was.

use crate::interface::{Clause, Department, MatchResult};
use crate::matching::{score_line, ClausePool};
use std::collections::HashMap;

/// The identity a matched clause is deduplicated by: name alone for
/// Liability, (name, limit) for every other department.
fn uniqueness_key(department: Department, clause: &Clause) -> (String, Option<String>) {
    if department.uses_name_only_key() {
        (clause.name.clone(), None)
    } else {
        (
            clause.name.clone(),
            Some(clause.limit.clone().unwrap_or_default()),
        )
    }
}

/// Score every line against the library, then enforce global uniqueness.
///
/// The winner for a key is the line with the strictly highest score; on an
/// exact tie the earliest input line keeps the match. Output length always
/// equals input length, and neither the lines nor the library are mutated.
pub fn best_unique_matches(
    lines: &[String],
    clauses: &[Clause],
    department: Department,
) -> Vec<Option<MatchResult>> {
    let pools = ClausePool::build_all(clauses);
    let results: Vec<Option<MatchResult>> = lines
        .iter()
        .map(|line| score_line(line, clauses, &pools))
        .collect();

    // (winning line index, winning score) per uniqueness key
    let mut best_for_key: HashMap<(String, Option<String>), (usize, u32)> = HashMap::new();
    for (idx, result) in results.iter().enumerate() {
        if let Some(m) = result {
            let key = uniqueness_key(department, &clauses[m.clause]);
            match best_for_key.get(&key) {
                Some(&(_, best_score)) if m.score <= best_score => {}
                _ => {
                    best_for_key.insert(key, (idx, m.score));
                }
            }
        }
    }

    results
        .into_iter()
        .enumerate()
        .map(|(idx, result)| {
            result.filter(|m| {
                let key = uniqueness_key(department, &clauses[m.clause]);
                best_for_key[&key].0 == idx
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(name: &str, keywords: &[&str], limit: Option<&str>) -> Clause {
        Clause {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            limit: limit.map(|l| l.to_string()),
            description: None,
        }
    }

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_output_length_matches_input_length() {
        let clauses = vec![clause("War Exclusion", &["war"], None)];
        let input = lines(&["war risk", "", "nothing here"]);
        let out = best_unique_matches(&input, &clauses, Department::Property);
        assert_eq!(out.len(), input.len());
    }

    #[test]
    fn test_higher_score_wins_shared_key() {
        // Same clause, same (name, limit) key; 15 beats 10.
        let clauses = vec![clause("Storm Exclusion", &["flood"], Some("USD 1M"))];
        let input = lines(&["storm damage reported", "flood damage reported"]);
        let out = best_unique_matches(&input, &clauses, Department::Property);

        let m0 = out[0].expect("line 0 should keep the match");
        assert_eq!(m0.score, 15); // pool hit + name hit
        assert_eq!(out[1], None, "lower-scoring line is demoted");
    }

    #[test]
    fn test_equal_scores_keep_earliest_line() {
        let clauses = vec![clause("Storm Exclusion", &[], None)];
        let input = lines(&["storm season", "storm warning"]);
        let out = best_unique_matches(&input, &clauses, Department::Property);
        assert!(out[0].is_some(), "earliest line retains the match on a tie");
        assert_eq!(out[1], None);
    }

    #[test]
    fn test_liability_keys_on_name_only() {
        // Two clauses, same name, different limits. Under Liability they
        // share one key, so only one line may keep a match.
        let clauses = vec![
            clause("Machinery Wording", &["machinery"], Some("USD 1M")),
            clause("Machinery Wording", &["turbine"], Some("USD 5M")),
        ];
        let input = lines(&["machinery breakdown", "turbine machinery failure"]);

        let liability = best_unique_matches(&input, &clauses, Department::Liability);
        let kept: Vec<_> = liability.iter().filter(|m| m.is_some()).collect();
        assert_eq!(kept.len(), 1, "one winner per name under Liability");

        // Property keys on (name, limit): both limits may win independently.
        let property = best_unique_matches(&input, &clauses, Department::Property);
        let kept: Vec<_> = property.iter().filter(|m| m.is_some()).collect();
        assert_eq!(kept.len(), 2, "distinct limits are distinct keys elsewhere");
    }

    #[test]
    fn test_distinct_keys_unaffected() {
        let clauses = vec![
            clause("War Exclusion", &["war"], None),
            clause("Flood Exclusion", &["flood"], None),
        ];
        let input = lines(&["war risk noted", "flood risk noted"]);
        let out = best_unique_matches(&input, &clauses, Department::Property);
        assert!(out[0].is_some());
        assert!(out[1].is_some());
        assert_ne!(out[0].unwrap().clause, out[1].unwrap().clause);
    }

    #[test]
    fn test_empty_library_yields_all_none() {
        let input = lines(&["war risk", "flood risk"]);
        let out = best_unique_matches(&input, &[], Department::Liability);
        assert!(out.iter().all(|m| m.is_none()));
    }

    #[test]
    fn test_pure_function_repeatable() {
        let clauses = vec![clause("War Exclusion", &["war", "hostilities"], None)];
        let input = lines(&["war and hostilities excluded", "unrelated remark"]);
        let first = best_unique_matches(&input, &clauses, Department::Liability);
        let second = best_unique_matches(&input, &clauses, Department::Liability);
        assert_eq!(first, second);
    }
}
