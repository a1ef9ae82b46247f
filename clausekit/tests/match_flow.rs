//! End-to-end matching flow: library file on disk, line splitting, scoring,
//! global uniqueness, decisions, and rendering.

use clausekit::highlight::matched_tokens;
use clausekit::interface::{Department, LineDecision};
use clausekit::library::{clause_json_path, load_clauses};
use clausekit::render::{build_review_items, decide_lines};
use clausekit::resolve::best_unique_matches;
use clausekit::session::{split_input_lines, DecisionSets};
use std::fs;

fn write_library(dir: &std::path::Path, department: Department, reinsurer: &str, json: &str) {
    let path = clause_json_path(dir, department, reinsurer).unwrap();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, json).unwrap();
}

#[test]
fn liability_end_to_end_scenario() {
    let dir = tempfile::tempdir().unwrap();
    write_library(
        dir.path(),
        Department::Liability,
        "Kiln",
        r#"[{"Name of Clause": "War Exclusion", "Keywords": ["war", "hostilities"], "Limit": ""}]"#,
    );

    let clauses = load_clauses(
        &clause_json_path(dir.path(), Department::Liability, "Kiln").unwrap(),
    );
    assert_eq!(clauses.len(), 1);

    let lines = split_input_lines("\u{2022} War and hostilities excluded\n- Unrelated remark\n");
    assert_eq!(lines, vec!["War and hostilities excluded", "Unrelated remark"]);

    let matches = best_unique_matches(&lines, &clauses, Department::Liability);
    let m0 = matches[0].expect("line 0 matches War Exclusion");
    assert_eq!(m0.clause, 0);
    assert!(m0.score >= 10);
    assert_eq!(matches[1], None);

    assert_eq!(
        matched_tokens(&lines[0], &clauses[0]),
        vec!["hostility", "war"]
    );

    let decisions = DecisionSets::initial(&lines, &matches);
    let final_states = decide_lines(&matches, &decisions);
    assert_eq!(final_states[0], LineDecision::MatchedAutocomplete { clause: 0 });
    assert_eq!(final_states[1], LineDecision::UnmatchedRejected);

    let items = build_review_items(&lines, &clauses, &matches, &decisions);
    assert_eq!(items.len(), lines.len());
    // "War" was already in the line; "Exclusion" is an insert and gets the
    // highlight span.
    assert!(items[0].styled_fragment.starts_with("War <span"));
    assert!(items[0].styled_fragment.contains("Exclusion</span>"));
    assert!(items[1].styled_fragment.contains("line-through"));
}

#[test]
fn global_uniqueness_higher_score_retained() {
    // Two lines matching one clause identity under Property / Special Risks:
    // the 15-point line keeps the match, the 10-point line is demoted.
    let clauses: Vec<clausekit::Clause> = serde_json::from_str(
        r#"[{"Name of Clause": "Storm Exclusion", "Keywords": ["flood"], "Limit": "USD 1M"}]"#,
    )
    .unwrap();

    let lines = vec![
        "storm damage reported".to_string(),
        "flood damage reported".to_string(),
    ];
    let matches = best_unique_matches(&lines, &clauses, Department::Property);

    assert_eq!(matches[0].unwrap().score, 15);
    assert_eq!(matches[1], None);
    assert_eq!(
        matches.iter().filter(|m| m.is_some()).count(),
        1,
        "exactly one winner per uniqueness key"
    );
}

#[test]
fn protected_phrases_veto_strong_overlap() {
    // The library would otherwise score these lines well above threshold.
    let clauses: Vec<clausekit::Clause> = serde_json::from_str(
        r#"[{"Name of Clause": "Payment Wording", "Keywords": ["payment", "warranty", "temporary", "lm7"]}]"#,
    )
    .unwrap();

    for line in [
        "LM7 applies",
        "LM-7 applies",
        "payment warranty applies",
        "payment/warranty applies",
        "temporary cover requested",
    ] {
        let matches =
            best_unique_matches(&[line.to_string()], &clauses, Department::Liability);
        assert_eq!(matches[0], None, "protected line {line:?} must not match");
    }
}

#[test]
fn lm7_lines_preseed_keep_set() {
    let lines = split_input_lines("subject to LM7 wording\nwar exclusion applies\n");
    let matches = best_unique_matches(&lines, &[], Department::Liability);
    let decisions = DecisionSets::initial(&lines, &matches);

    let states = decide_lines(&matches, &decisions);
    assert_eq!(states[0], LineDecision::UnmatchedKept, "LM7 line kept untouched");
    assert_eq!(states[1], LineDecision::UnmatchedRejected);
}

#[test]
fn unreadable_library_means_no_matches_not_errors() {
    let dir = tempfile::tempdir().unwrap();
    write_library(dir.path(), Department::Property, "QBE", "{ definitely not json");

    let clauses = load_clauses(
        &clause_json_path(dir.path(), Department::Property, "QBE").unwrap(),
    );
    assert!(clauses.is_empty());

    let lines = vec!["war exclusion".to_string()];
    let matches = best_unique_matches(&lines, &clauses, Department::Property);
    assert_eq!(matches, vec![None]);
}
