//! Clause library loading, keyed by (department, reinsurer).
//!
//! Libraries are plain JSON files on a shared drive maintained by the
//! departments. A missing, unreadable, or malformed file is an empty
//! library, never an error: every line then simply scores no-match.

use crate::config;
use crate::interface::{Clause, Department};
use std::fs;
use std::path::{Path, PathBuf};

/// Map (department, reinsurer) to the expected library file under `root`,
/// following the `<Dept>/<Dept>_<Reinsurer>.json` layout. Departments
/// without clause files (or unknown reinsurers) have no path.
pub fn clause_json_path(
    root: &Path,
    department: Department,
    reinsurer: &str,
) -> Option<PathBuf> {
    let dir = match department {
        Department::Property => "Property",
        Department::Liability => "Liability",
        _ => return None,
    };
    if !config::reinsurers_for(department).iter().any(|r| *r == reinsurer) {
        return None;
    }
    Some(root.join(dir).join(format!("{dir}_{reinsurer}.json")))
}

/// Read one library file. Any failure yields an empty library and a
/// warning in the log.
pub fn load_clauses(path: &Path) -> Vec<Clause> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("clause library unreadable at {}: {err}", path.display());
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(clauses) => clauses,
        Err(err) => {
            log::warn!("clause library malformed at {}: {err}", path.display());
            Vec::new()
        }
    }
}

/// Resolve the path for (department, reinsurer) and load it; unknown pairs
/// yield an empty library.
pub fn load_for(root: &Path, department: Department, reinsurer: &str) -> Vec<Clause> {
    clause_json_path(root, department, reinsurer)
        .map(|p| load_clauses(&p))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_layout() {
        let p = clause_json_path(Path::new("/data"), Department::Property, "Zurich").unwrap();
        assert_eq!(p, Path::new("/data/Property/Property_Zurich.json"));
        let p = clause_json_path(Path::new("/data"), Department::Liability, "Kiln").unwrap();
        assert_eq!(p, Path::new("/data/Liability/Liability_Kiln.json"));
    }

    #[test]
    fn test_unknown_reinsurer_has_no_path() {
        assert_eq!(clause_json_path(Path::new("/data"), Department::Property, "Kiln"), None);
        assert_eq!(clause_json_path(Path::new("/data"), Department::Liability, "Zurich"), None);
    }

    #[test]
    fn test_departments_without_files_have_no_path() {
        assert_eq!(clause_json_path(Path::new("/data"), Department::FinancialLines, "QBE"), None);
        assert_eq!(clause_json_path(Path::new("/data"), Department::Administration, "QBE"), None);
    }

    #[test]
    fn test_missing_file_is_empty_library() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_clauses(&dir.path().join("nope.json")).is_empty());
    }

    #[test]
    fn test_malformed_file_is_empty_library() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load_clauses(&path).is_empty());
    }

    #[test]
    fn test_well_formed_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ok.json");
        fs::write(
            &path,
            r#"[
                {"Name of Clause": "War Exclusion", "Keywords": ["war", "hostilities"], "Limit": ""},
                {"Name of Clause": "Storm Exclusion", "Keywords": ["storm"], "Limit": "USD 1M"}
            ]"#,
        )
        .unwrap();
        let clauses = load_clauses(&path);
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].name, "War Exclusion");
        assert_eq!(clauses[1].limit_str(), "USD 1M");
    }

    #[test]
    fn test_load_for_unknown_pair_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_for(dir.path(), Department::ProfessionalIndemnity, "QBE").is_empty());
    }
}
