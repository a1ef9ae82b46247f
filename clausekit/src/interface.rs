//! Shared types for the clause engine.
//!
//! This module is the source of truth for the records exchanged between the
//! engine and its collaborators (library files, review UI, clipboard/export).

use serde::Deserialize;

// ═══════════════════════════════════════════════════════════════════════════════
// ENUMS
// ═══════════════════════════════════════════════════════════════════════════════

/// Insurance department a session operates under.
///
/// The display names match the clause library directory layout and must not
/// be reworded without migrating the library files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Property,
    Liability,
    LifeMedical,
    FinancialLines,
    ProfessionalIndemnity,
    Administration,
}

impl Department {
    pub const ALL: &'static [Department] = &[
        Department::Property,
        Department::Liability,
        Department::LifeMedical,
        Department::FinancialLines,
        Department::ProfessionalIndemnity,
        Department::Administration,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Department::Property => "Property / Special Risks",
            Department::Liability => "Liability",
            Department::LifeMedical => "Life / PA & Medical",
            Department::FinancialLines => "Financial Lines",
            Department::ProfessionalIndemnity => "PI",
            Department::Administration => "Administration",
        }
    }

    pub fn from_name(name: &str) -> Option<Department> {
        Department::ALL
            .iter()
            .copied()
            .find(|d| d.display_name() == name.trim())
    }

    /// Liability deduplicates matched clauses by name alone; every other
    /// department keys on (name, limit).
    pub fn uses_name_only_key(&self) -> bool {
        matches!(self, Department::Liability)
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Final per-line state after matching and user review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDecision {
    /// Clause matched and the clause's display text replaces the line.
    MatchedAutocomplete { clause: usize },
    /// Clause matched but the user kept their original wording.
    MatchedOverride { clause: usize },
    /// No clause matched; the user retained the original line.
    UnmatchedKept,
    /// No clause matched; the line is dropped (rendered struck-through).
    UnmatchedRejected,
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS
// ═══════════════════════════════════════════════════════════════════════════════

/// One clause library entry. Immutable for the lifetime of a matching
/// session. Multiple clauses may share a name (differing by limit).
///
/// The serde field names follow the external library file format.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Clause {
    #[serde(rename = "Name of Clause")]
    pub name: String,
    #[serde(rename = "Keywords", default)]
    pub keywords: Vec<String>,
    #[serde(rename = "Limit", default)]
    pub limit: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

impl Clause {
    /// The limit with surrounding whitespace removed; empty when absent.
    pub fn limit_str(&self) -> &str {
        self.limit.as_deref().unwrap_or("").trim()
    }

    pub fn description_str(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// A scored match for one input line: index into the library slice the line
/// was scored against, plus the weighted overlap score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub clause: usize,
    pub score: u32,
}

/// One entry of the rendered final list, handed to the clipboard/export
/// collaborator. `styled_fragment` uses the restricted vocabulary the RTF
/// serializer understands.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewItem {
    pub name: String,
    pub styled_fragment: String,
    pub description: String,
    pub decision: LineDecision,
}
