//! Text normalization and tokenization for clause matching.
//!
//! Purely morphological: curly-quote folding, NFKD decomposition, a light
//! suffix-based singularizer, and a fixed stopword filter. No synonyms, no
//! dictionary. Also hosts the protected-wording detectors for lines that
//! must never be auto-matched.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use unicode_normalization::UnicodeNormalization;

// ─────────────────────────────────────────────────────────────────────────────
// PROTECTED WORDING
// ─────────────────────────────────────────────────────────────────────────────

/// "LM7" in any spelling: optional space/hyphen between "LM" and "7".
static LM7_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\blm[\s\-]*7\b").unwrap());

/// "Payment Warranty" allowing a hyphen or slash between the words.
static PAYMENT_WARRANTY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bpayment\s*[-/]?\s*warranty\b").unwrap());

/// The standalone word "temporary".
static TEMPORARY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\btemporary\b").unwrap());

pub fn is_lm7_line(text: &str) -> bool {
    LM7_PATTERN.is_match(text)
}

pub fn is_payment_warranty_line(text: &str) -> bool {
    PAYMENT_WARRANTY_PATTERN.is_match(text)
}

pub fn is_temporary_line(text: &str) -> bool {
    TEMPORARY_PATTERN.is_match(text)
}

/// A protected line is never matched against the library, regardless of
/// token overlap.
pub fn is_protected_line(text: &str) -> bool {
    is_lm7_line(text) || is_temporary_line(text) || is_payment_warranty_line(text)
}

// ─────────────────────────────────────────────────────────────────────────────
// CLEANING AND TOKENIZATION
// ─────────────────────────────────────────────────────────────────────────────

/// Fold curly quotes to straight equivalents, NFKD-decompose, lowercase,
/// and replace every non-alphanumeric, non-whitespace character with a
/// space. Total over any input, including the empty string.
pub fn clean_text(text: &str) -> String {
    let straightened = text
        .replace(['\u{2019}', '\u{2018}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"");
    straightened
        .nfkd()
        .flat_map(char::to_lowercase)
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Light plural-to-singular reduction. Suffix rules only:
/// `policies` -> `policy`, `clauses` -> `clause`, `errors` -> `error`,
/// but `loss` stays `loss`. Tokens of length 3 or less pass through.
pub fn singularize(token: &str) -> String {
    let t = token.to_lowercase();
    let n = t.chars().count();
    if n <= 3 {
        return t;
    }
    if t.ends_with("ies") && n > 4 {
        return format!("{}y", &t[..t.len() - 3]);
    }
    for suffix in ["sses", "xes", "zes", "ches", "shes"] {
        if t.ends_with(suffix) {
            return t[..t.len() - 2].to_string();
        }
    }
    if t.ends_with("es")
        && !t.ends_with("aes")
        && !t.ends_with("ees")
        && !t.ends_with("oes")
        && n > 4
    {
        return t[..t.len() - 2].to_string();
    }
    if t.ends_with('s') && !t.ends_with("ss") {
        return t[..t.len() - 1].to_string();
    }
    t
}

/// Tokenize cleaned text into a set: split on whitespace, drop purely
/// numeric tokens, drop tokens of length 2 or less, singularize, drop
/// stopwords.
pub fn token_set(text: &str, stopwords: &HashSet<&str>) -> BTreeSet<String> {
    clean_text(text)
        .split_whitespace()
        .filter(|w| !w.chars().all(char::is_numeric))
        .filter(|w| w.chars().count() > 2)
        .map(singularize)
        .filter(|w| !stopwords.contains(w.as_str()))
        .collect()
}
