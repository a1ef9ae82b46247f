//! Final-list rendering: per-line decisions turned into styled review
//! items, the bulleted document, and the descriptions pane.
//!
//! The fragments produced here stay inside the restricted vocabulary the
//! RTF serializer understands (plain runs, highlight spans, line-through
//! spans).

use crate::config::HIGHLIGHT_HEX;
use crate::highlight::{clause_display_text, highlight_autocompleted};
use crate::interface::{Clause, LineDecision, MatchResult, ReviewItem};
use crate::session::DecisionSets;

/// Combine match results with the reviewer's choices into final per-line
/// decisions. Output order and length follow the input lines.
pub fn decide_lines(
    matches: &[Option<MatchResult>],
    decisions: &DecisionSets,
) -> Vec<LineDecision> {
    matches
        .iter()
        .enumerate()
        .map(|(idx, m)| match m {
            Some(m) if decisions.overrides.contains(&idx) => {
                LineDecision::MatchedOverride { clause: m.clause }
            }
            Some(m) => LineDecision::MatchedAutocomplete { clause: m.clause },
            None if decisions.keeps.contains(&idx) => LineDecision::UnmatchedKept,
            None => LineDecision::UnmatchedRejected,
        })
        .collect()
}

/// Build one styled review item per line:
/// autocompleted lines show the clause display text with inserted words
/// highlighted; overridden and kept lines show the original wording plain;
/// rejected lines are struck through in the highlight color.
pub fn build_review_items(
    lines: &[String],
    clauses: &[Clause],
    matches: &[Option<MatchResult>],
    decisions: &DecisionSets,
) -> Vec<ReviewItem> {
    decide_lines(matches, decisions)
        .into_iter()
        .zip(lines)
        .map(|(decision, line)| match decision {
            LineDecision::MatchedAutocomplete { clause } => {
                let c = &clauses[clause];
                ReviewItem {
                    name: c.name.clone(),
                    styled_fragment: highlight_autocompleted(line, &clause_display_text(c)),
                    description: c.description_str().to_string(),
                    decision,
                }
            }
            LineDecision::MatchedOverride { clause } => {
                let c = &clauses[clause];
                ReviewItem {
                    name: c.name.clone(),
                    styled_fragment: line.clone(),
                    description: c.description_str().to_string(),
                    decision,
                }
            }
            LineDecision::UnmatchedKept => ReviewItem {
                name: line.clone(),
                styled_fragment: line.clone(),
                description: String::new(),
                decision,
            },
            LineDecision::UnmatchedRejected => ReviewItem {
                name: line.clone(),
                styled_fragment: format!(
                    "<span style='color:{HIGHLIGHT_HEX}; text-decoration: line-through;'>{line}</span>"
                ),
                description: String::new(),
                decision,
            },
        })
        .collect()
}

/// The bulleted list document handed to the markup side of the clipboard
/// collaborator (Calibri 11pt, tight list spacing).
pub fn bulleted_html(items: &[ReviewItem]) -> String {
    let list: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", item.styled_fragment))
        .collect();
    format!(
        "<div style='font-family: Calibri; font-size: 11pt;'>\
         <ul style='margin-top:0.25em; margin-left:1.2em; padding-left:0.8em; line-height:1.35;'>\
         {list}\
         </ul>\
         </div>"
    )
}

/// The descriptions pane: bold clause name plus its description for every
/// non-rejected item that has one.
pub fn descriptions_html(items: &[ReviewItem]) -> String {
    let blocks: Vec<String> = items
        .iter()
        .filter(|item| {
            !item.description.is_empty()
                && !matches!(item.decision, LineDecision::UnmatchedRejected)
        })
        .map(|item| {
            format!(
                "<b>{}</b><br>{}",
                escape_html(&item.name),
                escape_html(&item.description).replace('\n', "<br>")
            )
        })
        .collect();
    format!(
        "<div style='font-family: Calibri; font-size: 11pt; line-height:1.35;'>{}</div>",
        blocks.join("<br><br>")
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
