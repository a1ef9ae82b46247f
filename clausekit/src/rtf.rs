//! Portable rich-text (RTF) serialization of the styled review list.
//!
//! The renderer emits a deliberately small styled-text vocabulary: plain
//! runs, `<br>`/`<br/>`, `&nbsp;`, and `<span style=...>` carrying the
//! highlight color and/or a line-through decoration. A hand-rolled scanner
//! with an explicit open-span stack walks each fragment, so nested and
//! malformed markup stays well-defined; any other tag is dropped.
//!
//! `normalize_exported_colors` post-processes full exported markup so word
//! processors cannot coerce the highlight color into a theme color on paste.

use crate::config::{HIGHLIGHT_HEX, HIGHLIGHT_RGB, HIGHLIGHT_RGB8};
use crate::interface::ReviewItem;
use once_cell::sync::Lazy;
use regex::Regex;

// ─────────────────────────────────────────────────────────────────────────────
// FRAGMENT SCANNER
// ─────────────────────────────────────────────────────────────────────────────

/// Styling switched on by one open span.
#[derive(Debug, Clone, Copy, Default)]
struct SpanFlags {
    colored: bool,
    struck: bool,
}

/// `color:` declarations inside a style string. The boundary guard keeps
/// `background-color` and friends from matching.
static COLOR_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(?:^|[^-a-z])color\s*:\s*([^;'"]+)"#).unwrap());

/// Whether a span's attribute text declares the highlight color, in any
/// spelling csscolorparser understands (hex or rgb triple).
fn declares_highlight_color(attrs: &str) -> bool {
    let attrs = attrs.replace("&quot;", "\"");
    COLOR_DECL.captures_iter(&attrs).any(|caps| {
        csscolorparser::parse(caps[1].trim())
            .map(|color| {
                let [r, g, b, _] = color.to_rgba8();
                (r, g, b) == HIGHLIGHT_RGB8
            })
            .unwrap_or(false)
    })
}

fn span_flags(attrs: &str) -> SpanFlags {
    SpanFlags {
        colored: declares_highlight_color(attrs),
        struck: attrs.to_lowercase().contains("line-through"),
    }
}

/// Escape the three characters reserved by RTF in plain-text runs.
fn rtf_escape(text: &str) -> String {
    text.replace('\\', r"\\").replace('{', r"\{").replace('}', r"\}")
}

/// Emit the reset controls for one popped span, innermost styling first.
fn close_span(out: &mut String, flags: SpanFlags) {
    if flags.struck {
        out.push_str(r"\strike0 ");
    }
    if flags.colored {
        out.push_str(r"\cf0 ");
    }
}

/// Convert one styled fragment into RTF control/text content (no preamble).
///
/// Scans left to right: text runs accumulate until a tag boundary and are
/// escaped on flush; `<span>` pushes flags and emits the matching switch
/// controls; `</span>` pops and resets; `<br>` becomes a newline in the
/// run; every other tag is skipped. Unclosed spans are force-closed at the
/// end of the fragment.
pub fn fragment_to_rtf(fragment: &str) -> String {
    let mut out = String::new();
    let mut run = String::new();
    let mut stack: Vec<SpanFlags> = Vec::new();

    let mut rest = fragment;
    while !rest.is_empty() {
        if let Some(stripped) = strip_entity_nbsp(rest) {
            run.push(' ');
            rest = stripped;
            continue;
        }
        if rest.starts_with('<') {
            match rest.find('>') {
                None => {
                    // Unterminated tag: treat the remainder as text.
                    run.push_str(rest);
                    rest = "";
                }
                Some(gt) => {
                    let tag = &rest[1..gt];
                    rest = &rest[gt + 1..];

                    if let Some(name) = tag.strip_prefix('/') {
                        if name.trim().eq_ignore_ascii_case("span") {
                            out.push_str(&rtf_escape(&run));
                            run.clear();
                            if let Some(flags) = stack.pop() {
                                close_span(&mut out, flags);
                            }
                        }
                        // Other closing tags are dropped.
                    } else {
                        let name_end = tag
                            .find(|c: char| c.is_whitespace() || c == '/')
                            .unwrap_or(tag.len());
                        let name = &tag[..name_end];
                        if name.eq_ignore_ascii_case("br") {
                            run.push('\n');
                        } else if name.eq_ignore_ascii_case("span") {
                            out.push_str(&rtf_escape(&run));
                            run.clear();
                            let flags = span_flags(&tag[name_end..]);
                            if flags.colored {
                                out.push_str(r"\cf1 ");
                            }
                            if flags.struck {
                                out.push_str(r"\strike ");
                            }
                            stack.push(flags);
                        }
                        // Unknown opening tags are dropped.
                    }
                }
            }
        } else {
            let next = rest
                .char_indices()
                .find(|&(_, c)| c == '<' || c == '&')
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            if next == 0 {
                // A '&' that is not &nbsp; is ordinary text.
                let mut chars = rest.chars();
                run.push(chars.next().unwrap());
                rest = chars.as_str();
            } else {
                run.push_str(&rest[..next]);
                rest = &rest[next..];
            }
        }
    }

    out.push_str(&rtf_escape(&run));
    while let Some(flags) = stack.pop() {
        close_span(&mut out, flags);
    }
    out
}

fn strip_entity_nbsp(rest: &str) -> Option<&str> {
    const ENTITY: &str = "&nbsp;";
    match rest.get(..ENTITY.len()) {
        Some(head) if head.eq_ignore_ascii_case(ENTITY) => Some(&rest[ENTITY.len()..]),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DOCUMENT BUILDER
// ─────────────────────────────────────────────────────────────────────────────

/// Build the complete portable rich-text byte stream: fixed preamble (one
/// font, two-entry color table), one bulleted paragraph per item with a
/// trailing style reset, encoded as latin-1 with out-of-range characters
/// silently dropped.
pub fn build_rtf_bullets(items: &[ReviewItem]) -> Vec<u8> {
    let (r, g, b) = HIGHLIGHT_RGB8;
    let mut doc = String::new();
    doc.push_str(r"{\rtf1\ansi\ansicpg1252\uc1\deff0");
    doc.push_str(r"{\fonttbl{\f0 Calibri;}}");
    doc.push_str(&format!(r"{{\colortbl ;\red{r}\green{g}\blue{b};}}"));
    doc.push_str(r"\viewkind4\pard\plain\ltrpar\sa0\sl0\f0\fs22");
    for item in items {
        doc.push_str(r"\par ");
        doc.push_str(r"\bullet\tab ");
        doc.push_str(&fragment_to_rtf(&item.styled_fragment));
        doc.push_str(r"\cf0\strike0 ");
    }
    doc.push('}');
    encode_latin1_lossy(&doc)
}

/// Lossy latin-1: characters above U+00FF are dropped, not errored on.
fn encode_latin1_lossy(text: &str) -> Vec<u8> {
    text.chars()
        .filter_map(|c| {
            let cp = c as u32;
            (cp <= 0xFF).then_some(cp as u8)
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// EXPORTED-COLOR NORMALIZATION
// ─────────────────────────────────────────────────────────────────────────────

static STYLE_ATTR_DQ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)style\s*=\s*"([^"]*)""#).unwrap());
static STYLE_ATTR_SQ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)style\s*=\s*'([^']*)'").unwrap());
static HEX_COLOR_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)color\s*:\s*#[0-9a-fA-F]{6}").unwrap());
static RGB_COLOR_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)color\s*:\s*rgb\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*\)").unwrap());
static FONT_COLOR_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(<font[^>]*\bcolor\s*=\s*")[^"]+(")"#).unwrap());

/// Rewrite one inline style declaration: every 6-digit-hex or rgb() color
/// becomes the canonical highlight triple, and theme-color suppression is
/// appended when absent.
fn fix_style_declaration(style: &str) -> String {
    let canonical = format!("color: {HIGHLIGHT_RGB}");
    let style = HEX_COLOR_DECL.replace_all(style, canonical.as_str());
    let mut style = RGB_COLOR_DECL.replace_all(&style, canonical.as_str()).into_owned();
    if !style.to_lowercase().contains("mso-themecolor") {
        if !style.trim_end().ends_with(';') {
            style.push(';');
        }
        style.push_str(" mso-themecolor:none; mso-themeshade:0;");
    }
    style
}

/// Normalize every inline color declaration of an exported styled-text
/// document to the canonical highlight value, and pin it against theme
/// recoloring. Legacy `<font color=...>` attributes are rewritten to the
/// canonical hex.
pub fn normalize_exported_colors(markup: &str) -> String {
    let markup = STYLE_ATTR_DQ.replace_all(markup, |caps: &regex::Captures| {
        format!("style=\"{}\"", fix_style_declaration(&caps[1]))
    });
    let markup = STYLE_ATTR_SQ.replace_all(&markup, |caps: &regex::Captures| {
        format!("style='{}'", fix_style_declaration(&caps[1]))
    });
    FONT_COLOR_ATTR
        .replace_all(&markup, format!("${{1}}{HIGHLIGHT_HEX}${{2}}").as_str())
        .into_owned()
}
