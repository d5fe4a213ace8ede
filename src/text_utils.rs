/*!
 * Text normalization helpers shared by the aligner, the splitter and the
 * consistency checker.
 *
 * All lengths in this crate are counted in unicode code points, never bytes.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker used by the translation source for a blank original line
pub const BLANK_LINE_MARKER: &str = "[]";

// @const: Any run of whitespace
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// @const: Whitespace before closing punctuation
static SPACE_BEFORE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s([,:;!?.)\]])").unwrap());

/// Canonicalize raw text: double quotes become single quotes, whitespace runs
/// collapse to one space and closing punctuation is glued to the preceding word.
pub fn prepare_string(text: &str) -> String {
    let quoted = text.replace('"', "'");
    let collapsed = WHITESPACE_RUN.replace_all(&quoted, " ");
    let glued = SPACE_BEFORE_PUNCT.replace_all(&collapsed, "$1");
    glued.trim().to_string()
}

/// Number of unicode code points in `text`
pub fn rune_len(text: &str) -> usize {
    text.chars().count()
}

/// Number of whitespace-delimited words in `text`
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Join two strings with a single space, skipping empty strings and blank-line markers
pub fn concat_with_space(first: &str, second: &str) -> String {
    let first_empty = first.is_empty() || first == BLANK_LINE_MARKER;
    let second_empty = second.is_empty() || second == BLANK_LINE_MARKER;
    match (first_empty, second_empty) {
        (true, true) => String::new(),
        (true, false) => second.to_string(),
        (false, true) => first.to_string(),
        (false, false) => format!("{} {}", first, second),
    }
}

/// Join a sequence of strings with single spaces, skipping empty entries
pub fn join_strings<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join lines the way the translation source expects them: one space between
/// lines and a `[]` marker for every blank line.
pub fn join_lines_with_brackets<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|l| {
            let l = l.as_ref().trim();
            if l.is_empty() { BLANK_LINE_MARKER } else { l }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove standalone `[]` markers from a text, keeping single spacing
pub fn strip_blank_markers(text: &str) -> String {
    text.split_whitespace()
        .filter(|w| *w != BLANK_LINE_MARKER)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonical form used when comparing two textual views for equality.
///
/// Blank-line markers collapse to a space, then the text is prepared and lowercased.
pub fn normalize_for_comparison(text: &str) -> String {
    prepare_string(&text.replace(BLANK_LINE_MARKER, " ")).to_lowercase()
}

/// Split `text` after its first `n` words.
///
/// Returns `(head, tail)`, both trimmed. When `text` has `n` words or fewer the
/// whole text is the head.
pub fn split_words_front(text: &str, n: usize) -> (&str, &str) {
    if n == 0 {
        return ("", text.trim());
    }
    let mut seen = 0;
    let mut in_word = false;
    for (idx, c) in text.char_indices() {
        if c.is_whitespace() {
            if in_word {
                seen += 1;
                in_word = false;
                if seen == n {
                    return (text[..idx].trim(), text[idx..].trim());
                }
            }
        } else {
            in_word = true;
        }
    }
    (text.trim(), "")
}

/// Split `text` before its last `n` words.
///
/// Returns `(head, tail)` where `tail` holds the last `n` words, both trimmed.
pub fn split_words_back(text: &str, n: usize) -> (&str, &str) {
    if n == 0 {
        return (text.trim(), "");
    }
    let mut seen = 0;
    let mut in_word = false;
    for (idx, c) in text.char_indices().rev() {
        if c.is_whitespace() {
            if in_word {
                seen += 1;
                in_word = false;
                if seen == n {
                    let cut = idx + c.len_utf8();
                    return (text[..cut].trim(), text[cut..].trim());
                }
            }
        } else {
            in_word = true;
        }
    }
    ("", text.trim())
}

/// Pick whichever candidate has a length closer to `target`.
///
/// The longer candidate wins ties and is always used when the shorter one is
/// empty. Returns the chosen string and its excess (`len - target`).
pub fn closest_not_empty<'a>(target: f64, shorter: &'a str, longer: &'a str) -> (&'a str, f64) {
    let len_short = rune_len(shorter) as f64;
    let len_long = rune_len(longer) as f64;
    if !shorter.is_empty() && (target - len_short).abs() < (target - len_long).abs() {
        (shorter, len_short - target)
    } else {
        (longer, len_long - target)
    }
}

/// Pad or truncate `text` to exactly `width` code points, marking truncation with `...`
pub fn fit_to_width(text: &str, width: usize) -> String {
    let len = rune_len(text);
    if len > width {
        let keep = width.saturating_sub(3);
        let truncated: String = text.chars().take(keep).collect();
        format!("{}...", truncated)
    } else {
        format!("{:<width$}", text, width = width)
    }
}
