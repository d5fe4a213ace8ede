/*!
 * Greedy line-to-span matcher.
 *
 * Walks the original lines once, keeping a cursor into the translated text,
 * and groups consecutive lines into line sets. A set is `Exact` when each of
 * its lines was found verbatim at the cursor, `Inexact` when its lines had no
 * direct match and its text is whatever lies between two exact regions.
 */

use log::{debug, warn};

use super::line_set::{LineSet, LineSetKind};
use crate::text_utils::{concat_with_space, rune_len, strip_blank_markers, BLANK_LINE_MARKER};

/// Lines shorter than this (in code points) never match in the middle of the text
pub const MIN_MATCH_CHARS: usize = 15;

/// What an original line is searched as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchKey<'a> {
    /// Blank display line, echoed as `[]` in the translation
    BlankMarker,
    /// A `[...]` annotation; any bracketed span matches
    Annotation,
    /// Regular text, searched verbatim
    Literal { text: &'a str, mini: bool },
}

impl<'a> SearchKey<'a> {
    pub fn for_line(line: &'a str, min_match_chars: usize) -> Self {
        if line.is_empty() {
            SearchKey::BlankMarker
        } else if is_annotation(line) {
            SearchKey::Annotation
        } else {
            SearchKey::Literal {
                text: line,
                mini: rune_len(line) < min_match_chars,
            }
        }
    }

    /// Leftmost byte range matched by this key in `haystack`
    pub fn find_in(&self, haystack: &str) -> Option<(usize, usize)> {
        match self {
            SearchKey::BlankMarker => haystack
                .find(BLANK_LINE_MARKER)
                .map(|start| (start, start + BLANK_LINE_MARKER.len())),
            SearchKey::Annotation => find_bracket_span(haystack),
            SearchKey::Literal { text, .. } => find_whole_words(haystack, text),
        }
    }

    fn is_mini(&self) -> bool {
        matches!(self, SearchKey::Literal { mini: true, .. })
    }
}

/// A line wrapped in brackets, e.g. `[Music]`
fn is_annotation(line: &str) -> bool {
    line.len() > 2 && line.starts_with('[') && line.ends_with(']')
}

/// Leftmost occurrence of `needle` that does not cut a word of `haystack` in two
fn find_whole_words(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let is_word = |c: Option<char>| c.is_some_and(char::is_alphanumeric);
    let glued_start = is_word(needle.chars().next());
    let glued_end = is_word(needle.chars().next_back());

    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();
        let cuts_before = glued_start && is_word(haystack[..start].chars().next_back());
        let cuts_after = glued_end && is_word(haystack[end..].chars().next());
        if !cuts_before && !cuts_after {
            return Some((start, end));
        }
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Leftmost `[` followed by at least one non-`]` character and a closing `]`
fn find_bracket_span(haystack: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(offset) = haystack[from..].find('[') {
        let open = from + offset;
        let body = open + 1;
        match haystack[body..].find(']') {
            Some(0) => from = body,
            Some(close) => return Some((open, body + close + 1)),
            None => return None,
        }
    }
    None
}

/// Outcome of searching one original line at the current cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Found right at the cursor
    AtStart { end: usize },
    /// Found after some unmatched text
    Ahead { start: usize, end: usize },
    NoMatch,
}

/// Classify a search hit given the kind of the block currently open.
///
/// A hit away from the cursor is discarded for mini-lines and while an exact
/// block is open.
pub fn classify(hit: Option<(usize, usize)>, key: &SearchKey<'_>, exact_open: bool) -> MatchOutcome {
    match hit {
        None => MatchOutcome::NoMatch,
        Some((0, end)) => MatchOutcome::AtStart { end },
        Some(_) if key.is_mini() || exact_open => MatchOutcome::NoMatch,
        Some((start, end)) => MatchOutcome::Ahead { start, end },
    }
}

/// The block being accumulated
#[derive(Debug, Clone, PartialEq)]
struct OpenBlock {
    init_line: usize,
    last_line: usize,
    kind: LineSetKind,
    text: String,
}

impl OpenBlock {
    fn exact(line: usize, text: &str) -> Self {
        Self {
            init_line: line,
            last_line: line,
            kind: LineSetKind::Exact,
            text: concat_with_space("", text),
        }
    }

    fn inexact(line: usize) -> Self {
        Self {
            init_line: line,
            last_line: line,
            kind: LineSetKind::Inexact,
            text: String::new(),
        }
    }

    fn close(self) -> LineSet {
        let text = match self.kind {
            LineSetKind::Exact => self.text,
            LineSetKind::Inexact => strip_blank_markers(&self.text),
        };
        debug!(
            "Line set {:?} lines {}-{}: {} chars",
            self.kind,
            self.init_line,
            self.last_line,
            rune_len(&text)
        );
        LineSet::new(self.init_line, self.last_line, self.kind, text)
    }
}

/// Line-set aligner.
///
/// Holds only the mini-line threshold; every call to [`Aligner::align`] is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aligner {
    min_match_chars: usize,
}

impl Default for Aligner {
    fn default() -> Self {
        Self::new(MIN_MATCH_CHARS)
    }
}

impl Aligner {
    pub fn new(min_match_chars: usize) -> Self {
        Self { min_match_chars }
    }

    /// Partition `original_lines` into line sets, attributing every character
    /// of `translated_text` to exactly one set.
    pub fn align<S: AsRef<str>>(&self, original_lines: &[S], translated_text: &str) -> Vec<LineSet> {
        let mut sets = Vec::new();
        let mut open: Option<OpenBlock> = None;
        let mut rest = translated_text.trim_start();

        for (i, line) in original_lines.iter().enumerate() {
            let key = SearchKey::for_line(line.as_ref(), self.min_match_chars);
            let exact_open = matches!(&open, Some(b) if b.kind == LineSetKind::Exact);
            let outcome = classify(key.find_in(rest), &key, exact_open);

            match (open.take(), outcome) {
                // Extend the exact block, or open the first one
                (Some(mut block), MatchOutcome::AtStart { end }) if block.kind == LineSetKind::Exact => {
                    block.last_line = i;
                    block.text = concat_with_space(&block.text, &rest[..end]);
                    open = Some(block);
                    rest = rest[end..].trim_start();
                }
                (None, MatchOutcome::AtStart { end }) => {
                    open = Some(OpenBlock::exact(i, &rest[..end]));
                    rest = rest[end..].trim_start();
                }

                // Unmatched text before the hit closes the inexact block
                (Some(mut block), MatchOutcome::AtStart { end }) => {
                    block.text = String::new();
                    sets.push(block.close());
                    open = Some(OpenBlock::exact(i, &rest[..end]));
                    rest = rest[end..].trim_start();
                }
                (Some(mut block), MatchOutcome::Ahead { start, end }) => {
                    block.text = rest[..start].trim_end().to_string();
                    sets.push(block.close());
                    open = Some(OpenBlock::exact(i, &rest[start..end]));
                    rest = rest[end..].trim_start();
                }
                (None, MatchOutcome::Ahead { start, end }) => {
                    // No line precedes the hit, so the leading text joins the new block
                    let mut block = OpenBlock::exact(i, &rest[start..end]);
                    block.text = concat_with_space(rest[..start].trim_end(), &block.text);
                    open = Some(block);
                    rest = rest[end..].trim_start();
                }

                (Some(block), MatchOutcome::NoMatch) if block.kind == LineSetKind::Exact => {
                    sets.push(block.close());
                    open = Some(OpenBlock::inexact(i));
                }
                (Some(mut block), MatchOutcome::NoMatch) => {
                    block.last_line = i;
                    open = Some(block);
                }
                (None, MatchOutcome::NoMatch) => {
                    open = Some(OpenBlock::inexact(i));
                }
            }
        }

        let rest = rest.trim();
        match open {
            Some(mut block) => {
                if !rest.is_empty() {
                    block.text = concat_with_space(&block.text, rest);
                }
                sets.push(block.close());
            }
            None if !rest.is_empty() => {
                warn!("No original lines to attribute {} translated chars to", rune_len(rest));
            }
            None => {}
        }

        sets
    }
}
