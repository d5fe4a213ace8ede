use serde::{Deserialize, Serialize};

/// How a line set was found by the aligner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineSetKind {
    /// Its text was located verbatim in the translation
    Exact,
    /// Its text is a slice that has to be divided heuristically
    #[default]
    Inexact,
}

/// A contiguous, inclusive range of original lines and the slice of
/// translated text attributed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSet {
    // @field: First original line (inclusive)
    pub init_line: usize,

    // @field: Last original line (inclusive)
    pub last_line: usize,

    // @field: Classification at construction time
    pub kind: LineSetKind,

    // @field: Set text
    pub text: String,
}

impl LineSet {
    pub fn new(init_line: usize, last_line: usize, kind: LineSetKind, text: impl Into<String>) -> Self {
        Self {
            init_line,
            last_line,
            kind,
            text: text.into(),
        }
    }

    /// Number of original lines covered
    pub fn line_count(&self) -> usize {
        self.last_line - self.init_line + 1
    }

    /// Whether `line` falls inside this set
    pub fn contains(&self, line: usize) -> bool {
        (self.init_line..=self.last_line).contains(&line)
    }

    /// Range of original-line indices, usable for slicing
    pub fn lines(&self) -> std::ops::Range<usize> {
        self.init_line..self.last_line + 1
    }

    pub fn range(&self) -> LineSetRange {
        LineSetRange {
            init_line: self.init_line,
            last_line: self.last_line,
            kind: self.kind,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.kind == LineSetKind::Exact
    }
}

/// Boundary-only view of a line set, as stored on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSetRange {
    pub init_line: usize,
    pub last_line: usize,
    #[serde(default)]
    pub kind: LineSetKind,
}

impl LineSetRange {
    pub fn with_text(self, text: String) -> LineSet {
        LineSet::new(self.init_line, self.last_line, self.kind, text)
    }
}

/// Check that the `(init_line, last_line)` ranges partition `0..line_count`
/// in order, without gaps or overlaps
pub fn is_partition<I>(ranges: I, line_count: usize) -> bool
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let mut next = 0;
    for (init_line, last_line) in ranges {
        if init_line != next || last_line < init_line {
            return false;
        }
        next = last_line + 1;
    }
    next == line_count
}
