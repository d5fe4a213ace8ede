/*!
 * Read-only audit of a subtitle file.
 *
 * The three textual views must agree once normalized: translated lines joined,
 * set texts joined, and the flat translated text. The line sets must also
 * partition the original lines.
 */

use std::fmt;

use super::SubtitleFile;
use crate::alignment::is_partition;
use crate::text_utils::normalize_for_comparison;

/// Outcome of [`SubtitleFile::check_consistency`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsistencyReport {
    /// Line sets cover every original line once, in order
    pub partition_ok: bool,
    /// Translated and original lines have the same count
    pub cardinality_ok: bool,
    /// Joined translated lines equal joined set texts
    pub lines_match_sets: bool,
    /// Joined set texts equal the flat translation
    pub sets_match_text: bool,
    /// Line sets whose own lines do not rebuild their set text
    pub mismatched_line_sets: Vec<usize>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.partition_ok && self.cardinality_ok && self.lines_match_sets && self.sets_match_text
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_consistent() {
            return write!(f, "consistent");
        }
        let mut problems = Vec::new();
        if !self.partition_ok {
            problems.push("line sets do not partition the original lines".to_string());
        }
        if !self.cardinality_ok {
            problems.push("translated and original line counts differ".to_string());
        }
        if !self.lines_match_sets {
            problems.push("translated lines differ from line set texts".to_string());
        }
        if !self.sets_match_text {
            problems.push("line set texts differ from the translated text".to_string());
        }
        if !self.mismatched_line_sets.is_empty() {
            problems.push(format!("mismatched line sets: {:?}", self.mismatched_line_sets));
        }
        write!(f, "inconsistent: {}", problems.join("; "))
    }
}

impl SubtitleFile {
    pub fn check_consistency(&self) -> ConsistencyReport {
        let partition_ok = self.line_sets.is_empty()
            || is_partition(
                self.line_sets.iter().map(|ls| (ls.init_line, ls.last_line)),
                self.original_lines.len(),
            );
        let cardinality_ok = self.translated_lines.len() == self.original_lines.len();

        let from_lines = normalize_for_comparison(&self.translated_text_from_lines());
        let from_sets = normalize_for_comparison(&self.translated_text_from_line_sets());
        let flat = normalize_for_comparison(&self.translated_text);

        let mismatched_line_sets = if partition_ok && cardinality_ok {
            (0..self.line_sets.len())
                .filter(|ls| {
                    let own = self.line_set_text_from_lines(*ls).unwrap_or_default();
                    normalize_for_comparison(&own) != normalize_for_comparison(&self.line_sets[*ls].text)
                })
                .collect()
        } else {
            Vec::new()
        };

        ConsistencyReport {
            partition_ok,
            cardinality_ok,
            lines_match_sets: from_lines == from_sets,
            sets_match_text: from_sets == flat,
            mismatched_line_sets,
        }
    }

    /// Whether all three textual views agree and the line sets partition the lines
    pub fn is_consistent(&self) -> bool {
        self.check_consistency().is_consistent()
    }
}
