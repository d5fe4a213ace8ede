/*!
 * Proportional line splitter.
 *
 * Divides the text of one line set among its original lines so that each
 * translated line gets roughly the share of characters its original line had.
 * The rounding error of every line is carried into the next one (`excess`),
 * breaks only happen at word boundaries and the last line absorbs whatever
 * is left.
 */

use crate::text_utils::{closest_not_empty, rune_len};

/// One emitted line and the accumulator state right after it
#[derive(Debug, Clone, PartialEq)]
pub struct SplitStep {
    /// Ideal length for this line, after correcting for the previous excess
    pub target: f64,
    /// Carried error after emitting this line
    pub excess: f64,
    pub text: String,
}

/// Accumulator walking the lines of one line set.
#[derive(Debug, Clone)]
pub struct LineSplitter<'a> {
    remaining: &'a str,
    ratio: f64,
    excess: f64,
}

impl<'a> LineSplitter<'a> {
    pub fn new(set_text: &'a str, ratio: f64) -> Self {
        Self {
            remaining: set_text.trim(),
            ratio,
            excess: 0.0,
        }
    }

    pub fn excess(&self) -> f64 {
        self.excess
    }

    /// Text not yet assigned to any line
    pub fn remaining(&self) -> &'a str {
        self.remaining
    }

    /// Emit the translated text for the next original line of `original_len` code points.
    ///
    /// `is_last` marks the line that takes all remaining text.
    pub fn next_line(&mut self, original_len: usize, is_last: bool) -> SplitStep {
        let target = self.ratio * original_len as f64 - self.excess;

        let emitted: &'a str = if is_last {
            let rest = self.remaining;
            self.excess = rune_len(rest) as f64 - target + 1.0;
            rest
        } else if original_len == 0 {
            ""
        } else if self.remaining.is_empty() {
            self.excess = -target;
            ""
        } else {
            let chars = if target > 1.0 { (target + 0.5).floor() as usize } else { 0 };
            let longer = prefix_to_word_end(self.remaining, chars);
            let shorter = drop_last_word(longer);
            let (chosen, excess) = closest_not_empty(target, shorter, longer);
            self.excess = excess;
            chosen
        };

        self.remaining = self.remaining[emitted.len()..].trim_start();

        SplitStep {
            target,
            excess: self.excess,
            text: emitted.to_string(),
        }
    }
}

/// Shortest prefix holding at least `chars` code points that does not end
/// mid-word. The whole text when it is shorter than `chars`.
fn prefix_to_word_end(text: &str, chars: usize) -> &str {
    let start = match text.char_indices().nth(chars) {
        Some((idx, _)) => idx,
        None => return text.trim_end(),
    };
    let word_end = text[start..]
        .find(char::is_whitespace)
        .map_or(text.len(), |offset| start + offset);
    text[..word_end].trim_end()
}

/// `text` without its last word and the whitespace before it
fn drop_last_word(text: &str) -> &str {
    match text.rfind(char::is_whitespace) {
        Some(idx) => text[..idx].trim_end(),
        None => "",
    }
}

/// Translated chars of a set, not counting the separators between its
/// non-blank lines
pub fn translated_chars(set_text: &str, original_lengths: &[usize]) -> usize {
    let non_blank = original_lengths.iter().filter(|len| **len > 0).count();
    rune_len(set_text).saturating_sub(non_blank.saturating_sub(1))
}

/// Translated to original character ratio, 0 when the originals are empty
pub fn split_ratio(set_text: &str, original_lengths: &[usize]) -> f64 {
    let original: usize = original_lengths.iter().sum();
    if original == 0 {
        return 0.0;
    }
    translated_chars(set_text, original_lengths) as f64 / original as f64
}

/// Index of the line that absorbs the leftover text: the last non-blank line,
/// or the final line when every line is blank
fn absorbing_line(original_lengths: &[usize]) -> usize {
    original_lengths
        .iter()
        .rposition(|len| *len > 0)
        .unwrap_or_else(|| original_lengths.len().saturating_sub(1))
}

/// Split `set_text` into one translated line per original line.
///
/// Pure: the same input always yields the same lines.
pub fn split_line_set(set_text: &str, original_lengths: &[usize]) -> Vec<String> {
    split_steps(set_text, original_lengths)
        .into_iter()
        .map(|step| step.text)
        .collect()
}

/// Like [`split_line_set`], keeping the target and excess of every step
pub fn split_steps(set_text: &str, original_lengths: &[usize]) -> Vec<SplitStep> {
    let ratio = split_ratio(set_text, original_lengths);
    let last = absorbing_line(original_lengths);
    let mut splitter = LineSplitter::new(set_text, ratio);
    original_lengths
        .iter()
        .enumerate()
        .map(|(i, len)| splitter.next_line(*len, i == last))
        .collect()
}
