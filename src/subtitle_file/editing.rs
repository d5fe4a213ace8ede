/*!
 * Manual edit operations on line sets and translated lines.
 *
 * Every operation checks its own precondition and does nothing when it does
 * not hold. Moves between line sets re-split both sets; split and merge only
 * change the structure and leave the per-line text as it was.
 */

use log::debug;

use super::SubtitleFile;
use crate::alignment::{LineSet, LineSetKind};
use crate::text_utils::{count_words, join_strings, split_words_back, split_words_front};

impl SubtitleFile {
    /// Move the text of the first `n` lines of set `ls` to the end of set `ls - 1`
    pub fn move_lines_to_previous(&mut self, ls: usize, n: usize) {
        if ls == 0 || ls >= self.line_sets.len() || n == 0 {
            debug!("move_lines_to_previous({}, {}) ignored", ls, n);
            return;
        }
        let set = &self.line_sets[ls];
        let n = n.min(set.line_count());
        let words = self.words_in_lines(set.init_line, set.init_line + n);
        self.shift_words_to_previous(ls, words);
    }

    /// Move the text of the last `n` lines of set `ls` to the start of set `ls + 1`
    pub fn move_lines_to_next(&mut self, ls: usize, n: usize) {
        if ls + 1 >= self.line_sets.len() || n == 0 {
            debug!("move_lines_to_next({}, {}) ignored", ls, n);
            return;
        }
        let set = &self.line_sets[ls];
        let n = n.min(set.line_count());
        let words = self.words_in_lines(set.last_line + 1 - n, set.last_line + 1);
        self.shift_words_to_next(ls, words);
    }

    /// Move the first `n` words of set `ls` to the end of set `ls - 1`
    pub fn move_words_to_previous(&mut self, ls: usize, n: usize) {
        if ls == 0 || ls >= self.line_sets.len() || n == 0 {
            debug!("move_words_to_previous({}, {}) ignored", ls, n);
            return;
        }
        self.shift_words_to_previous(ls, n);
    }

    /// Move the last `n` words of set `ls` to the start of set `ls + 1`
    pub fn move_words_to_next(&mut self, ls: usize, n: usize) {
        if ls + 1 >= self.line_sets.len() || n == 0 {
            debug!("move_words_to_next({}, {}) ignored", ls, n);
            return;
        }
        self.shift_words_to_next(ls, n);
    }

    /// Move the first word of translated line `line` to the end of the line above.
    ///
    /// On the first line of a set this becomes a one-word move to the previous
    /// set. Otherwise the set is not re-split, so the edit survives until the
    /// next explicit re-split.
    pub fn move_word_from_line_to_previous(&mut self, line: usize) {
        let Some(ls) = self.line_set_of_line(line) else {
            return;
        };
        if self.line_sets[ls].init_line == line {
            self.move_words_to_previous(ls, 1);
            return;
        }

        let (word, rest) = split_words_front(&self.translated_lines[line], 1);
        if word.is_empty() {
            return;
        }
        let (word, rest) = (word.to_string(), rest.to_string());
        let above = &mut self.translated_lines[line - 1];
        *above = join_strings(&[above.as_str(), word.as_str()]);
        self.translated_lines[line] = rest;
    }

    /// Move the last word of translated line `line` to the start of the line below.
    ///
    /// On the last line of a set this becomes a one-word move to the next set.
    pub fn move_word_from_line_to_next(&mut self, line: usize) {
        let Some(ls) = self.line_set_of_line(line) else {
            return;
        };
        if self.line_sets[ls].last_line == line {
            self.move_words_to_next(ls, 1);
            return;
        }

        let (rest, word) = split_words_back(&self.translated_lines[line], 1);
        if word.is_empty() {
            return;
        }
        let (rest, word) = (rest.to_string(), word.to_string());
        let below = &mut self.translated_lines[line + 1];
        *below = join_strings(&[word.as_str(), below.as_str()]);
        self.translated_lines[line] = rest;
    }

    /// Split set `ls` into `[init_line, break_line - 1]` and `[break_line, last_line]`.
    ///
    /// Each half takes the current translated lines on its side as its text.
    pub fn split_line_set_at(&mut self, ls: usize, break_line: usize) {
        let Some(set) = self.line_sets.get(ls) else {
            return;
        };
        if set.line_count() <= 1 || break_line <= set.init_line || break_line > set.last_line {
            debug!("split_line_set_at({}, {}) ignored", ls, break_line);
            return;
        }

        let head_text = join_strings(&self.translated_lines[set.init_line..break_line]);
        let tail_text = join_strings(&self.translated_lines[break_line..=set.last_line]);
        let tail = LineSet::new(break_line, set.last_line, set.kind, tail_text);

        let head = &mut self.line_sets[ls];
        head.last_line = break_line - 1;
        head.text = head_text;
        self.line_sets.insert(ls + 1, tail);
    }

    pub fn merge_with_previous(&mut self, ls: usize) {
        if ls == 0 || ls >= self.line_sets.len() {
            debug!("merge_with_previous({}) ignored", ls);
            return;
        }
        self.merge_pair(ls - 1);
    }

    pub fn merge_with_next(&mut self, ls: usize) {
        if ls + 1 >= self.line_sets.len() {
            debug!("merge_with_next({}) ignored", ls);
            return;
        }
        self.merge_pair(ls);
    }

    /// Fold set `first + 1` into set `first`
    fn merge_pair(&mut self, first: usize) {
        let second = self.line_sets.remove(first + 1);
        let merged = &mut self.line_sets[first];
        merged.last_line = second.last_line;
        merged.text = join_strings(&[merged.text.as_str(), second.text.as_str()]);
        if !second.is_exact() {
            merged.kind = LineSetKind::Inexact;
        }
    }

    fn shift_words_to_previous(&mut self, ls: usize, n: usize) {
        let n = n.min(count_words(&self.line_sets[ls].text));
        if n == 0 {
            return;
        }
        let (moved, kept) = split_words_front(&self.line_sets[ls].text, n);
        let (moved, kept) = (moved.to_string(), kept.to_string());

        let target = &mut self.line_sets[ls - 1];
        target.text = join_strings(&[target.text.as_str(), moved.as_str()]);
        target.kind = LineSetKind::Inexact;
        let source = &mut self.line_sets[ls];
        source.text = kept;
        source.kind = LineSetKind::Inexact;

        debug!("Moved {} words from line set {} to {}", n, ls, ls - 1);
        self.resplit_line_set(ls - 1);
        self.resplit_line_set(ls);
    }

    fn shift_words_to_next(&mut self, ls: usize, n: usize) {
        let n = n.min(count_words(&self.line_sets[ls].text));
        if n == 0 {
            return;
        }
        let (kept, moved) = split_words_back(&self.line_sets[ls].text, n);
        let (kept, moved) = (kept.to_string(), moved.to_string());

        let target = &mut self.line_sets[ls + 1];
        target.text = join_strings(&[moved.as_str(), target.text.as_str()]);
        target.kind = LineSetKind::Inexact;
        let source = &mut self.line_sets[ls];
        source.text = kept;
        source.kind = LineSetKind::Inexact;

        debug!("Moved {} words from line set {} to {}", n, ls, ls + 1);
        self.resplit_line_set(ls);
        self.resplit_line_set(ls + 1);
    }

    /// Words currently in translated lines `from..to`
    fn words_in_lines(&self, from: usize, to: usize) -> usize {
        self.translated_lines[from..to].iter().map(|l| count_words(l)).sum()
    }
}
