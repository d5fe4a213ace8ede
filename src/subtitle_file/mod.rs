/*!
 * The subtitle file aggregate.
 *
 * A `SubtitleFile` owns the four views of one subtitle file and keeps them in
 * sync:
 *
 * - the original lines, read-only once loaded
 * - the line sets, each with its slice of translated text
 * - the translated lines, one per original line
 * - the flat translated text
 *
 * Submodules add the edit operations (`editing`), the consistency audit
 * (`consistency`) and the on-disk state directory (`persistence`).
 */

use log::{debug, info};

use crate::alignment::{split_line_set, split_ratio, Aligner, LineSet};
use crate::errors::{SubtitleError, TranslationError};
use crate::subtitle_processor::{parse_srt, render_srt, SubtitleBlock};
use crate::text_utils::{count_words, join_lines_with_brackets, join_strings, prepare_string, rune_len};
use crate::translation::TextTranslator;

pub mod consistency;
pub mod editing;
pub mod persistence;

pub use self::consistency::ConsistencyReport;

/// Per line set counts, as shown in reports
#[derive(Debug, Clone, PartialEq)]
pub struct LineSetStats {
    pub index: usize,
    pub init_line: usize,
    pub last_line: usize,
    pub exact: bool,
    pub original_words: usize,
    pub translated_words: usize,
    pub original_chars: usize,
    pub translated_chars: usize,
    pub ratio: f64,
}

/// One subtitle file with its translation, aligned line by line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubtitleFile {
    // @field: Block headers from the SRT
    blocks: Vec<SubtitleBlock>,

    // @field: Partition of the original lines, with set texts
    line_sets: Vec<LineSet>,

    // @field: Original display lines, blank lines as ""
    original_lines: Vec<String>,

    // @field: Translated display lines, same length as original_lines
    translated_lines: Vec<String>,

    // @field: Flat translation
    translated_text: String,

    // @field: Matcher used when a translation is set
    aligner: Aligner,
}

impl SubtitleFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aligner(aligner: Aligner) -> Self {
        Self {
            aligner,
            ..Self::default()
        }
    }

    pub fn set_aligner(&mut self, aligner: Aligner) {
        self.aligner = aligner;
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Parse SRT content and load it as the original side
    pub fn import_original_srt(&mut self, content: &str) -> Result<(), SubtitleError> {
        let (blocks, lines) = parse_srt(content)?;
        self.load_original(blocks, lines);
        Ok(())
    }

    /// Replace the original side. Any previous translation is discarded.
    pub fn load_original(&mut self, blocks: Vec<SubtitleBlock>, original_lines: Vec<String>) {
        self.translated_lines = vec![String::new(); original_lines.len()];
        self.blocks = blocks;
        self.original_lines = original_lines;
        self.line_sets.clear();
        self.translated_text.clear();
        info!("Loaded {} blocks, {} lines", self.blocks.len(), self.original_lines.len());
    }

    /// Align a flat translation with the original lines and split every line set
    pub fn set_translated_text(&mut self, text: &str) {
        self.translated_text = prepare_string(text);
        self.line_sets = self.aligner.align(&self.original_lines, &self.translated_text);
        self.resplit_all();
        info!(
            "Aligned translation into {} line sets ({} exact)",
            self.line_sets.len(),
            self.line_sets.iter().filter(|ls| ls.is_exact()).count()
        );
    }

    /// Replace the text of one line set, re-split it and rebuild the flat text
    pub fn set_translated_text_of_line_set(&mut self, ls: usize, text: &str) {
        let Some(set) = self.line_sets.get_mut(ls) else {
            debug!("Ignoring text for missing line set {}", ls);
            return;
        };
        set.text = prepare_string(text);
        self.resplit_line_set(ls);
        self.rebuild_translated_text();
    }

    /// Translate the original text with `translator` and align the result.
    ///
    /// The translator is called once. On error nothing is changed.
    pub async fn translate<T>(&mut self, translator: &T) -> Result<(), TranslationError>
    where
        T: TextTranslator + ?Sized,
    {
        if !self.is_loaded() {
            return Err(TranslationError::NothingToTranslate);
        }
        let source = self.original_text();
        let translated = translator.translate_text(&source).await?;
        if translated.trim().is_empty() {
            return Err(TranslationError::EmptyResponse);
        }
        self.set_translated_text(&translated);
        Ok(())
    }

    /// Recompute the translated lines of one line set from its text
    pub fn resplit_line_set(&mut self, ls: usize) {
        let Some(set) = self.line_sets.get(ls) else {
            return;
        };
        let lengths = self.original_lengths(set);
        let lines = split_line_set(&set.text, &lengths);
        for (slot, line) in self.translated_lines[set.lines()].iter_mut().zip(lines) {
            *slot = line;
        }
    }

    pub fn resplit_all(&mut self) {
        for ls in 0..self.line_sets.len() {
            self.resplit_line_set(ls);
        }
    }

    /// Flat translated text := set texts joined by single spaces
    pub fn rebuild_translated_text(&mut self) {
        let texts: Vec<&str> = self.line_sets.iter().map(|ls| ls.text.as_str()).collect();
        self.translated_text = join_strings(&texts);
    }

    pub fn clear(&mut self) {
        *self = Self::with_aligner(self.aligner);
    }

    /// Whether original lines are present
    pub fn is_loaded(&self) -> bool {
        !self.original_lines.is_empty()
    }

    /// Whether a translation has been aligned
    pub fn is_translated(&self) -> bool {
        !self.line_sets.is_empty()
    }

    // ------------------------------------------------------------------
    // Raw views
    // ------------------------------------------------------------------

    pub fn blocks(&self) -> &[SubtitleBlock] {
        &self.blocks
    }

    pub fn line_sets(&self) -> &[LineSet] {
        &self.line_sets
    }

    pub fn line_set(&self, ls: usize) -> Option<&LineSet> {
        self.line_sets.get(ls)
    }

    pub fn original_lines(&self) -> &[String] {
        &self.original_lines
    }

    pub fn translated_lines(&self) -> &[String] {
        &self.translated_lines
    }

    pub fn original_line(&self, line: usize) -> Option<&str> {
        self.original_lines.get(line).map(String::as_str)
    }

    pub fn translated_line(&self, line: usize) -> Option<&str> {
        self.translated_lines.get(line).map(String::as_str)
    }

    // ------------------------------------------------------------------
    // Textual views
    // ------------------------------------------------------------------

    /// Original text as sent for translation, blank lines as `[]`
    pub fn original_text(&self) -> String {
        join_lines_with_brackets(&self.original_lines)
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn translated_text_from_lines(&self) -> String {
        join_strings(&self.translated_lines)
    }

    pub fn translated_text_from_line_sets(&self) -> String {
        let texts: Vec<&str> = self.line_sets.iter().map(|ls| ls.text.as_str()).collect();
        join_strings(&texts)
    }

    pub fn original_text_of_line_set(&self, ls: usize) -> Option<String> {
        let set = self.line_sets.get(ls)?;
        Some(join_strings(&self.original_lines[set.lines()]))
    }

    pub fn line_set_text(&self, ls: usize) -> Option<&str> {
        self.line_sets.get(ls).map(|set| set.text.as_str())
    }

    /// Set text rebuilt from the translated lines it owns
    pub fn line_set_text_from_lines(&self, ls: usize) -> Option<String> {
        let set = self.line_sets.get(ls)?;
        Some(join_strings(&self.translated_lines[set.lines()]))
    }

    /// Translated side rendered as SRT
    pub fn translated_srt(&self) -> String {
        render_srt(&self.blocks, &self.translated_lines)
    }

    pub fn original_srt(&self) -> String {
        render_srt(&self.blocks, &self.original_lines)
    }

    // ------------------------------------------------------------------
    // Counting
    // ------------------------------------------------------------------

    pub fn num_line_sets(&self) -> usize {
        self.line_sets.len()
    }

    pub fn num_lines(&self) -> usize {
        self.original_lines.len()
    }

    pub fn lines_in_line_set(&self, ls: usize) -> Option<usize> {
        self.line_sets.get(ls).map(LineSet::line_count)
    }

    pub fn original_words_in_line_set(&self, ls: usize) -> Option<usize> {
        let set = self.line_sets.get(ls)?;
        Some(self.original_lines[set.lines()].iter().map(|l| count_words(l)).sum())
    }

    pub fn translated_words_in_line_set(&self, ls: usize) -> Option<usize> {
        self.line_sets.get(ls).map(|set| count_words(&set.text))
    }

    pub fn original_chars_in_line_set(&self, ls: usize) -> Option<usize> {
        let set = self.line_sets.get(ls)?;
        Some(self.original_lengths(set).iter().sum())
    }

    pub fn translated_chars_in_line_set(&self, ls: usize) -> Option<usize> {
        self.line_sets.get(ls).map(|set| rune_len(&set.text))
    }

    /// Translated chars (without line separators) per original char
    pub fn ratio_of_line_set(&self, ls: usize) -> Option<f64> {
        let set = self.line_sets.get(ls)?;
        Some(split_ratio(&set.text, &self.original_lengths(set)))
    }

    pub fn original_words_in_line(&self, line: usize) -> Option<usize> {
        self.original_line(line).map(count_words)
    }

    pub fn translated_words_in_line(&self, line: usize) -> Option<usize> {
        self.translated_line(line).map(count_words)
    }

    pub fn original_chars_in_line(&self, line: usize) -> Option<usize> {
        self.original_line(line).map(rune_len)
    }

    pub fn translated_chars_in_line(&self, line: usize) -> Option<usize> {
        self.translated_line(line).map(rune_len)
    }

    pub fn total_original_words(&self) -> usize {
        self.original_lines.iter().map(|l| count_words(l)).sum()
    }

    pub fn total_translated_words(&self) -> usize {
        count_words(&self.translated_text)
    }

    pub fn total_original_chars(&self) -> usize {
        self.original_lines.iter().map(|l| rune_len(l)).sum()
    }

    pub fn total_translated_chars(&self) -> usize {
        rune_len(&self.translated_text)
    }

    /// Index of the line set owning `line`
    pub fn line_set_of_line(&self, line: usize) -> Option<usize> {
        let ls = self.line_sets.partition_point(|set| set.last_line < line);
        self.line_sets.get(ls).filter(|set| set.contains(line)).map(|_| ls)
    }

    pub fn is_first_line_of_line_set(&self, line: usize) -> bool {
        self.line_set_of_line(line)
            .is_some_and(|ls| self.line_sets[ls].init_line == line)
    }

    pub fn is_last_line_of_line_set(&self, line: usize) -> bool {
        self.line_set_of_line(line)
            .is_some_and(|ls| self.line_sets[ls].last_line == line)
    }

    pub fn stats(&self, ls: usize) -> Option<LineSetStats> {
        let set = self.line_sets.get(ls)?;
        Some(LineSetStats {
            index: ls,
            init_line: set.init_line,
            last_line: set.last_line,
            exact: set.is_exact(),
            original_words: self.original_words_in_line_set(ls)?,
            translated_words: self.translated_words_in_line_set(ls)?,
            original_chars: self.original_chars_in_line_set(ls)?,
            translated_chars: self.translated_chars_in_line_set(ls)?,
            ratio: self.ratio_of_line_set(ls)?,
        })
    }

    pub fn all_stats(&self) -> Vec<LineSetStats> {
        (0..self.line_sets.len()).filter_map(|ls| self.stats(ls)).collect()
    }

    /// Code-point length of each original line of a set
    pub(crate) fn original_lengths(&self, set: &LineSet) -> Vec<usize> {
        self.original_lines[set.lines()].iter().map(|l| rune_len(l)).collect()
    }
}
