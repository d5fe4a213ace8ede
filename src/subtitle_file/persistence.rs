/*!
 * State directory: one pretty-printed JSON file per field of a subtitle file.
 *
 * Files are replaced atomically, so an interrupted save never leaves a
 * half-written field behind.
 */

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

use super::SubtitleFile;
use crate::alignment::{is_partition, LineSetRange};
use crate::errors::StateError;

// @const: File names inside a state directory
pub const BLOCKS_FILE: &str = "subtitleblock.json";
pub const LINE_SETS_FILE: &str = "lineset.json";
pub const ORIGINAL_LINES_FILE: &str = "originalline.json";
pub const TRANSLATED_LINES_FILE: &str = "translatedline.json";
pub const SET_TEXTS_FILE: &str = "translatedset.json";
pub const TRANSLATED_TEXT_FILE: &str = "translatedtext.json";

fn write_json<T: Serialize + ?Sized>(dir: &Path, name: &str, value: &T) -> Result<(), StateError> {
    let path = dir.join(name);
    let data = serde_json::to_vec_pretty(value).map_err(|source| StateError::Json {
        path: path.clone(),
        source,
    })?;

    let io_error = |source| StateError::Io {
        path: path.clone(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_error)?;
    tmp.write_all(&data).map_err(io_error)?;
    tmp.persist(&path).map_err(|e| io_error(e.error))?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T, StateError> {
    let path = dir.join(name);
    let data = fs::read(&path).map_err(|source| StateError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| StateError::Json { path, source })
}

impl SubtitleFile {
    /// Save every field into `dir`, creating it if needed
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<(), StateError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| StateError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let ranges: Vec<LineSetRange> = self.line_sets.iter().map(|ls| ls.range()).collect();
        let set_texts: Vec<&str> = self.line_sets.iter().map(|ls| ls.text.as_str()).collect();

        write_json(dir, BLOCKS_FILE, &self.blocks)?;
        write_json(dir, LINE_SETS_FILE, &ranges)?;
        write_json(dir, ORIGINAL_LINES_FILE, &self.original_lines)?;
        write_json(dir, TRANSLATED_LINES_FILE, &self.translated_lines)?;
        write_json(dir, SET_TEXTS_FILE, &set_texts)?;
        write_json(dir, TRANSLATED_TEXT_FILE, &self.translated_text)?;

        info!("Saved state to {}", dir.display());
        Ok(())
    }

    /// Load a state directory written by [`SubtitleFile::write_to_dir`].
    ///
    /// The result uses the default aligner.
    pub fn read_from_dir(dir: impl AsRef<Path>) -> Result<Self, StateError> {
        let dir = dir.as_ref();

        let blocks = read_json(dir, BLOCKS_FILE)?;
        let ranges: Vec<LineSetRange> = read_json(dir, LINE_SETS_FILE)?;
        let original_lines: Vec<String> = read_json(dir, ORIGINAL_LINES_FILE)?;
        let translated_lines: Vec<String> = read_json(dir, TRANSLATED_LINES_FILE)?;
        let set_texts: Vec<String> = read_json(dir, SET_TEXTS_FILE)?;
        let translated_text = read_json(dir, TRANSLATED_TEXT_FILE)?;

        if ranges.len() != set_texts.len() {
            return Err(StateError::Corrupt(format!(
                "{} line sets but {} set texts",
                ranges.len(),
                set_texts.len()
            )));
        }
        if translated_lines.len() != original_lines.len() {
            return Err(StateError::Corrupt(format!(
                "{} translated lines but {} original lines",
                translated_lines.len(),
                original_lines.len()
            )));
        }
        if !ranges.is_empty()
            && !is_partition(ranges.iter().map(|r| (r.init_line, r.last_line)), original_lines.len())
        {
            return Err(StateError::Corrupt(
                "line sets do not partition the original lines".to_string(),
            ));
        }

        let line_sets = ranges
            .into_iter()
            .zip(set_texts)
            .map(|(range, text)| range.with_text(text))
            .collect();

        debug!("Loaded state from {}", dir.display());
        Ok(SubtitleFile {
            blocks,
            line_sets,
            original_lines,
            translated_lines,
            translated_text,
            ..SubtitleFile::default()
        })
    }
}
