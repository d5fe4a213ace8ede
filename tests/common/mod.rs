/*!
 * Common test utilities for the srtsync test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use srtsync::subtitle_file::SubtitleFile;

/// SRT with an annotation, a proper name that survives translation verbatim,
/// a block without text and two multi-line blocks
pub const SAMPLE_SRT: &str = "1
00:00:01,000 --> 00:00:03,000
[Dramatic music playing]

2
00:00:04,000 --> 00:00:06,000
Good morning, everybody.
How are you all today?

3
00:00:07,000 --> 00:00:09,000
Mister Anderson Smithers

4
00:00:10,000 --> 00:00:12,000

5
00:00:13,000 --> 00:00:15,000
I think we should leave now,
before it gets dark.
";

/// Flat translation of `SAMPLE_SRT`, blank line echoed as `[]`
pub const SAMPLE_TRANSLATION: &str = "[Música dramática] Buenos días a todos. ¿Cómo están hoy? \
Mister Anderson Smithers [] Creo que deberíamos irnos ya, antes de que oscurezca.";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// The sample file with its translation aligned
pub fn aligned_sample() -> SubtitleFile {
    let mut file = SubtitleFile::new();
    file.import_original_srt(SAMPLE_SRT).unwrap();
    file.set_translated_text(SAMPLE_TRANSLATION);
    file
}

/// Words across all set texts, which edits must preserve
pub fn total_set_words(file: &SubtitleFile) -> usize {
    (0..file.num_line_sets())
        .filter_map(|ls| file.translated_words_in_line_set(ls))
        .sum()
}

/// Route log output through env_logger when RUST_LOG is set
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
