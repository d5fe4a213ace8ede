use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::report::{write_report, ReportView};
use crate::subtitle_file::{ConsistencyReport, SubtitleFile};
use crate::translation::{TextTranslator, TranslationService};

// @module: Application controller for aligning and editing subtitle translations

// @const: File name of the exported translation inside a state directory
pub const EXPORTED_SRT_FILE: &str = "translated.srt";

/// One edit applied to a saved state
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    MoveLinesToPrevious { line_set: usize, count: usize },
    MoveLinesToNext { line_set: usize, count: usize },
    MoveWordsToPrevious { line_set: usize, count: usize },
    MoveWordsToNext { line_set: usize, count: usize },
    MoveWordFromLineToPrevious { line: usize },
    MoveWordFromLineToNext { line: usize },
    Split { line_set: usize, break_line: usize },
    MergeWithPrevious { line_set: usize },
    MergeWithNext { line_set: usize },
    SetText { line_set: usize, text: String },
}

impl EditCommand {
    /// Apply the edit. Split and merge re-split the touched sets afterwards.
    pub fn apply(&self, file: &mut SubtitleFile) {
        match self {
            EditCommand::MoveLinesToPrevious { line_set, count } => file.move_lines_to_previous(*line_set, *count),
            EditCommand::MoveLinesToNext { line_set, count } => file.move_lines_to_next(*line_set, *count),
            EditCommand::MoveWordsToPrevious { line_set, count } => file.move_words_to_previous(*line_set, *count),
            EditCommand::MoveWordsToNext { line_set, count } => file.move_words_to_next(*line_set, *count),
            EditCommand::MoveWordFromLineToPrevious { line } => file.move_word_from_line_to_previous(*line),
            EditCommand::MoveWordFromLineToNext { line } => file.move_word_from_line_to_next(*line),
            EditCommand::Split { line_set, break_line } => {
                let before = file.num_line_sets();
                file.split_line_set_at(*line_set, *break_line);
                if file.num_line_sets() > before {
                    file.resplit_line_set(*line_set);
                    file.resplit_line_set(line_set + 1);
                }
            }
            EditCommand::MergeWithPrevious { line_set } => {
                let before = file.num_line_sets();
                file.merge_with_previous(*line_set);
                if file.num_line_sets() < before {
                    file.resplit_line_set(line_set - 1);
                }
            }
            EditCommand::MergeWithNext { line_set } => {
                let before = file.num_line_sets();
                file.merge_with_next(*line_set);
                if file.num_line_sets() < before {
                    file.resplit_line_set(*line_set);
                }
            }
            EditCommand::SetText { line_set, text } => file.set_translated_text_of_line_set(*line_set, text),
        }
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Self {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn new_file(&self) -> SubtitleFile {
        SubtitleFile::with_aligner(self.config.alignment.aligner())
    }

    fn import_srt(&self, srt_path: &Path) -> Result<SubtitleFile> {
        if !FileManager::file_exists(srt_path) {
            return Err(anyhow!("Subtitle file not found: {:?}", srt_path));
        }
        let content = FileManager::read_to_string(srt_path)?;
        let mut file = self.new_file();
        file.import_original_srt(&content)
            .with_context(|| format!("Failed to parse subtitle file: {:?}", srt_path))?;
        Ok(file)
    }

    /// Align an SRT with an existing flat translation and save the state
    pub fn align_files(&self, srt_path: &Path, translation_path: &Path, state_dir: &Path) -> Result<SubtitleFile> {
        let mut file = self.import_srt(srt_path)?;
        let translation = FileManager::read_to_string(translation_path)?;
        file.set_translated_text(&translation);
        self.log_consistency(&file);
        self.save_state(&file, state_dir)?;
        Ok(file)
    }

    /// Translate an SRT through the configured provider and save the state
    pub async fn translate_file(&self, srt_path: &Path, state_dir: &Path) -> Result<SubtitleFile> {
        let service = TranslationService::new(&self.config).context("Failed to create translation service")?;
        info!(
            "Translating {:?} from {} to {} with {} ({})",
            srt_path,
            self.config.source_language,
            self.config.target_language,
            service.config.provider.display_name(),
            service.config.get_model()
        );
        self.translate_file_with(srt_path, state_dir, &service).await
    }

    /// Translate an SRT with any translator and save the state
    pub async fn translate_file_with<T>(&self, srt_path: &Path, state_dir: &Path, translator: &T) -> Result<SubtitleFile>
    where
        T: TextTranslator + ?Sized,
    {
        let mut file = self.import_srt(srt_path)?;
        file.translate(translator)
            .await
            .with_context(|| format!("Failed to translate {:?}", srt_path))?;
        self.log_consistency(&file);
        self.save_state(&file, state_dir)?;
        Ok(file)
    }

    pub fn load_state(&self, state_dir: &Path) -> Result<SubtitleFile> {
        if !FileManager::dir_exists(state_dir) {
            return Err(anyhow!("State directory not found: {:?}", state_dir));
        }
        let mut file = SubtitleFile::read_from_dir(state_dir)
            .with_context(|| format!("Failed to load state from {:?}", state_dir))?;
        file.set_aligner(self.config.alignment.aligner());
        debug!("Loaded state from {:?}: {} line sets", state_dir, file.num_line_sets());
        Ok(file)
    }

    pub fn save_state(&self, file: &SubtitleFile, state_dir: &Path) -> Result<()> {
        file.write_to_dir(state_dir)
            .with_context(|| format!("Failed to save state to {:?}", state_dir))
    }

    /// Load a state, apply one edit and save it back.
    ///
    /// Returns false when the edit changed nothing; the state is then left as it was.
    pub fn apply_edit(&self, state_dir: &Path, command: &EditCommand) -> Result<bool> {
        let mut file = self.load_state(state_dir)?;
        let before = file.clone();
        command.apply(&mut file);

        if file == before {
            info!("Edit {:?} changed nothing", command);
            return Ok(false);
        }

        self.log_consistency(&file);
        self.save_state(&file, state_dir)?;
        Ok(true)
    }

    /// Write the translated SRT of a state, by default inside the state directory
    pub fn export(&self, state_dir: &Path, output: Option<&Path>) -> Result<PathBuf> {
        let file = self.load_state(state_dir)?;
        let output = output.map_or_else(|| state_dir.join(EXPORTED_SRT_FILE), Path::to_path_buf);
        FileManager::write_to_file(&output, &file.translated_srt())?;
        info!("Success: {:?}", output);
        Ok(output)
    }

    pub fn report<W: Write>(&self, state_dir: &Path, view: ReportView, out: &mut W) -> Result<()> {
        let file = self.load_state(state_dir)?;
        write_report(out, &file, view, self.config.alignment.report_width).context("Failed to write report")
    }

    pub fn check(&self, state_dir: &Path) -> Result<ConsistencyReport> {
        let file = self.load_state(state_dir)?;
        Ok(file.check_consistency())
    }

    fn log_consistency(&self, file: &SubtitleFile) {
        let report = file.check_consistency();
        if !report.is_consistent() {
            warn!("Consistency check failed: {}", report);
        }
    }
}
