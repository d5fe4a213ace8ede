/*!
 * Controller lifecycle tests: align, edit, check, report and export through state directories
 */

use srtsync::app_config::Config;
use srtsync::app_controller::{Controller, EditCommand, EXPORTED_SRT_FILE};
use srtsync::providers::mock::MockProvider;
use srtsync::report::ReportView;

use crate::common::{self, SAMPLE_SRT, SAMPLE_TRANSLATION};

struct Workspace {
    dir: tempfile::TempDir,
    controller: Controller,
}

impl Workspace {
    fn aligned() -> Self {
        let dir = common::create_temp_dir().unwrap();
        let srt = common::create_test_file(dir.path(), "movie.srt", SAMPLE_SRT).unwrap();
        let txt = common::create_test_file(dir.path(), "movie.es.txt", SAMPLE_TRANSLATION).unwrap();
        let controller = Controller::new_for_test();
        controller.align_files(&srt, &txt, &dir.path().join("state")).unwrap();
        Self { dir, controller }
    }

    fn state(&self) -> std::path::PathBuf {
        self.dir.path().join("state")
    }
}

#[test]
fn test_alignFiles_shouldSaveAConsistentState() {
    let ws = Workspace::aligned();

    let file = ws.controller.load_state(&ws.state()).unwrap();

    assert_eq!(file, common::aligned_sample());
    assert!(ws.controller.check(&ws.state()).unwrap().is_consistent());
}

#[test]
fn test_alignFiles_missingSrt_shouldFail() {
    let dir = common::create_temp_dir().unwrap();
    let controller = Controller::new_for_test();
    let result = controller.align_files(
        &dir.path().join("nope.srt"),
        &dir.path().join("nope.txt"),
        &dir.path().join("state"),
    );
    assert!(result.unwrap_err().to_string().contains("Subtitle file not found"));
    assert!(!dir.path().join("state").exists());
}

#[test]
fn test_loadState_missingDir_shouldFail() {
    let dir = common::create_temp_dir().unwrap();
    let err = Controller::new_for_test().load_state(&dir.path().join("absent")).unwrap_err();
    assert!(err.to_string().contains("State directory not found"));
}

#[test]
fn test_applyEdit_shouldPersistTheChange() {
    let ws = Workspace::aligned();

    let changed = ws
        .controller
        .apply_edit(&ws.state(), &EditCommand::MoveWordsToNext { line_set: 1, count: 3 })
        .unwrap();

    assert!(changed);
    let file = ws.controller.load_state(&ws.state()).unwrap();
    assert_eq!(file.line_set_text(1), Some("Buenos días a todos."));
    assert!(file.is_consistent());
}

#[test]
fn test_applyEdit_noOp_shouldReportNoChange() {
    let ws = Workspace::aligned();

    let changed = ws
        .controller
        .apply_edit(&ws.state(), &EditCommand::MergeWithPrevious { line_set: 0 })
        .unwrap();

    assert!(!changed);
    assert_eq!(ws.controller.load_state(&ws.state()).unwrap(), common::aligned_sample());
}

#[test]
fn test_applyEdit_mergeThenSplit_shouldKeepStateConsistent() {
    let ws = Workspace::aligned();

    assert!(ws.controller.apply_edit(&ws.state(), &EditCommand::MergeWithNext { line_set: 0 }).unwrap());
    assert!(ws
        .controller
        .apply_edit(&ws.state(), &EditCommand::Split { line_set: 0, break_line: 1 })
        .unwrap());

    let file = ws.controller.load_state(&ws.state()).unwrap();
    assert_eq!(file.num_line_sets(), 4);
    assert!(file.is_consistent());
}

#[test]
fn test_export_shouldWriteTranslatedSrt() {
    let ws = Workspace::aligned();

    let path = ws.controller.export(&ws.state(), None).unwrap();

    assert_eq!(path, ws.state().join(EXPORTED_SRT_FILE));
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("2\n00:00:04,000 --> 00:00:06,000\nBuenos días a todos.\n¿Cómo están hoy?\n\n"));
}

#[test]
fn test_report_shouldUseConfiguredWidth() {
    let ws = Workspace::aligned();
    let mut config = Config::default();
    config.alignment.report_width = 10;
    let controller = Controller::with_config(config);

    let mut out = Vec::new();
    controller.report(&ws.state(), ReportView::SideBySide, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("000|0000|>[Dramat...<|>[Música...<|"));
}

#[tokio::test]
async fn test_translateFileWith_mockProvider_shouldSaveAlignedState() {
    let dir = common::create_temp_dir().unwrap();
    let srt = common::create_test_file(dir.path(), "movie.srt", SAMPLE_SRT).unwrap();
    let controller = Controller::new_for_test();
    let provider = MockProvider::returning(SAMPLE_TRANSLATION);

    let file = controller
        .translate_file_with(&srt, &dir.path().join("state"), &provider)
        .await
        .unwrap();

    assert_eq!(file.num_line_sets(), 4);
    assert_eq!(controller.load_state(&dir.path().join("state")).unwrap(), file);
}

#[tokio::test]
async fn test_translateFileWith_failingProvider_shouldNotWriteState() {
    let dir = common::create_temp_dir().unwrap();
    let srt = common::create_test_file(dir.path(), "movie.srt", SAMPLE_SRT).unwrap();
    let controller = Controller::new_for_test();

    let result = controller
        .translate_file_with(&srt, &dir.path().join("state"), &MockProvider::failing())
        .await;

    assert!(result.is_err());
    assert!(!dir.path().join("state").exists());
}
