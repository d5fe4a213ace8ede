/*!
 * Tests for the consistency checker
 */

use std::fs;

use srtsync::subtitle_file::persistence::TRANSLATED_LINES_FILE;
use srtsync::subtitle_file::SubtitleFile;

use crate::common::{aligned_sample, create_temp_dir};

#[test]
fn test_checkConsistency_afterAlignment_shouldPass() {
    let report = aligned_sample().check_consistency();
    assert!(report.is_consistent());
    assert!(report.mismatched_line_sets.is_empty());
    assert_eq!(report.to_string(), "consistent");
}

#[test]
fn test_checkConsistency_emptyFile_shouldPass() {
    assert!(SubtitleFile::new().is_consistent());
}

#[test]
fn test_checkConsistency_afterSetTextWithExtraSpacing_shouldPass() {
    let mut file = aligned_sample();
    file.set_translated_text_of_line_set(1, "BUENOS días   a todos. ¿Cómo están hoy?");
    assert!(file.is_consistent());
}

#[test]
fn test_checkConsistency_tamperedLine_shouldReportTheSet() {
    let dir = create_temp_dir().unwrap();
    aligned_sample().write_to_dir(dir.path()).unwrap();

    let path = dir.path().join(TRANSLATED_LINES_FILE);
    let mut lines: Vec<String> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    lines[5] = "Algo completamente distinto".to_string();
    fs::write(&path, serde_json::to_string(&lines).unwrap()).unwrap();

    let report = SubtitleFile::read_from_dir(dir.path()).unwrap().check_consistency();

    assert!(report.partition_ok);
    assert!(report.cardinality_ok);
    assert!(!report.lines_match_sets);
    assert!(report.sets_match_text);
    assert_eq!(report.mismatched_line_sets, vec![3]);
    assert!(report.to_string().starts_with("inconsistent:"));
}
