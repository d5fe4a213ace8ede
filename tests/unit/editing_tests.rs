/*!
 * Tests for the line set edit operations
 */

use srtsync::alignment::LineSetKind;
use srtsync::app_controller::EditCommand;
use srtsync::subtitle_file::SubtitleFile;
use srtsync::text_utils::join_strings;
use srtsync::SubtitleBlock;

use crate::common::{aligned_sample, total_set_words};

#[test]
fn test_moveWordsToNext_moreThanAvailable_shouldClampAndEmptySource() {
    let mut file = aligned_sample();
    assert_eq!(file.translated_words_in_line_set(1), Some(7));

    file.move_words_to_next(1, 100);

    assert_eq!(file.line_set_text(1), Some(""));
    assert_eq!(
        file.line_set_text(2),
        Some("Buenos días a todos. ¿Cómo están hoy? Mister Anderson Smithers")
    );
    assert_eq!(file.translated_line(1), Some(""));
    assert_eq!(file.translated_line(2), Some(""));
    assert_eq!(file.line_sets()[2].kind, LineSetKind::Inexact);
    assert!(file.is_consistent());
}

#[test]
fn test_moveWordsToPrevious_shouldConserveWordCount() {
    let mut file = aligned_sample();
    let total = total_set_words(&file);
    let (before_prev, before_src) = (
        file.translated_words_in_line_set(2).unwrap(),
        file.translated_words_in_line_set(3).unwrap(),
    );

    file.move_words_to_previous(3, 2);

    assert_eq!(file.translated_words_in_line_set(2), Some(before_prev + 2));
    assert_eq!(file.translated_words_in_line_set(3), Some(before_src - 2));
    assert_eq!(file.line_set_text(2), Some("Mister Anderson Smithers Creo que"));
    assert_eq!(total_set_words(&file), total);
    assert!(!file.line_sets()[2].is_exact());
    assert!(file.is_consistent());
}

#[test]
fn test_moveLinesToPrevious_shouldMoveTheWordsOfThoseLines() {
    let mut file = aligned_sample();
    let moved = file.translated_words_in_line(1).unwrap();

    file.move_lines_to_previous(1, 1);

    assert_eq!(file.line_set_text(0), Some("[Música dramática] Buenos días a todos."));
    assert_eq!(file.translated_words_in_line_set(1), Some(7 - moved));
    assert_eq!(file.line_sets()[1].init_line, 1);
    assert!(file.is_consistent());
}

#[test]
fn test_moveLinesToNext_moreLinesThanSet_shouldMoveWholeSet() {
    let mut file = aligned_sample();

    file.move_lines_to_next(1, 10);

    assert_eq!(file.line_set_text(1), Some(""));
    assert_eq!(file.lines_in_line_set(1), Some(2));
    assert!(file.is_consistent());
}

#[test]
fn test_edits_atBoundaries_shouldBeNoOps() {
    let original = aligned_sample();
    let last = original.num_line_sets() - 1;
    let mut file = original.clone();

    file.move_lines_to_previous(0, 1);
    file.move_words_to_previous(0, 3);
    file.move_lines_to_next(last, 1);
    file.move_words_to_next(last, 1);
    file.move_words_to_next(1, 0);
    file.move_words_to_previous(99, 1);
    file.merge_with_previous(0);
    file.merge_with_next(last);
    file.split_line_set_at(0, 0);
    file.split_line_set_at(1, 1);
    file.split_line_set_at(1, 3);
    file.split_line_set_at(42, 1);
    file.move_word_from_line_to_previous(99);

    assert_eq!(file, original);
}

#[test]
fn test_moveWordFromLineToNext_insideSet_shouldNotResplit() {
    let mut file = aligned_sample();

    file.move_word_from_line_to_next(1);

    assert_eq!(file.translated_line(1), Some("Buenos días a"));
    assert_eq!(file.translated_line(2), Some("todos. ¿Cómo están hoy?"));
    assert_eq!(file.line_set_text(1), Some("Buenos días a todos. ¿Cómo están hoy?"));
    assert!(file.is_consistent());
}

#[test]
fn test_moveWordFromLineToPrevious_insideSet_shouldMoveLeadingWord() {
    let mut file = aligned_sample();

    file.move_word_from_line_to_previous(2);

    assert_eq!(file.translated_line(1), Some("Buenos días a todos. ¿Cómo"));
    assert_eq!(file.translated_line(2), Some("están hoy?"));
    assert!(file.is_consistent());
}

#[test]
fn test_moveWordFromLineToPrevious_onFirstLineOfSet_shouldMoveToPreviousSet() {
    let mut file = aligned_sample();

    file.move_word_from_line_to_previous(1);

    assert_eq!(file.line_set_text(0), Some("[Música dramática] Buenos"));
    assert_eq!(file.line_set_text(1), Some("días a todos. ¿Cómo están hoy?"));
    assert!(file.is_consistent());
}

#[test]
fn test_splitLineSetAt_shouldPartitionTextByCurrentLines() {
    let mut file = aligned_sample();

    file.split_line_set_at(3, 6);

    assert_eq!(file.num_line_sets(), 5);
    let head = &file.line_sets()[3];
    let tail = &file.line_sets()[4];
    assert_eq!((head.init_line, head.last_line), (5, 5));
    assert_eq!((tail.init_line, tail.last_line), (6, 6));
    assert_eq!(head.text, "Creo que deberíamos irnos ya,");
    assert_eq!(tail.text, "antes de que oscurezca.");
    assert_eq!(head.kind, LineSetKind::Inexact);
    assert!(file.is_consistent());
}

#[test]
fn test_splitLineSetAt_threeLineSet_shouldGiveTailItsTwoLines() {
    let mut file = SubtitleFile::new();
    file.load_original(
        vec![SubtitleBlock::new("1", "00:00:01,000 --> 00:00:04,000", 4)],
        ["This line stays the same", "first untranslated", "second untranslated", "third untranslated"]
            .iter()
            .map(|l| l.to_string())
            .collect(),
    );
    file.set_translated_text("This line stays the same primera línea segunda línea tercera línea");
    assert_eq!(file.lines_in_line_set(1), Some(3));
    let lines = file.translated_lines().to_vec();

    file.split_line_set_at(1, 2);

    assert_eq!(file.num_line_sets(), 3);
    let head = &file.line_sets()[1];
    let tail = &file.line_sets()[2];
    assert_eq!((head.init_line, head.last_line), (1, 1));
    assert_eq!((tail.init_line, tail.last_line), (2, 3));
    assert_eq!(head.text, lines[1]);
    assert_eq!(tail.text, join_strings(&lines[2..4]));
    assert_eq!(file.translated_lines(), lines.as_slice());
    assert!(file.is_consistent());
}

#[test]
fn test_mergeWithPrevious_twoExactSets_shouldStayExact() {
    let mut file = aligned_sample();
    file.split_line_set_at(2, 4);
    assert!(file.line_sets()[3].is_exact());

    file.merge_with_previous(3);

    assert_eq!(file.num_line_sets(), 4);
    assert!(file.line_sets()[2].is_exact());
    assert_eq!(file.line_set_text(2), Some("Mister Anderson Smithers"));
}

#[test]
fn test_mergeWithNext_exactAndInexact_shouldBecomeInexact() {
    let mut file = aligned_sample();
    let lines_before = file.translated_lines().to_vec();

    file.merge_with_next(0);

    let merged = &file.line_sets()[0];
    assert_eq!((merged.init_line, merged.last_line), (0, 2));
    assert_eq!(merged.kind, LineSetKind::Inexact);
    assert_eq!(merged.text, "[Música dramática] Buenos días a todos. ¿Cómo están hoy?");
    assert_eq!(file.translated_lines(), lines_before.as_slice());
    assert!(file.is_consistent());
}

#[test]
fn test_editCommand_split_shouldResplitBothHalves() {
    let mut file = aligned_sample();

    EditCommand::Split { line_set: 1, break_line: 2 }.apply(&mut file);

    assert_eq!(file.num_line_sets(), 5);
    assert_eq!(file.translated_line(1), Some("Buenos días a todos."));
    assert_eq!(file.translated_line(2), Some("¿Cómo están hoy?"));
    assert!(file.is_consistent());
}

#[test]
fn test_editCommand_setText_shouldRebuildFlatText() {
    let mut file = aligned_sample();

    EditCommand::SetText {
        line_set: 3,
        text: "Vámonos antes de que anochezca.".to_string(),
    }
    .apply(&mut file);

    assert!(file.translated_text().ends_with("Vámonos antes de que anochezca."));
    assert!(file.is_consistent());
}
