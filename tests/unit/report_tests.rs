/*!
 * Tests for the report printer
 */

use srtsync::report::{write_line_sets, write_numbered, write_report, write_side_by_side, ReportView};

use crate::common::aligned_sample;

fn render(view: ReportView) -> String {
    let mut out = Vec::new();
    write_report(&mut out, &aligned_sample(), view, 30).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_writeLineSets_shouldMarkExactAndInexactSets() {
    let mut out = Vec::new();
    write_line_sets(&mut out, &aligned_sample()).unwrap();
    let text = String::from_utf8(out).unwrap();
    let rows: Vec<&str> = text.lines().collect();

    assert_eq!(rows.len(), 4);
    assert!(rows[0].starts_with("Lineset 000=, lines: 0000-0000"));
    assert!(rows[1].starts_with("Lineset 001~, lines: 0001-0002, Words:    8/7   "));
    assert!(rows[2].ends_with("Txt: |>Mister Anderson Smithers<|"));
}

#[test]
fn test_writeNumbered_shouldPrefixLineIndex() {
    let mut out = Vec::new();
    write_numbered(&mut out, aligned_sample().translated_lines()).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("0000|[Música dramática]\n0001|Buenos días a todos.\n"));
    assert!(text.contains("0004|\n"));
}

#[test]
fn test_writeSideBySide_shouldPadAndTruncateColumns() {
    let mut out = Vec::new();
    write_side_by_side(&mut out, &aligned_sample(), 20).unwrap();
    let text = String::from_utf8(out).unwrap();
    let rows: Vec<&str> = text.lines().collect();

    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0], "000|0000|>[Dramatic music p...<|>[Música dramática]  <|");
    assert!(rows[6].starts_with("003|0006|>before it gets dark.<|>"));
}

#[test]
fn test_writeReport_split_shouldShowTargetAndExcess() {
    let text = render(ReportView::Split);
    let last = text.lines().last().unwrap();
    assert!(last.starts_with("003|0006|"));
    assert!(last.contains("0020 - 0023 (23.00/"));
}

#[test]
fn test_writeReport_translatedSrt_shouldRenderTranslatedLines() {
    let text = render(ReportView::TranslatedSrt);
    assert!(text.starts_with("1\n00:00:01,000 --> 00:00:03,000\n[Música dramática]\n\n"));
    assert!(text.ends_with("Creo que deberíamos irnos ya,\nantes de que oscurezca.\n\n"));
}

#[test]
fn test_writeReport_blocks_shouldListEveryBlock() {
    let text = render(ReportView::Blocks);
    assert_eq!(text.lines().count(), 5);
    assert!(text.contains("4|00:00:10,000 --> 00:00:12,000|01 lines|"));
}
