/*!
 * Tests for the proportional line splitter
 */

use srtsync::alignment::{split_line_set, split_ratio, split_steps};

const SET_TEXT: &str = "Creo que deberíamos irnos ya, antes de que oscurezca.";

#[test]
fn test_splitSteps_shouldCarryExcessIntoLastLine() {
    let steps = split_steps(SET_TEXT, &[28, 20]);

    assert_eq!(steps[0].text, "Creo que deberíamos irnos ya,");
    assert!((steps[0].target - 52.0 * 28.0 / 48.0).abs() < 1e-9);
    assert!((steps[0].excess - (29.0 - steps[0].target)).abs() < 1e-9);

    assert_eq!(steps[1].text, "antes de que oscurezca.");
    assert!((steps[1].target - 23.0).abs() < 1e-9);
    assert!((steps[1].excess - 1.0).abs() < 1e-9);
}

#[test]
fn test_splitLineSet_shouldKeepEveryWordInOrder() {
    let text = "Esta es una frase bastante larga que hay que repartir entre varias líneas del subtítulo";
    let lengths = [12, 0, 30, 7, 25];
    let lines = split_line_set(text, &lengths);

    assert_eq!(lines.len(), lengths.len());
    assert_eq!(lines[1], "");
    let rejoined: Vec<&str> = lines.iter().map(String::as_str).filter(|l| !l.is_empty()).collect();
    assert_eq!(rejoined.join(" "), text);
}

#[test]
fn test_splitLineSet_twice_shouldBeIdentical() {
    let lengths = [28, 20];
    assert_eq!(split_line_set(SET_TEXT, &lengths), split_line_set(SET_TEXT, &lengths));
}

#[test]
fn test_splitLineSet_emptyText_shouldEmitEmptyLines() {
    assert_eq!(split_line_set("", &[10, 10]), vec!["", ""]);
}

#[test]
fn test_splitLineSet_allBlankOriginals_shouldGiveTextToFinalLine() {
    assert_eq!(split_line_set("texto suelto", &[0, 0]), vec!["", "texto suelto"]);
    assert_eq!(split_ratio("texto suelto", &[0, 0]), 0.0);
}
