/*!
 * Tests for language utility functions
 */

use srtsync::language_utils::{get_language_name, language_codes_match, normalize_to_part2t};

#[test]
fn test_normalizeToPart2t_withValidCodes_shouldNormalizeCorrectly() {
    assert_eq!(normalize_to_part2t("en").unwrap(), "eng");
    assert_eq!(normalize_to_part2t("fra").unwrap(), "fra");
    assert_eq!(normalize_to_part2t("ger").unwrap(), "deu");
    assert_eq!(normalize_to_part2t(" ES ").unwrap(), "spa");
    assert!(normalize_to_part2t("e").is_err());
}

#[test]
fn test_getLanguageName_shouldReturnEnglishName() {
    assert_eq!(get_language_name("es").unwrap(), "Spanish");
    assert_eq!(get_language_name("deu").unwrap(), "German");
    assert!(get_language_name("zz").is_err());
}

#[test]
fn test_languageCodesMatch_acrossFormats_shouldMatch() {
    assert!(language_codes_match("fr", "fre"));
    assert!(language_codes_match("en", "ENG"));
    assert!(!language_codes_match("fr", "de"));
}
