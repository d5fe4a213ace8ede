/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;

use srtsync::errors::{AppError, ProviderError, StateError, SubtitleError, TranslationError};

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 429,
        message: "Too many requests".to_string(),
    };
    let display = error.to_string();
    assert!(display.contains("429"));
    assert!(display.contains("Too many requests"));
}

#[test]
fn test_translationError_fromProviderError_shouldWrap() {
    let error: TranslationError = ProviderError::ConnectionError("Host unreachable".to_string()).into();
    assert!(matches!(error, TranslationError::Provider(ProviderError::ConnectionError(_))));
    assert!(error.to_string().contains("Host unreachable"));
}

#[test]
fn test_subtitleError_malformedBlock_shouldNameTheBlock() {
    let error = SubtitleError::MalformedBlock {
        block: 3,
        reason: "expected an order line and a timemark line".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Malformed subtitle block 3: expected an order line and a timemark line"
    );
}

#[test]
fn test_stateError_io_shouldKeepPathAndSource() {
    let error = StateError::Io {
        path: PathBuf::from("state/lineset.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };
    assert!(error.to_string().contains("state/lineset.json"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_appError_conversions_shouldPickVariant() {
    assert!(matches!(AppError::from(StateError::Corrupt("x".to_string())), AppError::State(_)));
    assert!(matches!(AppError::from(SubtitleError::Empty), AppError::Subtitle(_)));
    assert!(matches!(AppError::from(TranslationError::EmptyResponse), AppError::Translation(_)));
    assert!(matches!(
        AppError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk")),
        AppError::File(_)
    ));
    assert!(matches!(AppError::from(anyhow::anyhow!("boom")), AppError::Unknown(_)));
}
