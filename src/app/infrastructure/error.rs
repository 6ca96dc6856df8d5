use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Nothing to export: output is empty")]
    NothingToExport,
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
        assert!(app_err.to_string().starts_with("JSON error: "));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Settings("unknown theme 'sepia'".to_string());
        assert_eq!(err.to_string(), "Settings error: unknown theme 'sepia'");

        let err = AppError::UnknownOperation("shout".to_string());
        assert_eq!(err.to_string(), "Unknown operation: shout");

        let err = AppError::NothingToExport;
        assert_eq!(err.to_string(), "Nothing to export: output is empty");
    }
}
