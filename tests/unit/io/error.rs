//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use pixelart::PixelArtError;
    use pixelart::io::error::{WithPath, invalid_argument};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = PixelArtError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(invalid_argument("colors", &1, &"too small").source().is_none());
    }

    // Tests InvalidArgument error formatting
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_argument_display() {
        let error = invalid_argument("pixel_size", &0, &"must be at least 1");
        let message = error.to_string();

        assert!(message.contains("pixel_size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be at least 1"));
        assert!(error.is_invalid_argument());
    }

    // Tests FileSystem error formatting includes path and operation
    // Verified by omitting operation from message
    #[test]
    fn test_file_system_display() {
        let error = PixelArtError::FileSystem {
            path: PathBuf::from("/out/art.png"),
            operation: "create directory",
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();

        assert!(message.contains("create directory"));
        assert!(message.contains("/out/art.png"));
        assert!(!error.is_invalid_argument());
    }

    // Tests with_path leaves explicit paths alone
    // Verified by overwriting every path
    #[test]
    fn test_with_path_keeps_explicit_path() {
        let result: Result<(), PixelArtError> = Err(PixelArtError::FileSystem {
            path: PathBuf::from("explicit"),
            operation: "read",
            source: std::io::Error::other("boom"),
        });

        match result.with_path(Path::new("other")).unwrap_err() {
            PixelArtError::FileSystem { path, .. } => assert_eq!(path, PathBuf::from("explicit")),
            other => unreachable!("Expected FileSystem error, got {other}"),
        }
    }

    // Tests image errors convert with a placeholder path that with_path fills
    // Verified by skipping the ImageLoad variant in with_path
    #[test]
    fn test_image_error_conversion() {
        let decode = image::load_from_memory(b"not an image").unwrap_err();
        let result: Result<(), image::ImageError> = Err(decode);

        match result.with_path(Path::new("cat.png")).unwrap_err() {
            PixelArtError::ImageLoad { path, .. } => assert_eq!(path, PathBuf::from("cat.png")),
            other => unreachable!("Expected ImageLoad error, got {other}"),
        }
    }
}
