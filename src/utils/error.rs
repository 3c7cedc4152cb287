//! Error types for the asset optimizer.
//!
//! Every failure aborts the run, so a single flat enum is enough. Each variant
//! carries the path that was being worked on.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for the optimizer.
#[derive(Error, Debug)]
pub enum OptimizerError {
    /// Filesystem access failed
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file could not be read as an image
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Re-encoding the image failed
    #[error("Failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// Unsupported or missing file extension
    #[error("Format error: {0}")]
    Format(String),

    /// The progress report could not be written
    #[error("Failed to write report: {0}")]
    Report(#[source] io::Error),
}

/// Convenience result type for optimizer operations.
pub type OptimizerResult<T> = Result<T, OptimizerError>;

// Helper methods for error creation
impl OptimizerError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn decode(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        // The image crate reports plain read failures as ImageError::IoError;
        // keep those classified as IO so permission problems read as such.
        match source {
            image::ImageError::IoError(err) => Self::io(path, err),
            other => Self::Decode {
                path: path.as_ref().to_path_buf(),
                source: other,
            },
        }
    }

    pub fn encode<T: Into<String>>(path: impl AsRef<Path>, msg: T) -> Self {
        Self::Encode {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
        }
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }

    /// Path the failing operation was working on, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::Decode { path, .. } | Self::Encode { path, .. } => {
                Some(path)
            }
            Self::Format(_) | Self::Report(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn io_errors_from_the_decoder_stay_io() {
        let err = OptimizerError::decode(
            "cover.png",
            image::ImageError::IoError(io::Error::from(io::ErrorKind::PermissionDenied)),
        );
        assert!(matches!(err, OptimizerError::Io { .. }));
        assert_eq!(Some(Path::new("cover.png")), err.path());
    }

    #[rstest]
    fn messages_name_the_path() {
        let err = OptimizerError::encode("assets/covers/a.webp", "out of memory");
        assert_eq!(
            "Failed to encode assets/covers/a.webp: out of memory",
            err.to_string()
        );
    }
}
