//! Typed, recoverable errors for the processing engine.
//!
//! Every failure is scoped: a decode failure leaves the previous session
//! state valid, an operator failure is confined to that one invocation, and
//! an export failure is confined to one output file. Nothing here ever
//! terminates the process.

use std::path::PathBuf;

use thiserror::Error;

/// All error kinds surfaced by the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Image bytes could not be decoded. `path` is present when the bytes
    /// came from a file on disk.
    #[error("failed to decode image{}: {source}", fmt_origin(.path))]
    Decode {
        path: Option<PathBuf>,
        #[source]
        source: image::ImageError,
    },

    /// An operator or export was requested before a successful image load.
    #[error("no image loaded")]
    NoImageLoaded,

    /// One operator invocation failed; the session and cache are unaffected.
    #[error("operator {name:?} failed: {reason}")]
    Operator { name: String, reason: String },

    /// Writing one exported file failed; remaining files are still attempted.
    #[error("failed to write {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl EngineError {
    /// Convenience constructor for operator-scoped failures.
    pub fn operator(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Operator {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

fn fmt_origin(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" {}", p.display()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_message_includes_path_when_known() {
        let err = EngineError::Decode {
            path: Some(PathBuf::from("photos/broken.png")),
            source: image::ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "truncated",
            )),
        };
        let msg = err.to_string();
        assert!(msg.contains("photos/broken.png"), "message: {msg}");
    }

    #[test]
    fn operator_error_names_the_operator() {
        let err = EngineError::operator("Canny", "low threshold above high");
        assert!(err.to_string().contains("Canny"));
    }
}
