//! Error types for configuration loading, style sinks and context lookup.

use std::path::{Path, PathBuf};

/// Errors produced by the typography facade.
///
/// Resolution and generation never fail; errors only come from reading
/// configuration, writing to a style sink, or looking up an instance that
/// was never installed.
#[derive(Debug, thiserror::Error)]
pub enum TypographyError {
    /// No ancestor context provided a typography instance.
    #[error("use_typography() must be used after create_typography() has been called")]
    NotInstalled,

    /// Configuration content could not be parsed.
    #[error("Failed to parse typography config{}: {message}", location(.path))]
    Parse {
        /// Source file, when parsing a file.
        path: Option<PathBuf>,
        /// Message from the YAML/JSON parser.
        message: String,
    },

    /// Configuration could not be read.
    #[error("Failed to load typography config: {message}")]
    Load { message: String },

    /// A style sink failed to create or write a style resource.
    #[error("Style sink failed for '{id}': {source}")]
    Sink {
        /// Stylesheet identifier of the resource.
        id: String,
        #[source]
        source: std::io::Error,
    },
}

impl TypographyError {
    /// Create a parse error without a source path.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            path: None,
            message: message.into(),
        }
    }

    /// Attach a source path to a parse error; other variants are unchanged.
    pub fn at_path(self, path: &Path) -> Self {
        match self {
            Self::Parse { message, .. } => Self::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}
