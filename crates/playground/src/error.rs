//! Playground error type
//!
//! The core library cannot fail; everything that can go wrong happens at the
//! edges (reading a scenario file, parsing it, rendering a report).

use std::path::PathBuf;

#[derive(Debug)]
pub enum PlaygroundError {
    /// Scenario file could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Scenario TOML is malformed or has unknown keys
    Parse(toml::de::Error),
    /// JSON report serialization failed
    Render(serde_json::Error),
}

impl std::fmt::Display for PlaygroundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaygroundError::Io { path, source } => {
                write!(f, "Failed to read scenario {}: {}", path.display(), source)
            }
            PlaygroundError::Parse(e) => write!(f, "Failed to parse scenario: {}", e),
            PlaygroundError::Render(e) => write!(f, "Failed to render report: {}", e),
        }
    }
}

impl std::error::Error for PlaygroundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaygroundError::Io { source, .. } => Some(source),
            PlaygroundError::Parse(e) => Some(e),
            PlaygroundError::Render(e) => Some(e),
        }
    }
}

impl From<toml::de::Error> for PlaygroundError {
    fn from(e: toml::de::Error) -> Self {
        PlaygroundError::Parse(e)
    }
}

impl From<serde_json::Error> for PlaygroundError {
    fn from(e: serde_json::Error) -> Self {
        PlaygroundError::Render(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_names_path() {
        let err = PlaygroundError::Io {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.toml"), "got: {}", msg);
        assert!(msg.contains("no such file"), "got: {}", msg);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parse_error_converts() {
        let toml_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err: PlaygroundError = toml_err.into();
        assert!(matches!(err, PlaygroundError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse scenario"));
    }
}
