//! Loading INI configuration from disk

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use camino::Utf8Path;
use quill_core::{Configuration, QuillError};
use tracing::debug;

use crate::parser::{parse, parse_async};
use crate::ConfigResult;

/// Open `path` and parse its contents.
///
/// The file handle is released when this returns, whichever way it returns.
pub fn parse_file(path: impl AsRef<Path>) -> ConfigResult<Configuration> {
    let path = path.as_ref();
    debug!("Parsing INI file: {}", path.display());

    let file = File::open(path)
        .map_err(|e| QuillError::io(format!("Failed to open {}", path.display()), e))?;

    let config = parse(BufReader::new(file)).map_err(|e| in_file(e, &path.display()))?;
    debug!("Parsed {} section(s) from {}", config.len(), path.display());

    Ok(config)
}

/// Load and parse an INI file asynchronously
pub async fn load_from_file(path: &Utf8Path) -> ConfigResult<Configuration> {
    debug!("Loading INI file: {}", path);

    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| QuillError::io(format!("Failed to open {}", path), e))?;

    let config = parse_async(tokio::io::BufReader::new(file))
        .await
        .map_err(|e| in_file(e, &path))?;
    debug!("Parsed {} section(s) from {}", config.len(), path);

    Ok(config)
}

/// Name the file in IO messages; parse errors keep their exact line text
fn in_file(err: QuillError, path: &dyn std::fmt::Display) -> QuillError {
    match err {
        QuillError::Io { message, source } => {
            QuillError::io(format!("In file {}: {}", path, message), source)
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_parse_file() {
        let file = write_temp(b"[Database]\nhost = localhost\nport=5432 ; default port\n");

        let config = parse_file(file.path()).unwrap();
        assert_eq!(config.get("Database", "host "), Some("localhost"));
        assert_eq!(config.get("Database", "port"), Some("5432"));
    }

    #[test]
    fn test_parse_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.ini");

        let err = parse_file(&missing).unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("missing.ini"));
        match err {
            QuillError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            },
            other => panic!("Expected IO error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_file_malformed_line() {
        let file = write_temp(b"a = 1\nnot-a-valid-line-at-all\nb = 2\n");

        let err = parse_file(file.path()).unwrap_err();
        assert!(err.is_parse());
        assert_eq!(err.line(), Some("not-a-valid-line-at-all"));
    }

    #[test]
    fn test_parse_file_invalid_utf8_is_io_error() {
        let file = write_temp(b"a = 1\nb = \xff\xfe\n");

        let err = parse_file(file.path()).unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("In file"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let file = write_temp(b"timeout = 30\n[Network]\nretries = 3\n");
        let path = Utf8Path::from_path(file.path()).expect("temp path is UTF-8");

        let config = load_from_file(path).await.unwrap();
        assert_eq!(config.len(), 2);
        assert_eq!(config.get("General", "timeout "), Some("30"));
        assert_eq!(config.get("Network", "retries "), Some("3"));
    }

    #[tokio::test]
    async fn test_load_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.ini");
        let path = Utf8Path::from_path(&missing).expect("temp path is UTF-8");

        let err = load_from_file(path).await.unwrap_err();
        assert!(err.is_io());
    }
}
