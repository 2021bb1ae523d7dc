//! Writing and verifying the generated file.

use std::path::Path;
use tracing::debug;

use crate::core::carrier::Carrier;
use crate::error::{OutputError, Result};

/// Ensure `text` ends with exactly one newline.
///
/// Empty text stays empty.
pub fn with_trailing_newline(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("{}\n", text.trim_end_matches(['\r', '\n']))
}

/// Write `text` to `path`, overwriting any existing file.
///
/// # Errors
///
/// Returns `OutputError::Write` on failure.
pub fn write(path: &Path, text: &str) -> Result<()> {
    let contents = with_trailing_newline(text);
    debug!(path = %path.display(), bytes = contents.len(), "writing output");

    std::fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Check generated text for a well-formed carrier line and no placeholder.
///
/// # Errors
///
/// Returns `OutputError::Malformed` with every line mentioning the key, or
/// `OutputError::PlaceholderRemains`.
pub fn check(text: &str, placeholder: &str, carrier: &Carrier) -> Result<()> {
    if !carrier.has_well_formed_line(text) {
        return Err(OutputError::Malformed {
            key: carrier.key().to_string(),
            offending: carrier.mentions(text),
        }
        .into());
    }

    if text.contains(placeholder) {
        return Err(OutputError::PlaceholderRemains(placeholder.to_string()).into());
    }

    Ok(())
}

/// Re-read `path` and check it.
///
/// A file that fails verification is left in place.
///
/// # Errors
///
/// Returns `OutputError::Missing`, `OutputError::Read` or any error from
/// [`check`].
pub fn verify(path: &Path, placeholder: &str, carrier: &Carrier) -> Result<()> {
    if !path.exists() {
        return Err(OutputError::Missing(path.to_path_buf()).into());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| OutputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "verifying output");
    check(&contents, placeholder, carrier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    const PLACEHOLDER: &str = "${D1_DATABASE_ID}";

    #[test]
    fn test_trailing_newline() {
        assert_eq!(with_trailing_newline("a"), "a\n");
        assert_eq!(with_trailing_newline("a\n"), "a\n");
        assert_eq!(with_trailing_newline("a\n\n\n"), "a\n");
        assert_eq!(with_trailing_newline("a\r\n"), "a\n");
        assert_eq!(with_trailing_newline(""), "");
    }

    #[test]
    fn test_write_and_verify() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wrangler.toml");

        write(&path, "[[d1_databases]]\n  database_id = \"abc\"").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[[d1_databases]]\n  database_id = \"abc\"\n"
        );
        verify(&path, PLACEHOLDER, &Carrier::default()).unwrap();
    }

    #[test]
    fn test_write_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wrangler.toml");
        std::fs::write(&path, "old contents that are longer\n").unwrap();

        write(&path, "database_id = \"new\"").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "database_id = \"new\"\n"
        );
    }

    #[test]
    fn test_write_into_missing_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("wrangler.toml");
        let err = write(&path, "database_id = \"x\"").unwrap_err();
        assert!(matches!(err, Error::Output(OutputError::Write { .. })));
    }

    #[test]
    fn test_verify_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = verify(&dir.path().join("nope.toml"), PLACEHOLDER, &Carrier::default())
            .unwrap_err();
        assert!(matches!(err, Error::Output(OutputError::Missing(_))));
    }

    #[test]
    fn test_check_malformed_reports_lines() {
        let text = "name = \"api\"\ndatabase_id = \"abc\" # trailing\n";
        match check(text, PLACEHOLDER, &Carrier::default()).unwrap_err() {
            Error::Output(OutputError::Malformed { offending, .. }) => {
                assert_eq!(
                    offending,
                    vec![(2, "database_id = \"abc\" # trailing".to_string())]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_check_placeholder_elsewhere() {
        let text = "database_id = \"abc\"\nother = \"${D1_DATABASE_ID}\"\n";
        let err = check(text, PLACEHOLDER, &Carrier::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Output(OutputError::PlaceholderRemains(_))
        ));
    }

    #[test]
    fn test_failed_verification_keeps_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wrangler.toml");
        std::fs::write(&path, "database_id = \"\"\n").unwrap();

        assert!(verify(&path, PLACEHOLDER, &Carrier::default()).is_err());
        assert!(path.exists());
    }
}
