//! Reading match reports from disk.
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::report::Report;

/// Errors raised while loading a report file. Both variants name the file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read report {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse report {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the file that could not be loaded.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// Load a single report file.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read and
/// [`LoadError::Parse`] if its contents are not valid JSON.
pub fn load_report(path: &Path) -> Result<Report, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let report = Report::from_json(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "loaded {} ({} rounds, winner {:?})",
        path.display(),
        report.round_count(),
        report.winner
    );
    Ok(report)
}

/// Load every report in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first [`LoadError`] encountered; later files are not read.
pub fn load_reports<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Report>, LoadError> {
    paths.iter().map(|path| load_report(path.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Side;

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "cclemon-loader-{label}-{}.json",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn missing_file_reports_path() {
        let path = temp_path("missing");
        let err = load_report(&path).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = temp_path("malformed");
        fs::write(&path, "{ not json").unwrap();
        let err = load_report(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn loads_reports_in_order() {
        let first = temp_path("first");
        let second = temp_path("second");
        fs::write(&first, r#"{ "winner": "右", "history": [] }"#).unwrap();
        fs::write(&second, r#"{ "winner": "左" }"#).unwrap();

        let reports = load_reports(&[&first, &second]).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].winner, Some(Side::Right));
        assert_eq!(reports[1].winner, Some(Side::Left));

        let _ = fs::remove_file(first);
        let _ = fs::remove_file(second);
    }

    #[test]
    fn stops_at_first_failure() {
        let good = temp_path("good");
        let missing = temp_path("absent");
        fs::write(&good, "{}").unwrap();
        let err = load_reports(&[&good, &missing]).unwrap_err();
        assert_eq!(err.path(), missing.as_path());
        let _ = fs::remove_file(good);
    }
}
