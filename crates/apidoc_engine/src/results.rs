use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use apidoc_core::ConversionResult;
use apidoc_logging::apidoc_info;
use thiserror::Error;

use crate::export::WriteError;
use crate::persist::AtomicFileWriter;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse conversion results in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON array of conversion results.
///
/// Every record must carry a `meta` object; a record without one fails the
/// whole load.
pub fn load_results(path: &Path) -> Result<Vec<ConversionResult>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let results: Vec<ConversionResult> =
        serde_json::from_str(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    apidoc_info!("Loaded {} conversion results from {:?}", results.len(), path);
    Ok(results)
}

/// Writes `results` as a pretty-printed JSON array to `path`.
pub fn save_results(path: &Path, results: &[ConversionResult]) -> Result<PathBuf, WriteError> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| WriteError::InvalidPath(path.to_path_buf()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let json = serde_json::to_string_pretty(results)?;
    let writer = AtomicFileWriter::create(dir)?;
    let written = writer.write(filename, &json)?;
    apidoc_info!("Wrote {} conversion results to {:?}", results.len(), written);
    Ok(written)
}
