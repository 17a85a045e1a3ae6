use std::collections::HashSet;
use std::path::{Path, PathBuf};

use apidoc_core::{last_part_from_full_identifier, ConversionResult};
use apidoc_logging::{apidoc_debug, apidoc_info};
use serde_json::json;

use crate::filename::page_filename;
use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Clone)]
pub struct WriteOptions {
    pub manifest_filename: Option<String>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            manifest_filename: Some("manifest.json".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub page_count: usize,
    pub api_page_count: usize,
    pub page_paths: Vec<PathBuf>,
    pub manifest_path: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("two pages map to the same file {0}")]
    DuplicateFilename(String),
    #[error("not a file path: {0:?}")]
    InvalidPath(PathBuf),
}

/// Writes one markdown file per result into `output_dir`, plus an optional
/// manifest describing every page.
///
/// Filenames are checked for collisions, ignoring case, before anything is
/// written.
pub fn write_pages(
    output_dir: &Path,
    results: &[ConversionResult],
    options: &WriteOptions,
) -> Result<WriteSummary, WriteError> {
    let filenames: Vec<String> = results
        .iter()
        .enumerate()
        .map(|(index, result)| page_filename(result, index))
        .collect();
    // Windows and macOS filesystems fold case by default.
    let manifest_key = options.manifest_filename.as_deref().map(str::to_lowercase);
    let mut seen = HashSet::with_capacity(filenames.len());
    for name in &filenames {
        let key = name.to_lowercase();
        if manifest_key.as_ref() == Some(&key) || !seen.insert(key) {
            return Err(WriteError::DuplicateFilename(name.clone()));
        }
    }

    let writer = AtomicFileWriter::create(output_dir)?;
    let mut page_paths = Vec::with_capacity(results.len());
    for (result, name) in results.iter().zip(&filenames) {
        let path = writer.write(name, &result.markdown)?;
        apidoc_debug!("Wrote page {:?}", path);
        page_paths.push(path);
    }

    let api_page_count = results.iter().filter(|r| r.api_name().is_some()).count();

    let manifest_path = match &options.manifest_filename {
        Some(name) => {
            let manifest = json!({
                "page_count": results.len(),
                "api_page_count": api_page_count,
                "pages": results.iter().zip(&filenames).map(|(result, filename)| {
                    json!({
                        "filename": filename,
                        "title": result.api_name().map(last_part_from_full_identifier),
                        "python_api_name": result.api_name(),
                        "python_api_type": result.api_type(),
                    })
                }).collect::<Vec<_>>()
            });
            Some(writer.write(name, &serde_json::to_string_pretty(&manifest)?)?)
        }
        None => None,
    };

    apidoc_info!(
        "Wrote {} pages ({} API pages) to {:?}",
        results.len(),
        api_page_count,
        output_dir
    );

    Ok(WriteSummary {
        page_count: results.len(),
        api_page_count,
        page_paths,
        manifest_path,
    })
}
