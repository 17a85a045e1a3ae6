use std::path::PathBuf;

use anyhow::{bail, Context};
use apidoc_core::add_front_matter;
use apidoc_engine::{load_results, save_results, write_pages, WriteOptions, WriteSummary};
use apidoc_logging::{apidoc_info, apidoc_warn};

use crate::settings::PipelineSettings;

#[derive(Debug)]
pub struct RunSummary {
    pub result_count: usize,
    pub api_result_count: usize,
    pub pages: Option<WriteSummary>,
    pub json_output: Option<PathBuf>,
}

/// Load results, add front matter, then write pages and/or JSON.
pub fn run(settings: &PipelineSettings) -> anyhow::Result<RunSummary> {
    let input = settings
        .input
        .as_deref()
        .context("no input file given (use --input or set `input` in the settings file)")?;
    if settings.output_dir.is_none() && settings.json_output.is_none() {
        bail!("nothing to write: pass --out-dir and/or --json-out");
    }

    let results = load_results(input)?;
    let api_result_count = results.iter().filter(|r| r.api_name().is_some()).count();
    if api_result_count == 0 {
        apidoc_warn!("No result in {:?} carries python_api_name", input);
    }
    let results = add_front_matter(results)
        .with_context(|| format!("cannot add front matter to results from {input:?}"))?;

    let pages = match &settings.output_dir {
        Some(dir) => {
            let options = if settings.write_manifest {
                WriteOptions::default()
            } else {
                WriteOptions {
                    manifest_filename: None,
                }
            };
            let summary = write_pages(dir, &results, &options)
                .with_context(|| format!("cannot write pages to {dir:?}"))?;
            Some(summary)
        }
        None => None,
    };

    let json_output = match &settings.json_output {
        Some(path) => Some(
            save_results(path, &results)
                .with_context(|| format!("cannot write results to {path:?}"))?,
        ),
        None => None,
    };

    apidoc_info!(
        "Added front matter to {} of {} results",
        api_result_count,
        results.len()
    );

    Ok(RunSummary {
        result_count: results.len(),
        api_result_count,
        pages,
        json_output,
    })
}
