mod pipeline;
mod settings;

use std::process::ExitCode;

use apidoc_logging::{apidoc_error, apidoc_info, LogDestination};
use clap::Parser;

use crate::settings::Cli;

fn main() -> ExitCode {
    let settings = match Cli::parse().into_settings() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    apidoc_logging::initialize(
        settings.log_destination,
        settings.log_level(),
        &settings.log_file,
    );

    match pipeline::run(&settings) {
        Ok(summary) => {
            apidoc_info!(
                "Processed {} results ({} API pages)",
                summary.result_count,
                summary.api_result_count
            );
            if let Some(pages) = &summary.pages {
                apidoc_info!(
                    "{} pages written, manifest: {:?}",
                    pages.page_count,
                    pages.manifest_path
                );
            }
            if let Some(path) = &summary.json_output {
                apidoc_info!("Transformed results written to {:?}", path);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            apidoc_error!("{:#}", err);
            // The file logger alone would hide the failure from the caller.
            if settings.log_destination == LogDestination::File {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
