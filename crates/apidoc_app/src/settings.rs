//! Pipeline settings: optional RON file, overridden by command line flags.

use std::fs;
use std::path::{Path, PathBuf};

use apidoc_logging::{LogDestination, DEFAULT_LOG_FILE};
use clap::Parser;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// JSON array of conversion results.
    pub input: Option<PathBuf>,
    /// Directory receiving one markdown file per page.
    pub output_dir: Option<PathBuf>,
    /// Where to write the transformed results as JSON.
    pub json_output: Option<PathBuf>,
    pub write_manifest: bool,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
    pub verbose: bool,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: None,
            json_output: None,
            write_manifest: true,
            log_destination: LogDestination::Terminal,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            verbose: false,
        }
    }
}

impl PipelineSettings {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

pub fn load_settings(path: &Path) -> Result<PipelineSettings, SettingsError> {
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Add API reference front matter to converted documentation pages.
#[derive(Debug, Parser)]
#[command(name = "apidoc", version)]
pub struct Cli {
    /// JSON file holding the conversion results.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Write one markdown page per result into this directory.
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
    /// Write the transformed results back as JSON.
    #[arg(long)]
    pub json_out: Option<PathBuf>,
    /// RON settings file; flags take precedence over its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Skip writing manifest.json next to the pages.
    #[arg(long)]
    pub no_manifest: bool,
    /// Where log output goes.
    #[arg(long, value_enum)]
    pub log: Option<LogArg>,
    /// Log file used by `--log file` and `--log both` (default ./apidoc.log).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogArg {
    Terminal,
    File,
    Both,
}

impl From<LogArg> for LogDestination {
    fn from(v: LogArg) -> Self {
        match v {
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::File => LogDestination::File,
            LogArg::Both => LogDestination::Both,
        }
    }
}

impl Cli {
    /// Loads the settings file, if any, and applies flags on top.
    pub fn into_settings(self) -> Result<PipelineSettings, SettingsError> {
        let base = match &self.config {
            Some(path) => load_settings(path)?,
            None => PipelineSettings::default(),
        };
        Ok(self.apply_to(base))
    }

    fn apply_to(self, mut settings: PipelineSettings) -> PipelineSettings {
        if let Some(input) = self.input {
            settings.input = Some(input);
        }
        if let Some(out_dir) = self.out_dir {
            settings.output_dir = Some(out_dir);
        }
        if let Some(json_out) = self.json_out {
            settings.json_output = Some(json_out);
        }
        if self.no_manifest {
            settings.write_manifest = false;
        }
        if let Some(log) = self.log {
            settings.log_destination = log.into();
        }
        if let Some(log_file) = self.log_file {
            settings.log_file = log_file;
        }
        settings.verbose |= self.verbose;
        settings
    }
}
