//! Apidoc engine: file IO around the front matter transformation.
mod export;
mod filename;
mod persist;
mod results;

pub use export::{write_pages, WriteError, WriteOptions, WriteSummary};
pub use filename::page_filename;
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use results::{load_results, save_results, LoadError};
