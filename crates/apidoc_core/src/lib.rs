//! Apidoc core: conversion result model and pure front matter transformation.
mod error;
mod frontmatter;
mod identifier;
mod types;

pub use error::FrontMatterError;
pub use frontmatter::{add_front_matter, FrontMatter, IN_PAGE_TOC_MIN_HEADING_LEVEL};
pub use identifier::last_part_from_full_identifier;
pub use types::{ConversionResult, ResultMeta};
