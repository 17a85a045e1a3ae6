use apidoc_logging::{apidoc_debug, apidoc_trace};

use crate::error::FrontMatterError;
use crate::identifier::last_part_from_full_identifier;
use crate::types::ConversionResult;

/// Fixed `in_page_toc_min_heading_level` value written into every header.
pub const IN_PAGE_TOC_MIN_HEADING_LEVEL: u8 = 1;

/// The five-key header prepended to an API reference page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    pub title: &'a str,
    pub python_api_name: &'a str,
    pub python_api_type: &'a str,
}

impl<'a> FrontMatter<'a> {
    /// Header for `python_api_name`, titled with its last segment.
    pub fn for_api(python_api_name: &'a str, python_api_type: &'a str) -> Self {
        Self {
            title: last_part_from_full_identifier(python_api_name),
            python_api_name,
            python_api_type,
        }
    }

    /// Renders the delimited block, ending with the closing `---` line.
    pub fn render(&self) -> String {
        format!(
            "---\ntitle: {title}\ndescription: API reference for {name}\nin_page_toc_min_heading_level: {level}\npython_api_type: {api_type}\npython_api_name: {name}\n---\n",
            title = self.title,
            name = self.python_api_name,
            level = IN_PAGE_TOC_MIN_HEADING_LEVEL,
            api_type = self.python_api_type,
        )
    }

    /// Header, one blank line, `body`, trailing newline.
    pub fn prepend_to(&self, body: &str) -> String {
        format!(
            "{frontmatter}\n{body}\n",
            frontmatter = self.render(),
            body = body
        )
    }
}

/// Prepends front matter to every result that names an API entity.
///
/// Results without `python_api_name` pass through untouched; order and length
/// are preserved. The call fails on the first result with an empty API name
/// or a missing API type, returning no partial output.
///
/// Apply at most once per result: a second pass nests another header.
pub fn add_front_matter(
    results: Vec<ConversionResult>,
) -> Result<Vec<ConversionResult>, FrontMatterError> {
    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| with_front_matter(index, result))
        .collect()
}

fn with_front_matter(
    index: usize,
    mut result: ConversionResult,
) -> Result<ConversionResult, FrontMatterError> {
    let Some(api_name) = result.meta.python_api_name() else {
        apidoc_trace!("Result {} has no python_api_name, leaving it unchanged", index);
        return Ok(result);
    };
    if api_name.is_empty() {
        return Err(FrontMatterError::EmptyApiName { index });
    }
    let api_type = result.meta.python_api_type().ok_or_else(|| {
        FrontMatterError::MissingApiType {
            index,
            api_name: api_name.to_string(),
        }
    })?;

    apidoc_debug!("Adding front matter for {} ({})", api_name, api_type);
    let markdown = FrontMatter::for_api(api_name, api_type).prepend_to(&result.markdown);
    result.markdown = markdown;
    Ok(result)
}
