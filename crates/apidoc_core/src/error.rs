use thiserror::Error;

/// A conversion result whose metadata cannot produce a valid header.
///
/// `index` is the position of the offending result in the input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontMatterError {
    #[error("result {index}: python_api_name is present but empty")]
    EmptyApiName { index: usize },
    #[error("result {index}: python_api_type is missing for {api_name}")]
    MissingApiType { index: usize, api_name: String },
}

impl FrontMatterError {
    pub fn index(&self) -> usize {
        match self {
            FrontMatterError::EmptyApiName { index }
            | FrontMatterError::MissingApiType { index, .. } => *index,
        }
    }
}
