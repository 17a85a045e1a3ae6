use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Keeps an explicit `null` apart from a missing key: a missing key stays
/// `None` through `#[serde(default)]`, `null` becomes `Some(None)`.
fn deserialize_explicit<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Metadata about the API entity a converted page documents.
///
/// Both fields are written back exactly as they were read: absent, `null` or
/// a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultMeta {
    #[serde(
        default,
        deserialize_with = "deserialize_explicit",
        skip_serializing_if = "Option::is_none"
    )]
    python_api_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_explicit",
        skip_serializing_if = "Option::is_none"
    )]
    python_api_type: Option<Option<String>>,
    /// Fields the converter attached that this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResultMeta {
    pub fn api(name: impl Into<String>, api_type: impl Into<String>) -> Self {
        Self {
            python_api_name: Some(Some(name.into())),
            python_api_type: Some(Some(api_type.into())),
            extra: Map::new(),
        }
    }

    /// Metadata naming an entity without saying what kind it is.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            python_api_name: Some(Some(name.into())),
            ..Self::default()
        }
    }

    /// `None` when the key is missing or `null`.
    pub fn python_api_name(&self) -> Option<&str> {
        self.python_api_name.as_ref()?.as_deref()
    }

    pub fn python_api_type(&self) -> Option<&str> {
        self.python_api_type.as_ref()?.as_deref()
    }
}

/// A converted page: markdown body plus metadata.
///
/// Upstream converters may attach further fields (`url`, `images`,
/// `isReleaseNotes`, ...). They are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub markdown: String,
    pub meta: ResultMeta,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConversionResult {
    pub fn new(markdown: impl Into<String>, meta: ResultMeta) -> Self {
        Self {
            markdown: markdown.into(),
            meta,
            extra: Map::new(),
        }
    }

    pub fn api_name(&self) -> Option<&str> {
        self.meta.python_api_name()
    }

    pub fn api_type(&self) -> Option<&str> {
        self.meta.python_api_type()
    }
}
