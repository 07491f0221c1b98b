use crate::error::ConfigError;
use crate::page::{default_page, default_page_size, PageRequest};
use serde::Deserialize;
use std::path::Path;

/// Defaults applied to page requests that leave fields out.
///
/// Read from the `pagination` section of a YAML document:
///
/// ```yaml
/// pagination:
///   default_page_size: 25
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PagingConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

impl PagingConfig {
    /// Parse the `pagination` section out of a YAML string.
    ///
    /// A document without that section yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let doc: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Load(e.to_string()))?;
        match doc.get("pagination") {
            Some(section) if !section.is_null() => serde_yaml::from_value(section.clone())
                .map_err(|e| ConfigError::Load(e.to_string())),
            _ => Ok(Self::default()),
        }
    }

    /// Load from a YAML file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no paging config file, using defaults");
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Load(e.to_string()))?;
        Self::from_yaml_str(&content)
    }

    /// Build a request, filling omitted values with page 1 and the
    /// configured page size.
    pub fn request(&self, page: Option<i64>, size: Option<i64>) -> PageRequest {
        PageRequest::new(
            page.unwrap_or_else(default_page),
            size.unwrap_or(self.default_page_size),
        )
    }
}
