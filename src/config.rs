//! Configuration loaded from an optional TOML file
//!
//! ```toml
//! default_tag = "section"
//! element_placeholder = "element"
//! class_attributes = ["className"]
//! stylesheet_extension = "module.scss"
//! quote_style = "double"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{BemError, Result};

/// Extension used when synthesizing a stylesheet module import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum StylesheetExtension {
    #[serde(rename = "module.css", alias = "css")]
    Css,
    #[default]
    #[serde(rename = "module.scss", alias = "scss")]
    Scss,
    #[serde(rename = "module.sass", alias = "sass")]
    Sass,
}

impl StylesheetExtension {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Css => ".module.css",
            Self::Scss => ".module.scss",
            Self::Sass => ".module.sass",
        }
    }
}

/// Quote character used in synthesized import statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    pub fn as_char(&self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tag emitted by the full-element template
    pub default_tag: String,
    /// Default text of the element placeholder
    pub element_placeholder: String,
    /// Attribute names scanned for block names on ancestor elements
    pub class_attributes: Vec<String>,
    pub stylesheet_extension: StylesheetExtension,
    pub quote_style: QuoteStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_tag: "div".to_string(),
            element_placeholder: "element".to_string(),
            class_attributes: vec!["className".to_string()],
            stylesheet_extension: StylesheetExtension::default(),
            quote_style: QuoteStyle::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Err(BemError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml(&text).map_err(|e| match e {
            BemError::Config { message } => BemError::Config {
                message: format!("{}: {}", path.display(), message),
            },
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| BemError::Config {
            message: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.default_tag.trim().is_empty() {
            return Err(BemError::Config {
                message: "default_tag must not be empty".to_string(),
            });
        }
        if self.class_attributes.is_empty() {
            return Err(BemError::Config {
                message: "class_attributes must name at least one attribute".to_string(),
            });
        }
        Ok(())
    }
}
