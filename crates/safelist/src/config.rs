//! JSON configuration for ad-hoc features.
//!
//! A feature file lists presets to start from and the extra permissions to
//! add on top of them. Every field is optional:
//!
//! ```json
//! {
//!   "presets": ["links"],
//!   "tags": ["img"],
//!   "attributes": { "img": ["src", "alt"] },
//!   "enforced": { "a": { "target": "_blank" } },
//!   "protocols": { "img": { "src": ["http", "https"] } }
//! }
//! ```
//!
//! The file is replayed through [`FeatureBuilder`], so it is held to the
//! same rules as code: an empty tag, key, value or protocol is rejected.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::FeatureError;
use crate::feature::{Feature, FeatureBuilder};
use crate::preset::Preset;

/// Errors from feature configuration loading.
#[derive(Error, Debug)]
pub enum FeatureConfigError {
    /// The file could not be read.
    #[error("failed to read feature file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a valid feature description.
    #[error("failed to parse feature JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The description parsed but names an empty tag, key, value or protocol.
    #[error("invalid feature: {0}")]
    Invalid(#[from] FeatureError),
}

/// A feature as written in a configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureConfig {
    /// Presets merged in before the explicit entries.
    #[serde(default)]
    pub presets: Vec<Preset>,

    /// Allowed tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Allowed attribute keys per tag (`":all"` for every tag).
    #[serde(default)]
    pub attributes: BTreeMap<String, Vec<String>>,

    /// Enforced attribute values per tag.
    #[serde(default)]
    pub enforced: BTreeMap<String, BTreeMap<String, String>>,

    /// Allowed URL schemes per tag and attribute.
    #[serde(default)]
    pub protocols: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl FeatureConfig {
    /// Load a feature description from a JSON file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, FeatureConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a feature description from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not a valid feature description.
    pub fn parse(content: &str) -> Result<Self, FeatureConfigError> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Build the described feature.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::InvalidArgument`] for the first empty tag,
    /// key, value or protocol.
    pub fn into_feature(self) -> Result<Feature, FeatureError> {
        let mut builder = FeatureBuilder::new();
        for preset in self.presets {
            let _ = builder.include(&preset.feature());
        }

        let _ = builder.allow_tags(self.tags)?;
        for (tag, keys) in self.attributes {
            let _ = builder.allow_attributes(&tag, keys)?;
        }
        for (tag, attrs) in self.enforced {
            for (key, value) in attrs {
                let _ = builder.enforce_attribute(&tag, &key, &value)?;
            }
        }
        for (tag, attrs) in self.protocols {
            for (key, schemes) in attrs {
                let _ = builder.allow_protocols(&tag, &key, schemes)?;
            }
        }

        Ok(builder.build())
    }
}

/// Load and build a feature from a JSON file in one step.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or describes an
/// invalid feature.
pub fn load_feature(path: &Path) -> Result<Feature, FeatureConfigError> {
    Ok(FeatureConfig::from_file(path)?.into_feature()?)
}
