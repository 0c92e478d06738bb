//! Merging features into one sanitizer policy.
//!
//! The [`Whitelist`] is the consumer side of a [`Feature`]: it unions any
//! number of features and answers the lookups a sanitizer makes while
//! walking a document. Walking and stripping the document itself is the
//! sanitizer's job.

use std::collections::{BTreeMap, BTreeSet};

use safelist_common::warning::warn_once;
use serde::Serialize;

use crate::feature::{ALL_TAGS, Feature};
use crate::preset::Preset;

/// The union of every feature added to it.
///
/// Tags, attributes and protocols are merged as sets. If two features
/// enforce different values for the same tag and attribute, the feature
/// added last wins and a warning is printed once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Whitelist {
    policy: Feature,
}

impl Whitelist {
    /// Create a whitelist that allows nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a whitelist from the given presets.
    #[must_use]
    pub fn from_presets<I>(presets: I) -> Self
    where
        I: IntoIterator<Item = Preset>,
    {
        presets.into_iter().map(Preset::feature).collect()
    }

    /// Merge `feature` into the whitelist.
    pub fn add_feature(&mut self, feature: &Feature) -> &mut Self {
        for conflict in self.policy.absorb(feature) {
            warn_once(
                "Whitelist",
                &format!(
                    "enforced <{} {}=\"{}\"> overrides earlier \"{}\"",
                    conflict.tag, conflict.key, conflict.value, conflict.previous
                ),
            );
        }
        self
    }

    /// Whether `tag` may appear in sanitized output.
    #[must_use]
    pub fn is_safe_tag(&self, tag: &str) -> bool {
        self.policy.allows_tag(tag)
    }

    /// Whether attribute `key` may appear on `tag`, directly or through the
    /// [`ALL_TAGS`] wildcard.
    ///
    /// URL-valued attributes still need their value checked against
    /// [`allowed_protocols`](Self::allowed_protocols).
    #[must_use]
    pub fn is_safe_attribute(&self, tag: &str, key: &str) -> bool {
        [tag, ALL_TAGS].into_iter().any(|entry| {
            self.policy
                .allowed_attributes(entry)
                .is_some_and(|keys| keys.contains(key))
        })
    }

    /// Every attribute key allowed on `tag`, wildcard entries included.
    #[must_use]
    pub fn allowed_attributes(&self, tag: &str) -> BTreeSet<&str> {
        [tag, ALL_TAGS]
            .into_iter()
            .filter_map(|entry| self.policy.allowed_attributes(entry))
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Attributes forced onto `tag`, keyed by attribute name.
    #[must_use]
    pub fn enforced_attributes(&self, tag: &str) -> Option<&BTreeMap<String, String>> {
        self.policy.enforced().get(tag)
    }

    /// URL schemes allowed on `tag`'s `key` attribute.
    #[must_use]
    pub fn allowed_protocols(&self, tag: &str, key: &str) -> Option<&BTreeSet<String>> {
        self.policy.allowed_protocols(tag, key)
    }

    /// The merged policy as a single feature.
    #[must_use]
    pub const fn as_feature(&self) -> &Feature {
        &self.policy
    }
}

impl FromIterator<Feature> for Whitelist {
    fn from_iter<I: IntoIterator<Item = Feature>>(features: I) -> Self {
        let mut whitelist = Self::new();
        for feature in features {
            let _ = whitelist.add_feature(&feature);
        }
        whitelist
    }
}

impl Extend<Feature> for Whitelist {
    fn extend<I: IntoIterator<Item = Feature>>(&mut self, features: I) {
        for feature in features {
            let _ = self.add_feature(&feature);
        }
    }
}
