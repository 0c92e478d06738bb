//! Whitelist features and their construction protocol.
//!
//! A [`Feature`] is a bundle of sanitizer permissions: the tags it allows,
//! the attributes allowed per tag, attribute values that are always
//! enforced, and the URL schemes allowed on URL-valued attributes.
//!
//! Features are accumulated through a [`FeatureBuilder`] and frozen by
//! [`FeatureBuilder::build`]. A built feature has no mutating methods and is
//! `Send + Sync`, so it can be handed to any number of consumers.
//!
//! # Example
//! ```
//! use safelist::Feature;
//!
//! let feature = Feature::builder()
//!     .allow_tags(["img"])?
//!     .allow_attributes("img", ["src", "alt"])?
//!     .allow_protocols("img", "src", ["http", "https"])?
//!     .build();
//!
//! assert!(feature.allows_tag("img"));
//! # Ok::<(), safelist::FeatureError>(())
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::{Argument, FeatureError, all_not_empty, not_empty};

/// Wildcard tag key: attributes filed under it apply to every tag.
///
/// Features store it as an ordinary key; expanding it is up to the consumer
/// (see [`Whitelist::allowed_attributes`](crate::Whitelist::allowed_attributes)).
pub const ALL_TAGS: &str = ":all";

/// Set of tag names.
pub type TagSet = BTreeSet<String>;

/// Tag name to the attribute keys allowed on it.
pub type AttributeMap = BTreeMap<String, BTreeSet<String>>;

/// Tag name to attribute key to the value that attribute is forced to carry.
pub type EnforcedMap = BTreeMap<String, BTreeMap<String, String>>;

/// Tag name to attribute key to the URL schemes allowed in its value.
pub type ProtocolMap = BTreeMap<String, BTreeMap<String, BTreeSet<String>>>;

/// A built, read-only bundle of sanitizer permissions.
///
/// Equality compares all four collections as sets/maps, so the order of
/// non-conflicting builder calls does not matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Feature {
    tags: TagSet,
    attributes: AttributeMap,
    enforced: EnforcedMap,
    protocols: ProtocolMap,
}

/// An enforced value that was replaced while merging features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EnforcedOverride {
    pub(crate) tag: String,
    pub(crate) key: String,
    pub(crate) previous: String,
    pub(crate) value: String,
}

impl Feature {
    /// Start an empty builder.
    #[must_use]
    pub fn builder() -> FeatureBuilder {
        FeatureBuilder::new()
    }

    /// Tags this feature allows.
    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Attribute keys allowed per tag, including any [`ALL_TAGS`] entry.
    #[must_use]
    pub const fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Enforced attribute values per tag.
    #[must_use]
    pub const fn enforced(&self) -> &EnforcedMap {
        &self.enforced
    }

    /// Allowed URL schemes per tag and attribute.
    #[must_use]
    pub const fn protocols(&self) -> &ProtocolMap {
        &self.protocols
    }

    /// Whether `tag` is in the tag set.
    #[must_use]
    pub fn allows_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Attribute keys filed under exactly `tag`. The wildcard is not expanded.
    #[must_use]
    pub fn allowed_attributes(&self, tag: &str) -> Option<&BTreeSet<String>> {
        self.attributes.get(tag)
    }

    /// The value enforced on `tag`'s `key` attribute, if any.
    #[must_use]
    pub fn enforced_value(&self, tag: &str, key: &str) -> Option<&str> {
        self.enforced
            .get(tag)
            .and_then(|attrs| attrs.get(key))
            .map(String::as_str)
    }

    /// URL schemes allowed on `tag`'s `key` attribute, if any.
    #[must_use]
    pub fn allowed_protocols(&self, tag: &str, key: &str) -> Option<&BTreeSet<String>> {
        self.protocols.get(tag).and_then(|attrs| attrs.get(key))
    }

    /// Whether the feature grants nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
            && self.attributes.is_empty()
            && self.enforced.is_empty()
            && self.protocols.is_empty()
    }

    /// Union `other` into `self`.
    ///
    /// Sets are unioned. An enforced value already present for the same
    /// tag and key is replaced by `other`'s; every replacement that changed
    /// the value is returned.
    pub(crate) fn absorb(&mut self, other: &Self) -> Vec<EnforcedOverride> {
        self.tags.extend(other.tags.iter().cloned());

        for (tag, keys) in &other.attributes {
            self.attributes
                .entry(tag.clone())
                .or_default()
                .extend(keys.iter().cloned());
        }

        let mut overrides = Vec::new();
        for (tag, attrs) in &other.enforced {
            let target = self.enforced.entry(tag.clone()).or_default();
            for (key, value) in attrs {
                match target.insert(key.clone(), value.clone()) {
                    Some(previous) if previous != *value => overrides.push(EnforcedOverride {
                        tag: tag.clone(),
                        key: key.clone(),
                        previous,
                        value: value.clone(),
                    }),
                    _ => {}
                }
            }
        }

        for (tag, attrs) in &other.protocols {
            let target = self.protocols.entry(tag.clone()).or_default();
            for (key, schemes) in attrs {
                target
                    .entry(key.clone())
                    .or_default()
                    .extend(schemes.iter().cloned());
            }
        }

        overrides
    }
}

/// Accumulates permissions for a [`Feature`].
///
/// Every call validates all of its arguments before touching the builder, so
/// a rejected call adds nothing and keeps what earlier calls added. Calls
/// union into the existing state; nothing can be removed.
#[derive(Debug, Clone, Default)]
pub struct FeatureBuilder {
    feature: Feature,
}

impl FeatureBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow each of `tags`. An empty sequence is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::InvalidArgument`] if any tag name is empty.
    pub fn allow_tags<I>(&mut self, tags: I) -> Result<&mut Self, FeatureError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let tags = all_not_empty(tags, Argument::Tag, "allow_tags")?;
        self.feature.tags.extend(tags);
        Ok(self)
    }

    /// Allow `keys` as attributes of `tag`.
    ///
    /// Use [`ALL_TAGS`] as `tag` to allow the keys on every tag.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::InvalidArgument`] if `tag` or any key is empty.
    pub fn allow_attributes<I>(&mut self, tag: &str, keys: I) -> Result<&mut Self, FeatureError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        const OPERATION: &str = "allow_attributes";
        not_empty(tag, Argument::Tag, OPERATION)?;
        let keys = all_not_empty(keys, Argument::Key, OPERATION)?;

        self.feature
            .attributes
            .entry(tag.to_string())
            .or_default()
            .extend(keys);
        Ok(self)
    }

    /// Force attribute `key` on `tag` to always carry `value`.
    ///
    /// Several enforced attributes on the same tag accumulate. Enforcing the
    /// same key again replaces its value.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::InvalidArgument`] if `tag`, `key` or `value` is
    /// empty.
    pub fn enforce_attribute(
        &mut self,
        tag: &str,
        key: &str,
        value: &str,
    ) -> Result<&mut Self, FeatureError> {
        const OPERATION: &str = "enforce_attribute";
        not_empty(tag, Argument::Tag, OPERATION)?;
        not_empty(key, Argument::Key, OPERATION)?;
        not_empty(value, Argument::Value, OPERATION)?;

        let _ = self
            .feature
            .enforced
            .entry(tag.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(self)
    }

    /// Allow `protocols` as URL schemes for attribute `key` on `tag`.
    ///
    /// Schemes are stored as given, without a trailing `:`.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::InvalidArgument`] if `tag`, `key` or any
    /// protocol is empty.
    pub fn allow_protocols<I>(
        &mut self,
        tag: &str,
        key: &str,
        protocols: I,
    ) -> Result<&mut Self, FeatureError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        const OPERATION: &str = "allow_protocols";
        not_empty(tag, Argument::Tag, OPERATION)?;
        not_empty(key, Argument::Key, OPERATION)?;
        let protocols = all_not_empty(protocols, Argument::Protocol, OPERATION)?;

        self.feature
            .protocols
            .entry(tag.to_string())
            .or_default()
            .entry(key.to_string())
            .or_default()
            .extend(protocols);
        Ok(self)
    }

    /// Union an already built feature into this builder.
    ///
    /// Enforced values from `feature` replace any set earlier for the same
    /// tag and key.
    pub fn include(&mut self, feature: &Feature) -> &mut Self {
        let _ = self.feature.absorb(feature);
        self
    }

    /// Freeze the accumulated permissions into a [`Feature`].
    ///
    /// The builder is left as it was and may keep growing.
    #[must_use]
    pub fn build(&self) -> Feature {
        self.feature.clone()
    }
}
