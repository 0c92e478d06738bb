//! Composable whitelist features for HTML sanitizers.
//!
//! A sanitizer policy is assembled from small permission bundles called
//! features. Each [`Feature`] lists:
//! - **tags** that may survive sanitization
//! - **attributes** allowed per tag (the [`ALL_TAGS`] key applies to every tag)
//! - **enforced** attribute values written over whatever the input carried
//! - **protocols** (URL schemes) allowed in URL-valued attributes
//!
//! Features are built with a [`FeatureBuilder`], taken from the [`preset`]
//! module, or loaded from JSON with [`FeatureConfig`], then merged into a
//! [`Whitelist`] for the sanitizer to query.
//!
//! ```
//! use safelist::{Whitelist, preset};
//!
//! let whitelist: Whitelist = [preset::links(), preset::css()].into_iter().collect();
//!
//! assert!(whitelist.is_safe_attribute("a", "class"));
//! ```

mod config;
mod error;
mod feature;
pub mod preset;
mod whitelist;

pub use config::{FeatureConfig, FeatureConfigError, load_feature};
pub use error::{Argument, FeatureError};
pub use feature::{
    ALL_TAGS, AttributeMap, EnforcedMap, Feature, FeatureBuilder, ProtocolMap, TagSet,
};
pub use preset::Preset;
pub use whitelist::Whitelist;
