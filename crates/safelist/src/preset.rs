//! Ready-made features for common policy fragments.
//!
//! | Preset | Grants |
//! |---|---|
//! | [`css`] | `<style>`, `class` and `style` on every tag |
//! | [`document`] | document skeleton tags and `<meta>` attributes |
//! | [`links`] | `<a href>` with `rel="nofollow"` enforced |
//! | [`tables`] | table structure tags and cell attributes |

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::FeatureError;
use crate::feature::{ALL_TAGS, Feature};

/// A named preset feature.
///
/// Names round-trip through [`Display`](std::fmt::Display) and
/// [`FromStr`](std::str::FromStr) as `css`, `document`, `links` and
/// `tables`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Inline styling: see [`css`].
    Css,
    /// Whole-document markup: see [`document`].
    Document,
    /// Hyperlinks: see [`links`].
    Links,
    /// Tables: see [`tables`].
    Tables,
}

impl Preset {
    /// Build a fresh instance of this preset.
    ///
    /// # Panics
    ///
    /// Never in practice: preset definitions only pass non-empty literals.
    #[must_use]
    pub fn feature(self) -> Feature {
        let built = match self {
            Self::Css => css_feature(),
            Self::Document => document_feature(),
            Self::Links => links_feature(),
            Self::Tables => tables_feature(),
        };
        built.unwrap_or_else(|err| unreachable!("{self} preset is malformed: {err}"))
    }

    /// One-line summary of what the preset grants.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Css => "<style> blocks plus class and style on every tag",
            Self::Document => "html, head, body, title and meta with its attributes",
            Self::Links => "<a href> over ftp, http, https and mailto, forced rel=nofollow",
            Self::Tables => "table structure with cell span, header and scope attributes",
        }
    }
}

impl From<Preset> for Feature {
    fn from(preset: Preset) -> Self {
        preset.feature()
    }
}

/// `<style>` elements, and `class`/`style` attributes on every tag.
#[must_use]
pub fn css() -> Feature {
    Preset::Css.feature()
}

/// `<html>`, `<head>`, `<body>`, `<title>` and `<meta>` with its
/// `charset`, `content`, `http-equiv` and `name` attributes.
#[must_use]
pub fn document() -> Feature {
    Preset::Document.feature()
}

/// `<a href>` limited to `ftp`, `http`, `https` and `mailto` URLs, with
/// `rel="nofollow"` always applied.
#[must_use]
pub fn links() -> Feature {
    Preset::Links.feature()
}

/// Table structure tags with the span and header attributes of `<td>` and
/// `<th>`.
#[must_use]
pub fn tables() -> Feature {
    Preset::Tables.feature()
}

fn css_feature() -> Result<Feature, FeatureError> {
    Ok(Feature::builder()
        .allow_tags(["style"])?
        .allow_attributes(ALL_TAGS, ["class", "style"])?
        .build())
}

fn document_feature() -> Result<Feature, FeatureError> {
    Ok(Feature::builder()
        .allow_tags(["body", "head", "html", "meta", "title"])?
        .allow_attributes("meta", ["charset", "content", "http-equiv", "name"])?
        .build())
}

fn links_feature() -> Result<Feature, FeatureError> {
    Ok(Feature::builder()
        .allow_tags(["a"])?
        .allow_attributes("a", ["href"])?
        .enforce_attribute("a", "rel", "nofollow")?
        .allow_protocols("a", "href", ["ftp", "http", "https", "mailto"])?
        .build())
}

fn tables_feature() -> Result<Feature, FeatureError> {
    Ok(Feature::builder()
        .allow_tags(["table", "tbody", "td", "tfoot", "th", "thead", "tr"])?
        .allow_attributes("td", ["colspan", "headers", "rowspan"])?
        .allow_attributes("th", ["colspan", "headers", "rowspan", "scope", "sorted"])?
        .build())
}
