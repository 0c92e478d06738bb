//! Tests for the preset features.

use std::collections::BTreeSet;
use std::str::FromStr;

use safelist::preset::{css, document, links, tables};
use safelist::{ALL_TAGS, Feature, Preset};
use strum::IntoEnumIterator;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn test_css_preset() {
    let feature = css();

    assert_eq!(feature.tags(), &set(&["style"]));
    assert_eq!(feature.allowed_attributes(ALL_TAGS), Some(&set(&["class", "style"])));
    assert!(feature.enforced().is_empty());
    assert!(feature.protocols().is_empty());
}

#[test]
fn test_document_preset() {
    let feature = document();

    assert_eq!(
        feature.tags(),
        &set(&["body", "head", "html", "meta", "title"])
    );
    assert_eq!(
        feature.allowed_attributes("meta"),
        Some(&set(&["charset", "content", "http-equiv", "name"]))
    );
    assert_eq!(feature.attributes().len(), 1);
    assert!(feature.enforced().is_empty());
    assert!(feature.protocols().is_empty());
}

#[test]
fn test_links_preset() {
    let feature = links();

    assert_eq!(feature.tags(), &set(&["a"]));
    assert_eq!(feature.allowed_attributes("a"), Some(&set(&["href"])));
    assert_eq!(feature.enforced_value("a", "rel"), Some("nofollow"));
    assert_eq!(
        feature.allowed_protocols("a", "href"),
        Some(&set(&["ftp", "http", "https", "mailto"]))
    );
}

#[test]
fn test_tables_preset() {
    let feature = tables();

    assert_eq!(
        feature.tags(),
        &set(&["table", "tbody", "td", "tfoot", "th", "thead", "tr"])
    );
    assert_eq!(
        feature.allowed_attributes("th"),
        Some(&set(&["colspan", "headers", "rowspan", "scope", "sorted"]))
    );
    assert_eq!(
        feature.allowed_attributes("td"),
        Some(&set(&["colspan", "headers", "rowspan"]))
    );
    assert!(feature.enforced().is_empty());
    assert!(feature.protocols().is_empty());
}

#[test]
fn test_presets_are_fresh_and_equal() {
    for preset in Preset::iter() {
        let first = preset.feature();
        let second = Feature::from(preset);

        assert_eq!(first, second, "{preset} differs between calls");
        assert!(!first.is_empty(), "{preset} grants nothing");
    }
}

#[test]
fn test_preset_names_round_trip() {
    let names: Vec<String> = Preset::iter().map(|preset| preset.to_string()).collect();
    assert_eq!(names, ["css", "document", "links", "tables"]);

    for preset in Preset::iter() {
        assert_eq!(Preset::from_str(preset.as_ref()).unwrap(), preset);
    }
    assert!(Preset::from_str("forms").is_err());
}

#[test]
fn test_free_functions_match_enum() {
    assert_eq!(css(), Preset::Css.feature());
    assert_eq!(document(), Preset::Document.feature());
    assert_eq!(links(), Preset::Links.feature());
    assert_eq!(tables(), Preset::Tables.feature());
}
