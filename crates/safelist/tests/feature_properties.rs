//! Property tests for feature construction.

use std::collections::BTreeSet;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use safelist::{Feature, FeatureBuilder};

fn non_empty(names: Vec<String>) -> Vec<String> {
    names.into_iter().filter(|name| !name.is_empty()).collect()
}

#[quickcheck]
fn prop_allow_tags_is_set_union(first: Vec<String>, second: Vec<String>) -> bool {
    let (first, second) = (non_empty(first), non_empty(second));

    let feature = Feature::builder()
        .allow_tags(first.clone())
        .unwrap()
        .allow_tags(second.clone())
        .unwrap()
        .build();

    let expected: BTreeSet<String> = first.into_iter().chain(second).collect();
    feature.tags() == &expected
}

#[quickcheck]
fn prop_attribute_call_order_is_irrelevant(calls: Vec<(String, Vec<String>)>) -> bool {
    let calls: Vec<(String, Vec<String>)> = calls
        .into_iter()
        .filter(|(tag, _)| !tag.is_empty())
        .map(|(tag, keys)| (tag, non_empty(keys)))
        .collect();

    let mut forward = FeatureBuilder::new();
    for (tag, keys) in &calls {
        let _ = forward.allow_attributes(tag, keys.clone()).unwrap();
    }
    let mut backward = FeatureBuilder::new();
    for (tag, keys) in calls.iter().rev() {
        let _ = backward.allow_attributes(tag, keys.clone()).unwrap();
    }

    forward.build() == backward.build()
}

#[quickcheck]
fn prop_enforced_attributes_accumulate_per_tag(
    tag: String,
    first: (String, String),
    second: (String, String),
) -> TestResult {
    let ((key1, value1), (key2, value2)) = (first, second);
    if [&tag, &key1, &value1, &key2, &value2]
        .iter()
        .any(|part| part.is_empty())
        || key1 == key2
    {
        return TestResult::discard();
    }

    let feature = Feature::builder()
        .enforce_attribute(&tag, &key1, &value1)
        .unwrap()
        .enforce_attribute(&tag, &key2, &value2)
        .unwrap()
        .build();

    TestResult::from_bool(
        feature.enforced_value(&tag, &key1) == Some(value1.as_str())
            && feature.enforced_value(&tag, &key2) == Some(value2.as_str())
            && feature.enforced().len() == 1,
    )
}

#[quickcheck]
fn prop_rejected_call_leaves_state_unchanged(existing: Vec<String>, attempted: Vec<String>) -> bool {
    let mut builder = FeatureBuilder::new();
    let _ = builder.allow_tags(non_empty(existing)).unwrap();
    let before = builder.build();

    let mut attempted = attempted;
    attempted.push(String::new());

    builder.allow_tags(attempted).is_err() && builder.build() == before
}
