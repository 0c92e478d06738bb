//! Errors raised while constructing features.

use strum_macros::Display;
use thiserror::Error;

/// Which argument of a builder call was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Argument {
    /// A tag name.
    Tag,
    /// An attribute key.
    Key,
    /// An enforced attribute value.
    Value,
    /// A URL scheme.
    Protocol,
}

/// Errors from the [`FeatureBuilder`](crate::FeatureBuilder) construction calls.
///
/// Every variant is raised before the builder is touched, so a failed call
/// never leaves a partial entry behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// An empty string was passed where a name or value is required.
    #[error("invalid argument to {operation}: {argument} must not be empty")]
    InvalidArgument {
        /// The rejected argument.
        argument: Argument,
        /// The builder call that rejected it.
        operation: &'static str,
    },
}

/// Reject `value` if it is empty.
pub(crate) fn not_empty(
    value: &str,
    argument: Argument,
    operation: &'static str,
) -> Result<(), FeatureError> {
    if value.is_empty() {
        return Err(FeatureError::InvalidArgument {
            argument,
            operation,
        });
    }
    Ok(())
}

/// Collect `values`, rejecting the whole sequence if any element is empty.
pub(crate) fn all_not_empty<I>(
    values: I,
    argument: Argument,
    operation: &'static str,
) -> Result<Vec<String>, FeatureError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    values
        .into_iter()
        .map(|value| {
            let value = value.into();
            not_empty(&value, argument, operation).map(|()| value)
        })
        .collect()
}
