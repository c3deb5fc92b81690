//! Pattern validation for step inputs.

use regex::Regex;

use super::Inputs;
use crate::error::{ActkitError, Result};

/// Validate the input `key` against `pattern`.
///
/// An absent or blank input passes and yields `None`. A present value must
/// match, otherwise [`ActkitError::InvalidInput`] names the key and value.
///
/// # Example
///
/// ```
/// use actkit::inputs::{validate_input, Inputs};
/// use regex::Regex;
///
/// let inputs = Inputs::from_pairs([("foo", "bar")]);
/// let pattern = Regex::new("^[a-z]+$").unwrap();
/// assert_eq!(validate_input(&inputs, "foo", &pattern).unwrap(), Some("bar".to_string()));
/// ```
pub fn validate_input(inputs: &Inputs, key: &str, pattern: &Regex) -> Result<Option<String>> {
    let Some(value) = inputs.get(key) else {
        return Ok(None);
    };

    if pattern.is_match(value) {
        Ok(Some(value.to_string()))
    } else {
        Err(ActkitError::InvalidInput {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}
