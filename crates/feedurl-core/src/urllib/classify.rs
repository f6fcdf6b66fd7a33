//! Absolute-URL classification.

use super::parsed::ParsedUrl;

/// Returns true if `input` is an absolute URL.
///
/// Advisory only: anything that fails to parse is simply not absolute.
pub fn is_absolute(input: &str) -> bool {
    ParsedUrl::parse(input).is_ok_and(|parsed| parsed.is_absolute())
}
