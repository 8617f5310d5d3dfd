//! Matching of path segments against mapping keys and sequence indices.

use super::error::NavigationError;

/// Segment that matches every child at the current level.
pub const SPLAT: &str = "*";

/// Segment that appends a new trailing element to a sequence.
pub const APPEND: &str = "+";

/// Returns true if `segment` matches the mapping key `key`.
///
/// A segment ending in `*` matches any key starting with the part before the
/// `*`; anything else must match exactly. The bare splat is dispatched by the
/// traversal engine before key matching, but it falls out of the same rule
/// (empty prefix, matches everything).
pub fn key_matches(segment: &str, key: &str) -> bool {
    match segment.strip_suffix('*') {
        Some(prefix) => key.starts_with(prefix),
        None => key == segment,
    }
}

/// Parses a segment addressing a sequence position.
pub fn parse_index(segment: &str) -> Result<i64, NavigationError> {
    segment
        .parse::<i64>()
        .map_err(|_| NavigationError::InvalidIndexSegment {
            segment: segment.to_string(),
        })
}

/// Converts a parsed index into a usable slot in a sequence of `len`
/// elements. Out-of-range indices, negative ones included, address nothing.
pub(crate) fn sequence_slot(index: i64, len: usize) -> Option<usize> {
    if index >= 0 && (index as usize) < len {
        Some(index as usize)
    } else {
        None
    }
}
