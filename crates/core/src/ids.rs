//! Parsing of externally supplied entity ids.
//!
//! Ids arrive as strings in paths, query strings and JSON bodies. A string
//! that is not a canonical hyphenated UUID can never match a stored row, so
//! callers treat it exactly like a well-formed id that does not resolve.

use crate::error::CoreError;
use crate::types::DbId;

/// Length of the canonical hyphenated UUID text form.
pub const CANONICAL_ID_LEN: usize = 36;

/// Parse `raw` as a canonical id, returning `None` for anything else.
///
/// Only the exact 36-character hyphenated layout is accepted. Padding and
/// the simple, braced and URN layouts that `Uuid` would otherwise parse are
/// rejected.
pub fn parse_id(raw: &str) -> Option<DbId> {
    if raw.len() != CANONICAL_ID_LEN {
        return None;
    }
    DbId::try_parse(raw).ok()
}

/// Parse `raw` or fail with a [`CoreError::NotFound`] for `entity`.
pub fn resolve_id(entity: &'static str, raw: &str) -> Result<DbId, CoreError> {
    parse_id(raw).ok_or_else(|| CoreError::not_found(entity, raw))
}
