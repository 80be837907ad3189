//! Field constraints shared by request DTOs and the handlers that use them.
//!
//! DTOs declare their constraints with `#[derive(validator::Validate)]`;
//! this module owns the limits and turns `validator` output into a
//! [`CoreError::Validation`] with a field-level message.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Maximum genre name length, in characters.
pub const MAX_GENRE_NAME_LEN: u64 = 255;

/// Run `validator` on `input`, mapping failures to [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe_errors(&errors)))
}

/// Render validation errors as `field: message` pairs, sorted by field name
/// so the output is stable.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {message}")
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Reject text containing U+0000, which PostgreSQL cannot store in
/// `VARCHAR` / `TEXT` columns.
///
/// Used as `#[validate(custom(function = "..."))]` on every stored string.
pub fn reject_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut err = ValidationError::new("nul_character");
        err.message = Some(Cow::Borrowed("must not contain NUL characters"));
        return Err(err);
    }
    Ok(())
}

/// Treat an absent or empty filter value as "no filter". Any other value,
/// whitespace included, is a filter.
pub fn non_empty_filter(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
