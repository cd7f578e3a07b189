//! Form validation for asset and liability submissions.

use rust_decimal::Decimal;

use super::records_model::{RecordForm, RecordInput};
use crate::constants::{MAX_CATEGORY_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};
use crate::errors::{Error, FieldErrors, Result, ValidationError};
use crate::utils::decimal_utils::parse_decimal;

/// Validates a raw record form.
///
/// Every field is checked so the caller gets all messages at once.
pub fn validate_record_form(form: &RecordForm) -> Result<RecordInput> {
    let mut errors = FieldErrors::new();

    let name = form.name.trim();
    let name_len = name.chars().count();
    if name_len == 0 {
        errors.push("name", "Name is required");
    } else if name_len > MAX_NAME_LENGTH {
        errors.push("name", "Name too long");
    }

    let category = form.category.trim();
    let category_len = category.chars().count();
    if category_len == 0 {
        errors.push("category", "Category is required");
    } else if category_len > MAX_CATEGORY_LENGTH {
        errors.push("category", "Category too long");
    }

    let value = match parse_decimal(form.value.trim()) {
        Some(v) if v >= Decimal::ZERO => Some(v),
        _ => {
            errors.push("value", "Please enter a valid positive number for the value");
            None
        }
    };

    let description = form
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());
    if description.is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_LENGTH) {
        errors.push("description", "Description too long");
    }

    match value {
        Some(value) if errors.is_empty() => Ok(RecordInput {
            name: name.to_string(),
            category: category.to_string(),
            value: value.normalize(),
            description: description.map(str::to_string),
        }),
        _ => Err(Error::Validation(ValidationError::Fields(errors))),
    }
}
