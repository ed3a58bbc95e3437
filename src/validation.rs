//! Field constraints for notes, kept apart from the storage layer.

use crate::errors::{CommonError, Fields, ServerError};

pub const TITLE_MAX_LEN: usize = 200;
pub const CONTENT_MAX_LEN: usize = 5000;

/// A title/content pair that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub content: String,
}

/// Checks both fields independently and collects every failure.
///
/// The title is trimmed before its length is measured and is stored
/// trimmed. Content only has to contain something other than whitespace;
/// it is returned exactly as given.
pub fn validate(title: Option<&str>, content: Option<&str>) -> Result<NoteFields, ServerError> {
    let mut errors = vec![];

    let title = title.map(str::trim).unwrap_or_default();
    if title.is_empty() {
        errors.push(Fields::Title(CommonError::Missing));
    } else if title.chars().count() > TITLE_MAX_LEN {
        errors.push(Fields::Title(CommonError::TooLong));
    }

    let content = content.unwrap_or_default();
    if content.trim().is_empty() {
        errors.push(Fields::Content(CommonError::Missing));
    } else if content.chars().count() > CONTENT_MAX_LEN {
        errors.push(Fields::Content(CommonError::TooLong));
    }

    if !errors.is_empty() {
        return Err(ServerError::Validation(errors));
    }

    Ok(NoteFields {
        title: title.to_string(),
        content: content.to_string(),
    })
}
