//! Catalog entry types and field validation.

use std::fmt;

use crate::video_id::VideoId;

/// Maximum length of a video name, in characters.
pub const MAX_NAME_LEN: usize = 200;
/// Maximum length of a submitted URL, in characters.
pub const MAX_URL_LEN: usize = 400;
/// How much of the notes `Display` shows.
const NOTES_PREVIEW_LEN: usize = 200;

/// Store-assigned row identifier.
pub type EntryId = i64;

/// A stored catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Video {
    pub id: EntryId,
    pub name: String,
    pub url: String,
    pub notes: Option<String>,
    pub video_id: VideoId,
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notes: String = self
            .notes
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(NOTES_PREVIEW_LEN)
            .collect();
        write!(
            f,
            "ID: {}, Name: {}, URL: {}, Notes: {}",
            self.id, self.name, self.url, notes
        )
    }
}

/// User-supplied fields for a new entry. `video_id` is never part of the input.
#[derive(Debug, Clone, Default)]
pub struct NewVideo {
    pub name: String,
    pub url: String,
    pub notes: Option<String>,
}

/// A form field that failed validation before the URL was looked at.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("name is required")]
    NameRequired,
    #[error("name is longer than {} characters", MAX_NAME_LEN)]
    NameTooLong,
    #[error("url is required")]
    UrlRequired,
    #[error("url is longer than {} characters", MAX_URL_LEN)]
    UrlTooLong,
}

impl NewVideo {
    pub fn new(name: impl Into<String>, url: impl Into<String>, notes: Option<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            notes,
        }
    }

    /// Checks required fields and length bounds.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.name.trim().is_empty() {
            return Err(FieldError::NameRequired);
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(FieldError::NameTooLong);
        }
        if self.url.trim().is_empty() {
            return Err(FieldError::UrlRequired);
        }
        if self.url.chars().count() > MAX_URL_LEN {
            return Err(FieldError::UrlTooLong);
        }
        Ok(())
    }

    /// Notes as stored: blank notes become `None`.
    pub(crate) fn stored_notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }
}
