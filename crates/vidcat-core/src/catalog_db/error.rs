//! Insert failure type for the catalog store.

/// Why an insert did not produce a row.
#[derive(Debug, thiserror::Error)]
pub enum InsertError {
    /// Another row already holds this `video_id`.
    #[error("video id already present in catalog")]
    UniquenessViolation,
    #[error("catalog database error: {0}")]
    Database(#[from] sqlx::Error),
}
