//! Entry creation and listing on top of the catalog store.

use anyhow::Result;

use crate::catalog_db::{CatalogDb, InsertError};
use crate::query::query;
use crate::video::{FieldError, NewVideo, Video};
use crate::video_id::{extract_video_id, InvalidUrl};

/// Why `create_video` did not add an entry.
#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] FieldError),
    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrl),
    /// The URL's video is already in the catalog.
    #[error("video {0} has already been added")]
    DuplicateVideo(String),
    #[error("catalog store failed: {0}")]
    Store(#[source] sqlx::Error),
}

/// Validates, derives the video id, and inserts.
///
/// Duplicates are detected only by the store's uniqueness constraint, never
/// by looking first, so two concurrent adds of the same video cannot both win.
pub async fn create_video(db: &CatalogDb, new: &NewVideo) -> Result<Video, CreateError> {
    new.validate()?;

    let video_id = extract_video_id(&new.url).map_err(|e| {
        tracing::debug!(url = %new.url, reason = e.reason().as_str(), "rejected video url");
        e
    })?;

    match db.insert_video(new, &video_id).await {
        Ok(video) => {
            tracing::info!(id = video.id, video_id = %video.video_id, "added video");
            Ok(video)
        }
        Err(InsertError::UniquenessViolation) => {
            tracing::debug!(video_id = %video_id, "duplicate video");
            Err(CreateError::DuplicateVideo(video_id.into_string()))
        }
        Err(InsertError::Database(e)) => Err(CreateError::Store(e)),
    }
}

/// Stored entries filtered and ordered for display.
pub async fn list_videos(db: &CatalogDb, search_term: Option<&str>) -> Result<Vec<Video>> {
    let all = db.select_all().await?;
    let total = all.len();
    let shown = query(all, search_term);
    tracing::debug!(total, shown = shown.len(), ?search_term, "listed videos");
    Ok(shown)
}
