//! `vidcat add <name> <url>` – add a video to the catalog.

use anyhow::Result;
use vidcat_core::catalog::{create_video, CreateError};
use vidcat_core::catalog_db::CatalogDb;
use vidcat_core::video::NewVideo;

/// Short message for the user, matching what the catalog reports for each failure.
pub(crate) fn user_message(err: &CreateError) -> &'static str {
    match err {
        CreateError::InvalidUrl(_) => "Invalid YouTube URL",
        CreateError::DuplicateVideo(_) => "That video has already been added",
        CreateError::InvalidInput(_) => "Please check the data entered",
        CreateError::Store(_) => "Could not save the video",
    }
}

pub async fn run_add(
    db: &CatalogDb,
    name: String,
    url: String,
    notes: Option<String>,
) -> Result<()> {
    let new = NewVideo::new(name, url, notes);
    match create_video(db, &new).await {
        Ok(video) => {
            println!("Added video {} ({}): {}", video.id, video.video_id, video.name);
            Ok(())
        }
        Err(err) => {
            let msg = user_message(&err);
            Err(anyhow::Error::new(err).context(msg))
        }
    }
}
