//! Video row operations: insert, select, count.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::db::{unix_timestamp, CatalogDb};
use super::error::InsertError;
use crate::video::{EntryId, NewVideo, Video};
use crate::video_id::VideoId;

fn video_from_row(row: &SqliteRow) -> Video {
    Video {
        id: row.get("id"),
        name: row.get("name"),
        url: row.get("url"),
        notes: row.get("notes"),
        video_id: VideoId::from_stored(row.get("video_id")),
    }
}

impl CatalogDb {
    /// Insert a new entry keyed by `video_id`.
    ///
    /// Fails with [`InsertError::UniquenessViolation`] when the identifier is
    /// already stored; the check and the write are one statement.
    pub async fn insert_video(
        &self,
        new: &NewVideo,
        video_id: &VideoId,
    ) -> Result<Video, InsertError> {
        let now = unix_timestamp();
        let notes = new.stored_notes();

        let result = sqlx::query(
            r#"
            INSERT INTO videos (name, url, notes, video_id, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&new.name)
        .bind(&new.url)
        .bind(notes)
        .bind(video_id.as_str())
        .bind(now)
        .execute(&self.pool)
        .await;

        let id = match result {
            Ok(done) => done.last_insert_rowid(),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(InsertError::UniquenessViolation);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Video {
            id,
            name: new.name.clone(),
            url: new.url.clone(),
            notes: notes.map(str::to_string),
            video_id: video_id.clone(),
        })
    }

    /// Every stored entry, in insertion order.
    pub async fn select_all(&self) -> Result<Vec<Video>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, url, notes, video_id
            FROM videos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(video_from_row).collect())
    }

    /// Fetch a single entry by its row id.
    pub async fn get_video(&self, id: EntryId) -> Result<Option<Video>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT id, name, url, notes, video_id
            FROM videos
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(video_from_row))
    }

    pub async fn count_videos(&self) -> Result<i64, sqlx::Error> {
        let row = sqlx::query(r#"SELECT COUNT(*) AS n FROM videos"#)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("n"))
    }
}
