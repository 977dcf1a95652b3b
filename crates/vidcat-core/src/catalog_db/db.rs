//! SQLite-backed catalog database: connection, migrations, timestamps.
//!
//! Row reads and writes live in `videos`.

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the video catalog.
///
/// By default the database lives under the XDG state directory:
/// `~/.local/state/vidcat/videos.db`.
#[derive(Clone)]
pub struct CatalogDb {
    pub(crate) pool: Pool<Sqlite>,
}

impl CatalogDb {
    /// Default database location.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("vidcat")?;
        Ok(xdg_dirs.get_state_home().join("vidcat").join("videos.db"))
    }

    /// Open (or create) the default catalog and run migrations.
    pub async fn open_default() -> Result<Self> {
        Self::open_at(Self::default_path()?).await
    }

    /// Open (or create) the catalog at a specific path. Creates parent dirs if needed.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect(&uri)
            .await
            .with_context(|| format!("open catalog: {}", path.display()))?;
        let db = CatalogDb { pool };
        db.migrate().await?;
        tracing::info!("catalog opened at {}", path.display());
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS videos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                url TEXT NOT NULL,
                notes TEXT,
                video_id TEXT NOT NULL UNIQUE,
                created_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Current time as Unix seconds (for DB timestamps).
pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
/// Open an in-memory catalog for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<CatalogDb> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let db = CatalogDb { pool };
    db.migrate().await?;
    Ok(db)
}

#[cfg(test)]
mod uri_tests {
    use super::path_to_sqlite_uri;
    use std::path::Path;

    #[test]
    fn escapes_reserved_chars() {
        assert_eq!(
            path_to_sqlite_uri(Path::new("/tmp/my videos#1/a?b&c%.db")),
            "sqlite:///tmp/my%20videos%231/a%3Fb%26c%25.db"
        );
    }
}
