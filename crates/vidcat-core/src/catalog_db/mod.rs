//! Persistent video catalog (SQLite via sqlx).
//!
//! The `videos` table carries a `UNIQUE` constraint on `video_id`; that
//! constraint is the only duplicate check in the system.

mod db;
mod error;
mod videos;

pub use db::*;
pub use error::InsertError;

#[cfg(test)]
mod tests;
