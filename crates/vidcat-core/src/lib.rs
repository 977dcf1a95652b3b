pub mod config;
pub mod logging;

pub mod catalog;
pub mod catalog_db;
pub mod query;
pub mod video;
pub mod video_id;
