//! `vidcat list [--search TERM]` – show videos in name order.

use anyhow::Result;
use vidcat_core::catalog::list_videos;
use vidcat_core::catalog_db::CatalogDb;
use vidcat_core::config::VidcatConfig;

/// "No Videos", "1 video", "N videos".
pub(crate) fn count_label(n: usize) -> String {
    match n {
        0 => "No Videos".to_string(),
        1 => "1 video".to_string(),
        n => format!("{n} videos"),
    }
}

pub async fn run_list(
    db: &CatalogDb,
    cfg: &VidcatConfig,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let videos = list_videos(db, search).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&videos)?);
        return Ok(());
    }

    println!("{}", cfg.app_title);
    println!("{}", count_label(videos.len()));
    if videos.is_empty() {
        return Ok(());
    }
    println!();
    println!("{:<6} {:<14} {:<32} {}", "ID", "VIDEO", "NAME", "NOTES");
    for v in videos {
        println!(
            "{:<6} {:<14} {:<32} {}",
            v.id,
            v.video_id,
            v.name,
            v.notes.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
