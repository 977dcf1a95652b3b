//! `vidcat check <url>` – validate a URL without touching the catalog.

use anyhow::{Context, Result};
use vidcat_core::video_id::extract_video_id;

pub fn run_check(url: &str) -> Result<()> {
    let video_id = extract_video_id(url).with_context(|| format!("rejected {url}"))?;
    println!("{video_id}");
    Ok(())
}
