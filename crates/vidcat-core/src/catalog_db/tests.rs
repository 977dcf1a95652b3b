//! Tests for the catalog store (in-memory DB helper from db).

use crate::catalog_db::db::open_memory;
use crate::catalog_db::InsertError;
use crate::video::NewVideo;
use crate::video_id::extract_video_id;

fn new_video(name: &str, id: &str) -> (NewVideo, crate::video_id::VideoId) {
    let url = format!("https://www.youtube.com/watch?v={id}");
    let video_id = extract_video_id(&url).unwrap();
    (NewVideo::new(name, url, Some("example".to_string())), video_id)
}

#[tokio::test]
async fn insert_then_select_all() {
    let db = open_memory().await.unwrap();
    assert!(db.select_all().await.unwrap().is_empty());

    let (a, a_id) = new_video("abc", "abc");
    let (b, b_id) = new_video("AAA", "def");
    let first = db.insert_video(&a, &a_id).await.unwrap();
    let second = db.insert_video(&b, &b_id).await.unwrap();
    assert!(second.id > first.id);

    let all = db.select_all().await.unwrap();
    assert_eq!(all, vec![first, second]);
    assert_eq!(all[0].video_id.as_str(), "abc");
    assert_eq!(all[0].notes.as_deref(), Some("example"));
}

#[tokio::test]
async fn duplicate_video_id_is_uniqueness_violation() {
    let db = open_memory().await.unwrap();
    let (a, id) = new_video("abc", "abc");
    db.insert_video(&a, &id).await.unwrap();

    let renamed = NewVideo::new("different name", a.url.clone(), None);
    let err = db.insert_video(&renamed, &id).await.unwrap_err();
    assert!(matches!(err, InsertError::UniquenessViolation));
    assert_eq!(db.count_videos().await.unwrap(), 1);
}

#[tokio::test]
async fn blank_notes_stored_as_null() {
    let db = open_memory().await.unwrap();
    let (mut v, id) = new_video("abc", "abc");
    v.notes = Some(String::new());
    let stored = db.insert_video(&v, &id).await.unwrap();
    assert_eq!(stored.notes, None);

    let fetched = db.get_video(stored.id).await.unwrap().unwrap();
    assert_eq!(fetched.notes, None);
}

#[tokio::test]
async fn get_missing_video_is_none() {
    let db = open_memory().await.unwrap();
    assert!(db.get_video(42).await.unwrap().is_none());
}
