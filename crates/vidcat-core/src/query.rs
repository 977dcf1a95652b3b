//! List and search ordering for the catalog view.

use crate::video::Video;

/// Returns the entries to show for an optional search term.
///
/// A missing or blank term lists everything. Otherwise the trimmed term is
/// matched as a case-insensitive substring of `name`. Either way the result is
/// sorted by lowercased name, ascending; the sort is stable so entries whose
/// names fold to the same key keep their input order.
pub fn query(entries: Vec<Video>, search_term: Option<&str>) -> Vec<Video> {
    let term = search_term
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    let mut out: Vec<Video> = match term {
        Some(term) => entries
            .into_iter()
            .filter(|v| v.name.to_lowercase().contains(&term))
            .collect(),
        None => entries,
    };

    out.sort_by_cached_key(|v| v.name.to_lowercase());
    out
}
