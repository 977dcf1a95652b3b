//! Canonical video identifier extraction from YouTube watch URLs.
//!
//! Only one URL shape is accepted: `https://www.youtube.com/watch?v=<id>`.
//! Short links, embeds, mobile hosts and plain `http` are all rejected.

mod error;
mod query_string;

use std::fmt;
use url::Url;

pub use error::{InvalidUrl, InvalidUrlReason};

use query_string::parse_query_strict;

pub const WATCH_SCHEME: &str = "https";
pub const WATCH_HOST: &str = "www.youtube.com";
pub const WATCH_PATH: &str = "/watch";

const VIDEO_PARAM: &str = "v";

/// The value of a watch URL's `v` parameter. Used as the catalog's uniqueness key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Wrap an identifier read back from the store. The store only ever holds
    /// identifiers produced by [`extract_video_id`].
    pub(crate) fn from_stored(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Extracts the video identifier from a YouTube watch URL.
///
/// Checks run in a fixed order and the first failure wins:
/// parse, scheme, host, exact path, canonical spelling, non-empty query,
/// strict query parsing,
/// then presence and non-emptiness of `v`. The identifier is the first `v`
/// value after form-urlencoded decoding, otherwise untouched.
///
/// # Examples
///
/// - `extract_video_id("https://www.youtube.com/watch?v=VkkS3kJAG7g")` → `VkkS3kJAG7g`
/// - `extract_video_id("https://www.youtube.com/watch?v=")` → `EmptyVideoParam`
pub fn extract_video_id(url: &str) -> Result<VideoId, InvalidUrl> {
    use InvalidUrlReason::*;

    let parsed = Url::parse(url).map_err(|_| InvalidUrl::new(Unparseable))?;

    if parsed.scheme() != WATCH_SCHEME {
        return Err(InvalidUrl::new(Scheme));
    }
    if parsed.host_str() != Some(WATCH_HOST) {
        return Err(InvalidUrl::new(Host));
    }
    if parsed.path() != WATCH_PATH {
        return Err(InvalidUrl::new(Path));
    }
    // The parser forgives a lot (case, default port, `..`, `\`, missing `//`,
    // surrounding whitespace); the input must already be in canonical form.
    let has_authority_extras =
        !parsed.username().is_empty() || parsed.password().is_some() || parsed.port().is_some();
    if has_authority_extras || parsed.as_str() != url {
        return Err(InvalidUrl::new(NotCanonical));
    }

    let query = parsed
        .query()
        .filter(|q| !q.is_empty())
        .ok_or_else(|| InvalidUrl::new(MissingQuery))?;

    let params = parse_query_strict(query).map_err(|_| InvalidUrl::new(MalformedQuery))?;

    let first = params
        .get(VIDEO_PARAM)
        .and_then(|values| values.first())
        .ok_or_else(|| InvalidUrl::new(MissingVideoParam))?;

    if first.is_empty() {
        return Err(InvalidUrl::new(EmptyVideoParam));
    }

    Ok(VideoId(first.clone()))
}

#[cfg(test)]
mod tests;
