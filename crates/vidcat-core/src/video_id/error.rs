//! Rejection reasons for watch URLs.

/// Which check a candidate URL failed, in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidUrlReason {
    /// Not a URL at all.
    Unparseable,
    /// Scheme is not `https`.
    Scheme,
    /// Host is not `www.youtube.com`.
    Host,
    /// Path is not exactly `/watch`.
    Path,
    /// Parses to the watch shape only after normalization: credentials, an
    /// explicit port, dot segments, backslashes, uppercase, or stray whitespace.
    NotCanonical,
    /// No query string, or `?` with nothing after it.
    MissingQuery,
    /// A query segment is empty or has no `=`.
    MalformedQuery,
    /// Query has no `v` parameter.
    MissingVideoParam,
    /// `v` is present but its first value is empty.
    EmptyVideoParam,
}

impl InvalidUrlReason {
    /// Stable short code, suitable for logs and machine-readable output.
    pub fn as_str(self) -> &'static str {
        match self {
            InvalidUrlReason::Unparseable => "unparseable",
            InvalidUrlReason::Scheme => "scheme",
            InvalidUrlReason::Host => "host",
            InvalidUrlReason::Path => "path",
            InvalidUrlReason::NotCanonical => "not_canonical",
            InvalidUrlReason::MissingQuery => "missing_query",
            InvalidUrlReason::MalformedQuery => "malformed_query",
            InvalidUrlReason::MissingVideoParam => "missing_video_param",
            InvalidUrlReason::EmptyVideoParam => "empty_video_param",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            InvalidUrlReason::Unparseable => "not a valid URL",
            InvalidUrlReason::Scheme => "scheme must be https",
            InvalidUrlReason::Host => "host must be www.youtube.com",
            InvalidUrlReason::Path => "path must be /watch",
            InvalidUrlReason::NotCanonical => "not written as https://www.youtube.com/watch?v=...",
            InvalidUrlReason::MissingQuery => "missing query string",
            InvalidUrlReason::MalformedQuery => "malformed query string",
            InvalidUrlReason::MissingVideoParam => "missing v parameter",
            InvalidUrlReason::EmptyVideoParam => "empty v parameter",
        }
    }
}

/// A URL that is not a YouTube watch URL with a non-empty `v` parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid YouTube URL: {}", .reason.describe())]
pub struct InvalidUrl {
    reason: InvalidUrlReason,
}

impl InvalidUrl {
    pub(super) fn new(reason: InvalidUrlReason) -> Self {
        Self { reason }
    }

    pub fn reason(&self) -> InvalidUrlReason {
        self.reason
    }
}
