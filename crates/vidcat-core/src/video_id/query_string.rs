//! Strict `application/x-www-form-urlencoded` query parsing.

use std::collections::HashMap;

/// A query segment was empty or had no `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct MalformedQuery;

/// Parses a query string into name → values, keeping values in order.
///
/// Unlike `Url::query_pairs`, this fails on empty segments (`a=1&&b=2`,
/// trailing `&`) and on segments without `=`. Blank values are kept so the
/// caller can tell `v=` apart from a missing `v`.
pub(super) fn parse_query_strict(
    query: &str,
) -> Result<HashMap<String, Vec<String>>, MalformedQuery> {
    let mut params: HashMap<String, Vec<String>> = HashMap::new();

    for segment in query.split('&') {
        if segment.is_empty() || !segment.contains('=') {
            return Err(MalformedQuery);
        }
        let (name, value) = url::form_urlencoded::parse(segment.as_bytes())
            .next()
            .ok_or(MalformedQuery)?;
        params
            .entry(name.into_owned())
            .or_default()
            .push(value.into_owned());
    }

    Ok(params)
}
