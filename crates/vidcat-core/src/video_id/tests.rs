//! Tests for watch URL validation and identifier extraction.

use super::{extract_video_id, InvalidUrlReason};

fn reason(url: &str) -> InvalidUrlReason {
    extract_video_id(url)
        .expect_err("url should be rejected")
        .reason()
}

#[test]
fn extracts_plain_identifier() {
    let id = extract_video_id("https://www.youtube.com/watch?v=VkkS3kJAG7g").unwrap();
    assert_eq!(id.as_str(), "VkkS3kJAG7g");
}

#[test]
fn identifier_is_verbatim() {
    for raw in ["abc", "ABC", "a-b_c", "x1Y2z3"] {
        let url = format!("https://www.youtube.com/watch?v={raw}");
        assert_eq!(extract_video_id(&url).unwrap().as_str(), raw);
    }
}

#[test]
fn other_params_are_ignored() {
    let id = extract_video_id("https://www.youtube.com/watch?v=abc&t=42s&list=PL1").unwrap();
    assert_eq!(id.as_str(), "abc");
    let id = extract_video_id("https://www.youtube.com/watch?feature=share&v=abc").unwrap();
    assert_eq!(id.as_str(), "abc");
}

#[test]
fn first_v_wins() {
    let id = extract_video_id("https://www.youtube.com/watch?v=first&v=second").unwrap();
    assert_eq!(id.as_str(), "first");
}

#[test]
fn identifier_is_query_unescaped() {
    let id = extract_video_id("https://www.youtube.com/watch?v=a%2Db").unwrap();
    assert_eq!(id.as_str(), "a-b");
}

#[test]
fn empty_v_rejected() {
    assert_eq!(
        reason("https://www.youtube.com/watch?v="),
        InvalidUrlReason::EmptyVideoParam
    );
    assert_eq!(
        reason("https://www.youtube.com/watch?v=&v=abc"),
        InvalidUrlReason::EmptyVideoParam
    );
}

#[test]
fn http_scheme_rejected() {
    assert_eq!(
        reason("http://www.youtube.com/watch?v=abc"),
        InvalidUrlReason::Scheme
    );
    assert_eq!(
        reason("http://www.youtube.com/watch?v="),
        InvalidUrlReason::Scheme
    );
}

#[test]
fn wrong_host_rejected() {
    assert_eq!(reason("https://github.com"), InvalidUrlReason::Host);
    assert_eq!(
        reason("https://minneapolis.edu?v=123456"),
        InvalidUrlReason::Host
    );
    assert_eq!(reason("https://youtube.com/watch?v=abc"), InvalidUrlReason::Host);
    assert_eq!(reason("https://m.youtube.com/watch?v=abc"), InvalidUrlReason::Host);
}

#[test]
fn path_must_match_exactly() {
    assert_eq!(
        reason("https://www.youtube.com/watch/extra?v=abc"),
        InvalidUrlReason::Path
    );
    assert_eq!(
        reason("https://www.youtube.com/watch/somethingelse"),
        InvalidUrlReason::Path
    );
    assert_eq!(
        reason("https://www.youtube.com/watch/?v=abc"),
        InvalidUrlReason::Path
    );
    assert_eq!(
        reason("https://www.youtube.com/embed?v=abc"),
        InvalidUrlReason::Path
    );
}

#[test]
fn normalized_forms_rejected() {
    for url in [
        "https://www.youtube.com/foo/../watch?v=abc",
        "https://www.youtube.com/./watch?v=abc",
        "https://user:pw@www.youtube.com/watch?v=abc",
        "https://user@www.youtube.com/watch?v=abc",
        "https://www.youtube.com:443/watch?v=abc",
        "https:www.youtube.com/watch?v=abc",
        "https:\\\\www.youtube.com\\watch?v=abc",
        "  https://www.youtube.com/watch?v=abc\t",
        "https://WWW.YOUTUBE.COM/watch?v=abc",
        "HTTPS://www.youtube.com/watch?v=abc",
    ] {
        assert_eq!(reason(url), InvalidUrlReason::NotCanonical, "{url:?}");
    }
}

#[test]
fn explicit_non_default_port_rejected() {
    assert_eq!(
        reason("https://www.youtube.com:8443/watch?v=abc"),
        InvalidUrlReason::NotCanonical
    );
}

#[test]
fn missing_query_rejected() {
    assert_eq!(
        reason("https://www.youtube.com/watch"),
        InvalidUrlReason::MissingQuery
    );
    assert_eq!(
        reason("https://www.youtube.com/watch?"),
        InvalidUrlReason::MissingQuery
    );
}

#[test]
fn missing_v_rejected() {
    assert_eq!(
        reason("https://www.youtube.com/watch?abc=123"),
        InvalidUrlReason::MissingVideoParam
    );
}

#[test]
fn malformed_query_rejected() {
    assert_eq!(
        reason("https://www.youtube.com/watch?v=abc&"),
        InvalidUrlReason::MalformedQuery
    );
    assert_eq!(
        reason("https://www.youtube.com/watch?v"),
        InvalidUrlReason::MalformedQuery
    );
    assert_eq!(
        reason("https://www.youtube.com/watch?a=1&&v=abc"),
        InvalidUrlReason::MalformedQuery
    );
}

#[test]
fn unparseable_rejected() {
    assert_eq!(reason("not a url"), InvalidUrlReason::Unparseable);
    assert_eq!(reason(""), InvalidUrlReason::Unparseable);
}

#[test]
fn error_message_names_youtube() {
    let err = extract_video_id("https://github.com").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid YouTube URL: host must be www.youtube.com"
    );
}
