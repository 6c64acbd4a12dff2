use super::*;

// =============================================================
// GenerateRequest encoding
// =============================================================

#[test]
fn generate_request_encodes_text_only_by_default() {
    let req = GenerateRequest::new("once upon a time");
    let json = serde_json::to_string(&req).unwrap();
    assert_eq!(json, r#"{"text":"once upon a time"}"#);
}

#[test]
fn generate_request_encodes_optional_parameters() {
    let req = GenerateRequest {
        text: "hello".to_owned(),
        length: Some(256),
        temperature: Some(0.7),
    };
    let json = serde_json::to_string(&req).unwrap();
    assert_eq!(json, r#"{"text":"hello","length":256,"temperature":0.7}"#);
}

#[test]
fn generate_request_preserves_quotes_and_special_characters() {
    let req = GenerateRequest::new(r#"she said "hi" & left"#);
    let json = serde_json::to_string(&req).unwrap();
    let back: GenerateRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back.text, r#"she said "hi" & left"#);
}

// =============================================================
// Generation payload parsing
// =============================================================

#[test]
fn parse_generation_payload_accepts_text_object() {
    assert_eq!(
        parse_generation_payload(r#"{"text":"hello"}"#),
        Ok("hello".to_owned())
    );
}

#[test]
fn parse_generation_payload_accepts_bare_string() {
    assert_eq!(
        parse_generation_payload(r#""a generated story""#),
        Ok("a generated story".to_owned())
    );
}

#[test]
fn parse_generation_payload_rejects_malformed_body() {
    let err = parse_generation_payload("<html>502</html>").unwrap_err();
    assert!(err.starts_with("unexpected generation response:"));
}

// =============================================================
// Error payload parsing
// =============================================================

#[test]
fn parse_error_payload_unwraps_json_string() {
    assert_eq!(parse_error_payload(r#""bad request""#, 400), "bad request");
}

#[test]
fn parse_error_payload_falls_back_to_status() {
    assert_eq!(
        parse_error_payload("<html>oops</html>", 502),
        "generation failed: 502"
    );
}

// =============================================================
// Comments payload parsing
// =============================================================

#[test]
fn parse_comments_payload_preserves_server_order() {
    assert_eq!(
        parse_comments_payload(r#"["a","b","c"]"#),
        Ok(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()])
    );
}

#[test]
fn parse_comments_payload_accepts_empty_array() {
    assert_eq!(parse_comments_payload("[]"), Ok(Vec::new()));
}

#[test]
fn parse_comments_payload_rejects_non_array_body() {
    let err = parse_comments_payload(r#"{"count":3}"#).unwrap_err();
    assert!(err.starts_with("unexpected comments response:"));
}
