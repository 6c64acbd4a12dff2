use super::*;

#[test]
fn comments_endpoint_embeds_default_limit() {
    assert_eq!(comments_endpoint(20), "/data?comment-count=20");
}

#[test]
fn comments_endpoint_embeds_custom_limit() {
    assert_eq!(comments_endpoint(5), "/data?comment-count=5");
}

#[test]
fn comments_request_failed_message_formats_status() {
    assert_eq!(comments_request_failed_message(500), "comments request failed: 500");
}

#[test]
fn delete_request_failed_message_formats_status() {
    assert_eq!(delete_request_failed_message(503), "delete request failed: 503");
}
