use errcopy::{
    classify, field_errors, format_error_message, format_validation_error, ErrorCategory,
    RawError,
};
use errcopy_tests::job_post_payload;
use serde_json::json;

#[test]
fn test_bad_request() {
    assert!(format_error_message(RawError::exception("400 Bad Request")).contains("Invalid request"));
}

#[test]
fn test_unauthorized() {
    assert!(format_error_message(RawError::exception("401 Unauthorized")).contains("Session expired"));
}

#[test]
fn test_unmapped_status_passes_through() {
    assert_eq!(
        format_error_message(RawError::exception("405 Method Not Allowed")),
        "405 Method Not Allowed"
    );
}

#[test]
fn test_request_timeout_uses_timeout_copy() {
    assert_eq!(
        format_error_message(RawError::exception("408 Request Timeout")),
        "Request timed out. Please try again."
    );
}

#[test]
fn test_failed_to_fetch() {
    assert!(format_error_message(RawError::exception("Failed to fetch")).contains("connect"));
}

#[test]
fn test_low_level_code_is_verbatim() {
    assert_eq!(format_error_message(RawError::exception("ECONNREFUSED")), "ECONNREFUSED");
    assert_eq!(
        format_error_message(RawError::exception("Connection refused")),
        "Connection refused"
    );
}

#[test]
fn test_empty_message_stays_empty() {
    assert_eq!(format_error_message(RawError::exception("")), "");
}

#[test]
fn test_plain_string_is_unexpected() {
    assert!(format_error_message("Simple error").contains("unexpected"));
}

#[test]
fn test_bare_number_is_unexpected() {
    assert!(format_error_message(404).contains("unexpected"));
}

#[test]
fn test_validation_boolean_payload() {
    assert!(format_validation_error(&json!(true)).contains("check"));
}

#[test]
fn test_validation_empty_errors() {
    assert!(format_validation_error(&json!({ "message": "", "errors": {} })).contains("check"));
}

#[test]
fn test_gateway_timeout_prefers_timeout_rule() {
    let classification = classify(RawError::exception("504 Gateway Timeout"));
    assert_eq!(classification.category, ErrorCategory::Timeout);
    assert_eq!(classification.message, "Request timed out. Please try again.");
}

#[test]
fn test_duck_typed_json_error() {
    let axios_like = json!({
        "name": "AxiosError",
        "message": "503 Service Unavailable",
        "response": { "status": 503 }
    });
    assert_eq!(
        format_error_message(axios_like),
        "Service temporarily unavailable. Please try again later."
    );

    assert!(format_error_message(json!({ "message": 500 })).contains("unexpected"));
    assert!(format_error_message(json!(null)).contains("unexpected"));
}

#[test]
fn test_rust_errors_are_classified_by_message() {
    let err = std::io::Error::new(std::io::ErrorKind::Other, "operation timed out");
    assert_eq!(
        format_error_message(RawError::from_error(&err)),
        "Request timed out. Please try again."
    );
}

#[test]
fn test_job_post_validation_summary() {
    let payload = job_post_payload();

    assert_eq!(
        format_validation_error(&payload),
        "The budget must be at least 10. The description field is required. \
         The photo must be a file of type: jpeg, png."
    );

    let paths: Vec<String> = field_errors(&payload).into_iter().map(|f| f.path).collect();
    assert_eq!(paths, vec!["budget", "description", "photos.1.uri"]);
}
