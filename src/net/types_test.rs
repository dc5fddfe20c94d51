use super::*;

#[test]
fn from_body_reads_success() {
    let resp = RelayResponse::from_body(r#"{"success":true,"message":"Email sent successfully!"}"#).unwrap();
    assert!(resp.success);
    assert_eq!(resp.message.as_deref(), Some("Email sent successfully!"));
}

#[test]
fn from_body_reads_refusal_message() {
    let resp = RelayResponse::from_body(r#"{"success":false,"message":"Invalid email"}"#).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.message.as_deref(), Some("Invalid email"));
}

#[test]
fn from_body_missing_fields_default_to_refused_without_message() {
    let resp = RelayResponse::from_body("{}").unwrap();
    assert_eq!(resp, RelayResponse { success: false, message: None });
}

#[test]
fn from_body_ignores_unknown_fields() {
    let resp = RelayResponse::from_body(r#"{"success":true,"data":{"name":"Ada"},"statusCode":200}"#).unwrap();
    assert!(resp.success);
}

#[test]
fn success_uses_json_truthiness() {
    for (raw, expected) in [
        ("null", false),
        ("0", false),
        ("1", true),
        (r#""""#, false),
        (r#""false""#, true),
        ("[]", true),
        ("{}", true),
    ] {
        let body = format!(r#"{{"success":{raw}}}"#);
        assert_eq!(RelayResponse::from_body(&body).unwrap().success, expected, "{raw}");
    }
}

#[test]
fn from_body_non_json_is_decode_error() {
    let err = RelayResponse::from_body("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, RelayError::Decode(_)));
}

#[test]
fn from_body_non_object_is_decode_error() {
    assert!(matches!(RelayResponse::from_body("true"), Err(RelayError::Decode(_))));
}
