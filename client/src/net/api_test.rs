use super::*;

#[test]
fn login_form_fields_use_backend_names() {
    assert_eq!(
        login_form_fields("admin", "secret"),
        [("username", "admin"), ("password", "secret")]
    );
}

#[test]
fn form_content_type_is_urlencoded() {
    assert_eq!(FORM_CONTENT_TYPE, "application/x-www-form-urlencoded");
}

#[test]
fn parse_body_reads_token_response() {
    let token: TokenResponse = parse_body(r#"{"access_token":"tok123","token_type":"bearer"}"#).expect("token");
    assert_eq!(token.access_token, "tok123");
}

#[test]
fn parse_body_reads_empty_user_list() {
    let users: Vec<User> = parse_body("[]").expect("users");
    assert!(users.is_empty());
}

#[test]
fn parse_body_reports_schema_mismatch_as_decode() {
    let result = parse_body::<Vec<User>>(r#"{"detail":"oops"}"#);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}
