use super::*;

#[test]
fn unauthorized_maps_to_fixed_message() {
    let err = ApiFailure::from_response(401, r#"{"detail":"Could not validate credentials"}"#);
    assert_eq!(err, ApiFailure::NotAuthenticated);
    assert_eq!(err.to_string(), "Not authenticated");
    assert!(err.is_auth());
}

#[test]
fn unprocessable_maps_to_fixed_message() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email"}]}"#;
    let err = ApiFailure::from_response(422, body);
    assert_eq!(err, ApiFailure::InvalidInput);
    assert_eq!(err.to_string(), "Invalid input");
}

#[test]
fn other_status_surfaces_detail_verbatim() {
    let err = ApiFailure::from_response(409, r#"{"detail":"Account already exists"}"#);
    assert_eq!(err.to_string(), "Account already exists");
    assert_eq!(err.status(), Some(409));
}

#[test]
fn missing_detail_falls_back_to_status() {
    let err = ApiFailure::from_response(500, "Internal Server Error");
    assert_eq!(err.to_string(), "Request failed with status 500");
}

#[test]
fn not_found_is_detected() {
    assert!(ApiFailure::from_response(404, r#"{"detail":"Not Found"}"#).is_not_found());
    assert!(!ApiFailure::NotAuthenticated.is_not_found());
}

#[test]
fn missing_token_reads_like_401() {
    assert_eq!(ApiFailure::MissingToken.to_string(), "Not authenticated");
    assert_eq!(ApiFailure::MissingToken.status(), None);
}

#[test]
fn structured_detail_is_compact_json() {
    assert_eq!(detail_from_body(r#"{"detail":{"code":7}}"#), Some(r#"{"code":7}"#.to_owned()));
    assert_eq!(detail_from_body(r#"{"detail":null}"#), None);
    assert_eq!(detail_from_body("[]"), None);
}
