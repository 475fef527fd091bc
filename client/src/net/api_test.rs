use super::*;
use records::Contact;

#[test]
fn status_line_names_method_path_and_status() {
    let plan = RequestPlan::list::<Contact>(&ListQuery::default());
    assert_eq!(status_line(&plan, 200), "GET /api/contacts -> 200");
}

#[test]
fn decode_reads_record_list() {
    let body = r#"[{"id":1,"full_name":"A B"},{"id":2}]"#;
    let records: Vec<Contact> = decode(body).expect("records");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].id, 2);
}

#[test]
fn decode_failure_is_reported_as_decode_error() {
    let result: Result<Vec<Contact>, ApiFailure> = decode(r#"{"detail":"oops"}"#);
    assert!(matches!(result, Err(ApiFailure::Decode(_))));
}

#[test]
fn default_base_url_points_at_local_backend() {
    if option_env!("WEBADMIN_API_BASE_URL").is_none() {
        assert_eq!(API_BASE_URL, "http://localhost:8000");
    }
}

#[test]
fn unreadable_success_body_is_a_transport_failure() {
    let result = classify_response(200, true, Err("stream closed"));
    assert_eq!(result, Err(ApiFailure::Transport("stream closed".to_owned())));
}

#[test]
fn failed_response_body_is_classified() {
    let result = classify_response::<String>(404, false, Ok(r#"{"detail":"Contact not found"}"#.to_owned()));
    assert_eq!(result.map_err(|e| e.to_string()), Err("Contact not found".to_owned()));
    assert_eq!(classify_response::<String>(200, true, Ok("[]".to_owned())), Ok("[]".to_owned()));
}
