use super::*;

fn sample_json() -> &'static str {
    r#"{
        "id": 7,
        "username": "@jay_b",
        "email": "jay_b@example.com",
        "created_at": "2023-03-29T10:00:00",
        "avatar": null,
        "roles": "moderator"
    }"#
}

#[test]
fn deserializes_backend_user() {
    let user: User = serde_json::from_str(sample_json()).expect("user");
    assert_eq!(user.id, 7);
    assert_eq!(user.role(), Role::Moderator);
    assert!(!user.is_banned());
    assert_eq!(user.display_name(), "@jay_b");
}

#[test]
fn cells_cover_every_column() {
    let user: User = serde_json::from_str(sample_json()).expect("user");
    assert_eq!(
        user.cells(),
        vec!["7", "@jay_b", "", "", "jay_b@example.com", "moderator", "29.03.2023", "active"]
    );
}

#[test]
fn banned_user_shows_banned_status() {
    let mut user: User = serde_json::from_str(sample_json()).expect("user");
    user.mark_banned();
    assert!(user.is_banned());
    assert_eq!(user.cells()[7], "banned");
}

#[test]
fn role_defaults_and_admin_check() {
    assert_eq!(User { id: 1, ..User::default() }.role(), Role::User);
    assert!(Role::Admin.can_administer());
    assert!(Role::Moderator.can_administer());
    assert!(!Role::User.can_administer());
}

#[test]
fn form_values_never_prefill_password() {
    let user: User = serde_json::from_str(sample_json()).expect("user");
    let values = user.form_values();
    assert_eq!(values.get("username"), "@jay_b");
    assert_eq!(values.get("password"), "");
}

#[test]
fn request_body_omits_blank_password() {
    let values = FormValues::from_pairs([
        ("first_name", "Jay"),
        ("username", "@jay_b"),
        ("email", "jay_b@example.com"),
        ("birthday", "2023-03-29"),
        ("password", ""),
    ]);
    let body = User::request_body(&values);
    assert_eq!(body["birthday"], "2023-03-29");
    assert!(body.get("password").is_none());

    let mut values = values;
    values.set("password", "secret1");
    assert_eq!(User::request_body(&values)["password"], "secret1");
}

#[test]
fn ban_path_targets_ban_route() {
    assert_eq!(ban_path(3), "/api/users/ban/3");
}
