use super::*;
use crate::{Contact, User};

#[test]
fn create_posts_to_collection() {
    let values = FormValues::from_pairs([("first_name", "Ann")]);
    let plan = RequestPlan::submit::<Contact>(SubmitTarget::Create, &values);
    assert_eq!(plan.method, Method::Post);
    assert_eq!(plan.path, "/api/contacts");
    assert!(plan.body.is_some());
}

#[test]
fn edit_puts_to_item() {
    let values = FormValues::from_pairs([("username", "ann")]);
    let plan = RequestPlan::submit::<User>(SubmitTarget::Edit(5), &values);
    assert_eq!(plan.method, Method::Put);
    assert_eq!(plan.path, "/api/users/5");
}

#[test]
fn user_create_posts_to_trailing_slash_collection() {
    let plan = RequestPlan::submit::<User>(SubmitTarget::Create, &FormValues::default());
    assert_eq!(plan.method, Method::Post);
    assert_eq!(plan.path, "/api/users/");
}

#[test]
fn list_paths_respect_paging() {
    let q = ListQuery::default();
    assert_eq!(RequestPlan::list::<Contact>(&q).path, "/api/contacts");
    assert_eq!(RequestPlan::list::<User>(&q).path, "/api/users/?limit=10&offset=0");
}

#[test]
fn delete_and_fetch_target_item() {
    assert_eq!(RequestPlan::delete::<Contact>(3).method, Method::Delete);
    assert_eq!(RequestPlan::delete::<Contact>(3).path, "/api/contacts/3");
    assert_eq!(RequestPlan::fetch::<User>(4).path, "/api/users/4");
    assert_eq!(RequestPlan::fetch::<User>(4).body, None);
}

#[test]
fn user_specific_endpoints() {
    assert_eq!(RequestPlan::current_user().path, "/api/users/me");
    let ban = RequestPlan::ban_user(8);
    assert_eq!(ban.method, Method::Patch);
    assert_eq!(ban.path, "/api/users/ban/8");
}

#[test]
fn url_joins_base_without_double_slash() {
    let plan = RequestPlan::fetch::<Contact>(1);
    assert_eq!(plan.url("http://localhost:8000/"), "http://localhost:8000/api/contacts/1");
    assert_eq!(plan.url("http://localhost:8000"), "http://localhost:8000/api/contacts/1");
}

#[test]
fn method_names_are_uppercase() {
    assert_eq!(Method::Put.as_str(), "PUT");
    assert_eq!(Method::Patch.as_str(), "PATCH");
}
