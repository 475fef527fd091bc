use super::*;
use records::{Contact, Entity};

// =============================================================
// EditDialog
// =============================================================

#[test]
fn edit_dialog_starts_hidden() {
    let dialog = EditDialog::default();
    assert_eq!(dialog.phase, DialogPhase::Hidden);
    assert!(!dialog.is_open());
}

#[test]
fn open_create_clears_every_field() {
    let mut dialog = EditDialog::default();
    dialog.open_edit(3, FormValues::from_pairs([("first_name", "Ann")]));
    dialog.open_create(Contact::form_fields());
    assert_eq!(dialog.id_field, "");
    assert_eq!(dialog.values.get("first_name"), "");
    assert_eq!(dialog.values, FormValues::blank(Contact::form_fields()));
    assert_eq!(dialog.title("contact"), "New contact");
}

#[test]
fn submit_with_empty_id_targets_create() {
    let mut dialog = EditDialog::default();
    dialog.open_create(Contact::form_fields());
    assert_eq!(dialog.begin_submit(), Some(SubmitTarget::Create));
    assert!(dialog.is_submitting());
}

#[test]
fn submit_with_id_targets_edit() {
    let mut dialog = EditDialog::default();
    dialog.open_edit(5, FormValues::default());
    assert_eq!(dialog.title("user"), "Edit user #5");
    assert_eq!(dialog.begin_submit(), Some(SubmitTarget::Edit(5)));
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut dialog = EditDialog::default();
    dialog.open_edit(5, FormValues::default());
    assert!(dialog.begin_submit().is_some());
    assert_eq!(dialog.begin_submit(), None);
}

#[test]
fn bad_id_field_reports_error_and_stays_open() {
    let mut dialog = EditDialog::default();
    dialog.open_create(Contact::form_fields());
    dialog.id_field = "x1".to_owned();
    assert_eq!(dialog.begin_submit(), None);
    assert_eq!(dialog.phase, DialogPhase::Shown);
    assert!(dialog.error.is_some());
}

#[test]
fn success_closes_and_failure_keeps_open_with_message() {
    let mut dialog = EditDialog::default();
    dialog.open_edit(5, FormValues::default());
    dialog.begin_submit();
    let failed: Result<(), ApiFailure> = Err(ApiFailure::NotAuthenticated);
    assert!(!dialog.finish_submit(&failed));
    assert_eq!(dialog.phase, DialogPhase::Shown);
    assert_eq!(dialog.error.as_deref(), Some("Not authenticated"));

    dialog.begin_submit();
    assert!(dialog.finish_submit(&Ok::<_, ApiFailure>(())));
    assert_eq!(dialog, EditDialog::default());
}

#[test]
fn cancel_is_ignored_while_submitting() {
    let mut dialog = EditDialog::default();
    dialog.open_create(Contact::form_fields());
    dialog.begin_submit();
    dialog.cancel();
    assert!(dialog.is_submitting());
}

#[test]
fn set_value_updates_form() {
    let mut dialog = EditDialog::default();
    dialog.open_create(Contact::form_fields());
    dialog.set_value("email", "a@x.com".to_owned());
    assert_eq!(dialog.values.get("email"), "a@x.com");
}

// =============================================================
// DeleteDialog
// =============================================================

#[test]
fn delete_confirm_flow() {
    let mut dialog = DeleteDialog::default();
    assert_eq!(dialog.begin_confirm(), None);
    dialog.open(4);
    assert!(dialog.is_open());
    assert_eq!(dialog.begin_confirm(), Some(4));
    assert_eq!(dialog.begin_confirm(), None);
    assert!(dialog.finish(&Ok::<_, ApiFailure>(())));
    assert!(!dialog.is_open());
}

#[test]
fn delete_failure_keeps_dialog_open() {
    let mut dialog = DeleteDialog::default();
    dialog.open(4);
    dialog.begin_confirm();
    let failed: Result<(), ApiFailure> = Err(ApiFailure::from_response(403, r#"{"detail":"Operation forbidden"}"#));
    assert!(!dialog.finish(&failed));
    assert_eq!(dialog.phase, DialogPhase::Shown);
    assert_eq!(dialog.id, Some(4));
    assert_eq!(dialog.error.as_deref(), Some("Operation forbidden"));
}

#[test]
fn delete_cancel_hides() {
    let mut dialog = DeleteDialog::default();
    dialog.open(4);
    dialog.cancel();
    assert_eq!(dialog, DeleteDialog::default());
}
