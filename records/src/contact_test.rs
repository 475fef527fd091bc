use super::*;

#[test]
fn deserializes_minimal_list_item() {
    let raw = r#"{"id":1,"full_name":"A B","email":"a@x.com","birthday":"2000-01-02"}"#;
    let contact: Contact = serde_json::from_str(raw).expect("contact");
    assert_eq!(contact.id, 1);
    assert_eq!(contact.display_name(), "A B");
    assert!(contact.phones.is_empty());
    assert_eq!(contact.cells()[2], "02.01.2000");
}

#[test]
fn phones_accept_strings_objects_and_null() {
    let raw = r#"{"id":2,"phones":["+100", {"phone":"+200"}]}"#;
    let contact: Contact = serde_json::from_str(raw).expect("contact");
    assert_eq!(contact.phones, vec!["+100", "+200"]);

    let raw = r#"{"id":3,"phones":null}"#;
    let contact: Contact = serde_json::from_str(raw).expect("contact");
    assert!(contact.phones.is_empty());
}

#[test]
fn display_name_falls_back_to_first_and_last() {
    let contact = Contact {
        id: 1,
        first_name: Some("Ann".to_owned()),
        last_name: Some("Lee".to_owned()),
        ..Contact::default()
    };
    assert_eq!(contact.display_name(), "Ann Lee");

    let contact = Contact {
        id: 1,
        last_name: Some("Lee".to_owned()),
        ..Contact::default()
    };
    assert_eq!(contact.display_name(), "Lee");
}

#[test]
fn form_values_prefill_from_record() {
    let contact = Contact {
        id: 4,
        first_name: Some("Ann".to_owned()),
        phones: vec!["+1".to_owned(), "+2".to_owned()],
        ..Contact::default()
    };
    let values = contact.form_values();
    assert_eq!(values.get("first_name"), "Ann");
    assert_eq!(values.get("phones"), "+1, +2");
    assert_eq!(values.get("address"), "");
}

#[test]
fn request_body_splits_phones_and_nulls_blank_birthday() {
    let values = FormValues::from_pairs([
        ("first_name", " Ann "),
        ("last_name", "Lee"),
        ("birthday", ""),
        ("email", "ann@x.com"),
        ("phones", "+1, ,+2"),
        ("address", "Main st"),
    ]);
    let body = Contact::request_body(&values);
    assert_eq!(
        body,
        serde_json::json!({
            "first_name": "Ann",
            "last_name": "Lee",
            "birthday": null,
            "email": "ann@x.com",
            "phones": ["+1", "+2"],
            "address": "Main st",
        })
    );
}
