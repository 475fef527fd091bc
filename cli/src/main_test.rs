use super::*;

#[test]
fn users_list_flags_become_query() {
    let cli = Cli::try_parse_from([
        "webadmin-cli",
        "--token",
        "t",
        "users",
        "list",
        "--limit",
        "80",
        "--offset",
        "20",
        "--username",
        "ann",
        "--role",
        "",
    ])
    .expect("parse");
    let Command::Users(UsersCommand { command: UsersSubcommand::List(args) }) = cli.command else {
        panic!("expected users list");
    };
    let query = args.into_query();
    assert_eq!(query.limit(), records::query::MAX_LIMIT);
    assert_eq!(query.offset(), 20);
    assert_eq!(query.filters(), &[("username".to_owned(), "ann".to_owned())]);
}

#[test]
fn base_url_defaults_to_local_backend() {
    let cli = Cli::try_parse_from(["webadmin-cli", "contacts", "list"]).expect("parse");
    if std::env::var_os("WEBADMIN_API_BASE_URL").is_none() {
        assert_eq!(cli.base_url, "http://localhost:8000");
    }
}

#[test]
fn update_parses_id_and_partial_fields() {
    let cli = Cli::try_parse_from(["webadmin-cli", "contacts", "update", "4", "--email", "a@b.c"]).expect("parse");
    let Command::Contacts(ContactsCommand { command: ContactsSubcommand::Update { id, fields } }) = cli.command else {
        panic!("expected contacts update");
    };
    assert_eq!(id, 4);
    let pairs = fields.into_pairs();
    assert!(pairs.contains(&("email", Some("a@b.c".to_owned()))));
    assert!(pairs.contains(&("first_name", None)));
}

#[test]
fn overlay_keeps_unspecified_values() {
    let current = Contact {
        id: 4,
        first_name: Some("Ann".to_owned()),
        email: Some("old@x.y".to_owned()),
        ..Contact::default()
    };
    let values = overlay(current.form_values(), vec![("email", Some("new@x.y".to_owned())), ("last_name", None)]);
    assert_eq!(values.get("first_name"), "Ann");
    assert_eq!(values.get("email"), "new@x.y");
    assert_eq!(values.get("last_name"), "");
}
