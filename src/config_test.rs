use super::*;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn defaults_listen_on_all_interfaces_port_3000() {
    let config = Config::from_lookup(lookup(&[])).expect("config");
    assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn host_and_port_are_read() {
    let config = Config::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")])).expect("config");
    assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn invalid_port_is_rejected() {
    let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, AppError::InvalidEnv { key: "PORT", .. }));
}

#[test]
fn invalid_host_is_rejected() {
    let err = Config::from_lookup(lookup(&[("HOST", "not-an-ip")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid value for HOST: \"not-an-ip\"");
}
