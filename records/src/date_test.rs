use super::*;

#[test]
fn iso_birthday_is_reordered() {
    assert_eq!(format_birthday(Some("2000-01-02")), "02.01.2000");
    assert_eq!(format_birthday(Some("1987-12-31")), "31.12.1987");
}

#[test]
fn missing_birthday_renders_empty() {
    assert_eq!(format_birthday(None), "");
    assert_eq!(format_birthday(Some("")), "");
}

#[test]
fn invalid_date_falls_back_to_reversed_parts() {
    assert_eq!(format_birthday(Some("2000-13-40")), "40.13.2000");
    assert_eq!(format_birthday(Some("unknown")), "unknown");
}

#[test]
fn timestamp_uses_date_portion() {
    assert_eq!(format_timestamp(Some("2023-03-29T10:11:12.123456")), "29.03.2023");
    assert_eq!(format_timestamp(Some("2023-03-29 10:11:12")), "29.03.2023");
    assert_eq!(format_timestamp(None), "");
}
