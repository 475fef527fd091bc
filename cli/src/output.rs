//! Plain-text table output.

use records::Entity;
use records::row::{Row, header_tsv};

/// Header line followed by one tab-separated line per record.
pub fn render_table<E: Entity>(records: &[E]) -> String {
    let mut lines = vec![header_tsv::<E>()];
    lines.extend(records.iter().map(|r| Row::render(r).to_tsv()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use records::Contact;

    #[test]
    fn table_has_header_and_one_line_per_record() {
        let records = vec![
            Contact { id: 1, full_name: Some("A B".to_owned()), birthday: Some("2000-01-02".to_owned()), ..Contact::default() },
            Contact { id: 2, ..Contact::default() },
        ];
        let table = render_table(&records);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID\tName\tBirthday\tEmail\tPhones");
        assert_eq!(lines[1], "1\tA B\t02.01.2000\t\t");
        assert!(lines[2].starts_with("2\t"));
    }

    #[test]
    fn empty_list_prints_only_header() {
        assert_eq!(render_table::<Contact>(&[]).lines().count(), 1);
    }
}
