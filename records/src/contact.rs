//! Contact records (`/api/contacts`).

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::date::format_birthday;
use crate::form::{FieldKind, FormField, FormValues};
use crate::schema::{Column, Entity, RecordId};

/// A contact as returned by the contacts endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_phones")]
    pub phones: Vec<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Phones arrive either as plain strings or as `{ "phone": "..." }` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum PhoneEntry {
    Plain(String),
    Object { phone: String },
}

fn deserialize_phones<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<PhoneEntry>>::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| match entry {
            PhoneEntry::Plain(phone) | PhoneEntry::Object { phone } => phone,
        })
        .collect())
}

impl Contact {
    /// `full_name` when present, otherwise first and last name joined.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(full) = self.full_name.as_deref().filter(|s| !s.trim().is_empty()) {
            return full.to_owned();
        }
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

const COLUMNS: &[Column] = &[
    Column::end("id", "ID"),
    Column::start("name", "Name"),
    Column::start("birthday", "Birthday"),
    Column::start("email", "Email"),
    Column::start("phones", "Phones"),
];

const FORM_FIELDS: &[FormField] = &[
    FormField::new("first_name", "First name", FieldKind::Text),
    FormField::new("last_name", "Last name", FieldKind::Text),
    FormField::new("birthday", "Birthday", FieldKind::Date),
    FormField::new("email", "Email", FieldKind::Email),
    FormField::new("phones", "Phones", FieldKind::Text),
    FormField::new("address", "Address", FieldKind::Text),
];

impl Entity for Contact {
    const NOUN: &'static str = "contact";
    const TITLE: &'static str = "Contacts";
    const COLLECTION_PATH: &'static str = "/api/contacts";
    const ITEM_PATH: &'static str = "/api/contacts";

    fn id(&self) -> RecordId {
        self.id
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.display_name(),
            format_birthday(self.birthday.as_deref()),
            self.email.clone().unwrap_or_default(),
            self.phones.join(", "),
        ]
    }

    fn form_fields() -> &'static [FormField] {
        FORM_FIELDS
    }

    fn form_values(&self) -> FormValues {
        FormValues::from_pairs([
            ("first_name", self.first_name.clone().unwrap_or_default()),
            ("last_name", self.last_name.clone().unwrap_or_default()),
            ("birthday", self.birthday.clone().unwrap_or_default()),
            ("email", self.email.clone().unwrap_or_default()),
            ("phones", self.phones.join(", ")),
            ("address", self.address.clone().unwrap_or_default()),
        ])
    }

    fn request_body(values: &FormValues) -> serde_json::Value {
        let phones = values
            .get("phones")
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>();
        serde_json::json!({
            "first_name": values.get("first_name").trim(),
            "last_name": values.get("last_name").trim(),
            "birthday": values.json_or_null("birthday"),
            "email": values.get("email").trim(),
            "phones": phones,
            "address": values.get("address").trim(),
        })
    }
}
