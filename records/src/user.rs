//! User records (`/api/users/`), the current-user and ban endpoints.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};

use crate::date::{format_birthday, format_timestamp};
use crate::form::{FieldKind, FormField, FormValues};
use crate::row::RowAction;
use crate::schema::{Column, Entity, RecordId};

pub const CURRENT_USER_PATH: &str = "/api/users/me";

#[must_use]
pub fn ban_path(id: RecordId) -> String {
    format!("/api/users/ban/{id}")
}

/// Access role assigned by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    #[default]
    User,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::User => "user",
        }
    }

    /// Roles the backend admits to the admin listing endpoints.
    #[must_use]
    pub fn can_administer(self) -> bool {
        matches!(self, Self::Admin | Self::Moderator)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub roles: Option<Role>,
    #[serde(default)]
    pub confirmed: Option<bool>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl User {
    #[must_use]
    pub fn role(&self) -> Role {
        self.roles.unwrap_or_default()
    }

    /// Missing `active` counts as active.
    #[must_use]
    pub fn is_banned(&self) -> bool {
        self.active == Some(false)
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.username
            .clone()
            .or_else(|| self.first_name.clone())
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

const COLUMNS: &[Column] = &[
    Column::end("id", "ID"),
    Column::start("username", "Username"),
    Column::start("first_name", "First name"),
    Column::start("birthday", "Birthday"),
    Column::start("email", "Email"),
    Column::start("roles", "Role"),
    Column::start("created_at", "Created"),
    Column::start("status", "Status"),
];

const FORM_FIELDS: &[FormField] = &[
    FormField::new("first_name", "First name", FieldKind::Text),
    FormField::new("username", "Username", FieldKind::Text),
    FormField::new("email", "Email", FieldKind::Email),
    FormField::new("birthday", "Birthday", FieldKind::Date),
    FormField::new("password", "Password", FieldKind::Password),
];

const ACTIONS: &[RowAction] = &[RowAction::Edit, RowAction::Delete, RowAction::Ban];

impl Entity for User {
    const NOUN: &'static str = "user";
    const TITLE: &'static str = "Users";
    const COLLECTION_PATH: &'static str = "/api/users/";
    const ITEM_PATH: &'static str = "/api/users";
    const PAGED: bool = true;

    fn id(&self) -> RecordId {
        self.id
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.username.clone().unwrap_or_default(),
            self.first_name.clone().unwrap_or_default(),
            format_birthday(self.birthday.as_deref()),
            self.email.clone().unwrap_or_default(),
            self.roles.map(Role::as_str).unwrap_or_default().to_owned(),
            format_timestamp(self.created_at.as_deref()),
            if self.is_banned() { "banned" } else { "active" }.to_owned(),
        ]
    }

    fn form_fields() -> &'static [FormField] {
        FORM_FIELDS
    }

    fn form_values(&self) -> FormValues {
        FormValues::from_pairs([
            ("first_name", self.first_name.clone().unwrap_or_default()),
            ("username", self.username.clone().unwrap_or_default()),
            ("email", self.email.clone().unwrap_or_default()),
            ("birthday", self.birthday.clone().unwrap_or_default()),
            ("password", String::new()),
        ])
    }

    fn mark_banned(&mut self) {
        self.active = Some(false);
    }

    fn request_body(values: &FormValues) -> serde_json::Value {
        let mut body = serde_json::json!({
            "first_name": values.get("first_name").trim(),
            "username": values.get("username").trim(),
            "email": values.get("email").trim(),
            "birthday": values.json_or_null("birthday"),
        });
        let password = values.get("password");
        if !password.is_empty() {
            body["password"] = serde_json::Value::String(password.to_owned());
        }
        body
    }

    fn row_actions() -> &'static [RowAction] {
        ACTIONS
    }
}
