//! Shared entity schema for the admin panel and its command-line client.
//!
//! This crate owns everything that can be decided without I/O: the record
//! types returned by the backend, how a record becomes a table row, which
//! HTTP request an operation maps to, and how a failed response is reported.
//! Both the browser `client` and the native `cli` feed their HTTP results
//! through these types so the two front-ends behave identically.

pub mod contact;
pub mod date;
pub mod error;
pub mod form;
pub mod plan;
pub mod query;
pub mod row;
pub mod schema;
pub mod session;
pub mod user;

pub use contact::Contact;
pub use error::{ApiFailure, FormError};
pub use form::{FieldKind, FormField, FormValues, SubmitTarget};
pub use plan::{Method, RequestPlan};
pub use query::ListQuery;
pub use row::{Cell, Row, RowAction};
pub use schema::{Align, Column, Entity, RecordId};
pub use session::{ACCESS_TOKEN_KEY, SessionToken, StaticToken, TokenSource};
pub use user::{Role, User};
