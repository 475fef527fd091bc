//! Request planning: which method, path and body an operation needs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plans are computed before any I/O so the browser (`gloo-net`) and native
//! (`reqwest`) transports issue byte-identical requests.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use serde_json::Value;

use crate::form::{FormValues, SubmitTarget};
use crate::query::ListQuery;
use crate::schema::{Entity, RecordId};
use crate::user;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully resolved request, minus the base URL and auth header.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestPlan {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl RequestPlan {
    fn new(method: Method, path: String) -> Self {
        Self { method, path, body: None }
    }

    #[must_use]
    pub fn list<E: Entity>(query: &ListQuery) -> Self {
        let path = format!("{}{}", E::COLLECTION_PATH, query.to_query_string(E::PAGED));
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn fetch<E: Entity>(id: RecordId) -> Self {
        Self::new(Method::Get, E::item_path(id))
    }

    /// POST to the collection for [`SubmitTarget::Create`], PUT to the item otherwise.
    #[must_use]
    pub fn submit<E: Entity>(target: SubmitTarget, values: &FormValues) -> Self {
        let (method, path) = match target {
            SubmitTarget::Create => (Method::Post, E::COLLECTION_PATH.to_owned()),
            SubmitTarget::Edit(id) => (Method::Put, E::item_path(id)),
        };
        Self {
            method,
            path,
            body: Some(E::request_body(values)),
        }
    }

    #[must_use]
    pub fn delete<E: Entity>(id: RecordId) -> Self {
        Self::new(Method::Delete, E::item_path(id))
    }

    #[must_use]
    pub fn current_user() -> Self {
        Self::new(Method::Get, user::CURRENT_USER_PATH.to_owned())
    }

    #[must_use]
    pub fn ban_user(id: RecordId) -> Self {
        Self::new(Method::Patch, user::ban_path(id))
    }

    /// Absolute URL against `base` (trailing slashes on `base` are ignored).
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }
}
