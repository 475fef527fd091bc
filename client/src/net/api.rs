//! REST calls against the admin backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiFailure>`; the caller decides whether
//! to alert, log, or just render an empty table. Each call asks its
//! [`TokenSource`] for the token, so nothing is cached across requests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{ApiFailure, Entity, FormValues, ListQuery, RecordId, SubmitTarget, TokenSource, User};
#[cfg(any(test, feature = "hydrate"))]
use records::RequestPlan;

/// Backend base URL, fixed at build time.
pub const API_BASE_URL: &str = match option_env!("WEBADMIN_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

#[cfg(any(test, feature = "hydrate"))]
fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiFailure> {
    serde_json::from_str(body).map_err(|e| ApiFailure::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn status_line(plan: &RequestPlan, status: u16) -> String {
    format!("{} {} -> {status}", plan.method.as_str(), plan.path)
}

/// Classify a received response. A body that could not be read is a
/// transport failure, whatever the status.
#[cfg(any(test, feature = "hydrate"))]
fn classify_response<E: std::fmt::Display>(status: u16, ok: bool, body: Result<String, E>) -> Result<String, ApiFailure> {
    let body = body.map_err(|e| ApiFailure::Transport(e.to_string()))?;
    if ok {
        Ok(body)
    } else {
        Err(ApiFailure::from_response(status, &body))
    }
}

/// Send `plan` with the session's bearer token and return the raw body of a
/// successful response.
#[cfg(feature = "hydrate")]
async fn execute(session: &impl TokenSource, plan: &RequestPlan) -> Result<String, ApiFailure> {
    use gloo_net::http::Request;
    use records::Method;

    let token = session.require_token()?;
    let url = plan.url(API_BASE_URL);
    let builder = match plan.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    }
    .header("Authorization", &token.bearer());
    let request = match &plan.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiFailure::Transport(e.to_string()))?;

    let resp = request
        .send()
        .await
        .map_err(|e| ApiFailure::Transport(e.to_string()))?;
    let status = resp.status();
    let ok = resp.ok();
    if ok {
        leptos::logging::log!("{}", status_line(plan, status));
    } else {
        leptos::logging::warn!("{}", status_line(plan, status));
    }
    classify_response(status, ok, resp.text().await)
}

/// Fetch one page of records from the entity's collection endpoint.
///
/// # Errors
///
/// Returns the request failure; a 404 is passed through for the caller to
/// treat as an empty page.
pub async fn fetch_records<E: Entity>(
    session: &impl TokenSource,
    query: &ListQuery,
) -> Result<Vec<E>, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let body = execute(session, &RequestPlan::list::<E>(query)).await?;
        decode(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, query);
        Err(unavailable())
    }
}

/// Fetch a single record for the edit form.
///
/// # Errors
///
/// Returns the request failure.
pub async fn fetch_record<E: Entity>(session: &impl TokenSource, id: RecordId) -> Result<E, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let body = execute(session, &RequestPlan::fetch::<E>(id)).await?;
        decode(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        Err(unavailable())
    }
}

/// Create (POST) or update (PUT) a record and return the stored version.
///
/// # Errors
///
/// Returns the request failure.
pub async fn save_record<E: Entity>(
    session: &impl TokenSource,
    target: SubmitTarget,
    values: &FormValues,
) -> Result<E, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let body = execute(session, &RequestPlan::submit::<E>(target, values)).await?;
        decode(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, target, values);
        Err(unavailable())
    }
}

/// Delete a record.
///
/// # Errors
///
/// Returns the request failure.
pub async fn delete_record<E: Entity>(session: &impl TokenSource, id: RecordId) -> Result<(), ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        execute(session, &RequestPlan::delete::<E>(id)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        Err(unavailable())
    }
}

/// Ban a user via `PATCH /api/users/ban/{id}`.
///
/// # Errors
///
/// Returns the request failure.
pub async fn ban_user(session: &impl TokenSource, id: RecordId) -> Result<(), ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        execute(session, &RequestPlan::ban_user(id)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        Err(unavailable())
    }
}

/// Fetch the signed-in user from `/api/users/me`.
///
/// # Errors
///
/// Returns the request failure.
pub async fn fetch_current_user(session: &impl TokenSource) -> Result<User, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let body = execute(session, &RequestPlan::current_user()).await?;
        decode(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(unavailable())
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiFailure {
    ApiFailure::Transport("not available on server".to_owned())
}
