//! Native REST client for the admin backend.
//!
//! Mirrors the browser client: the same request plans, the same bearer
//! header, the same failure taxonomy. Only the transport differs.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use records::{
    ApiFailure, Entity, FormValues, ListQuery, Method, RecordId, RequestPlan, StaticToken, SubmitTarget, TokenSource,
    User,
};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

pub struct AdminClient {
    http: reqwest::Client,
    base_url: String,
    session: StaticToken,
}

impl AdminClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            base_url: base_url.into(),
            session: StaticToken::new(token),
        })
    }

    /// Send `plan` and return the body of a successful response.
    ///
    /// # Errors
    ///
    /// Fails without sending when no token is configured; otherwise returns
    /// the transport error or the classified non-success response.
    pub async fn execute(&self, plan: &RequestPlan) -> Result<String, ApiFailure> {
        let token = self.session.require_token()?;
        let url = plan.url(&self.base_url);
        let method = match plan.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let request = self.http.request(method, &url).header(AUTHORIZATION, token.bearer());
        let request = if let Some(body) = &plan.body {
            request.json(body)
        } else {
            request
        };

        tracing::debug!(method = plan.method.as_str(), %url, "sending request");
        let response = request
            .send()
            .await
            .map_err(|e| ApiFailure::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiFailure::Transport(e.to_string()))?;
        tracing::debug!(status = status.as_u16(), "response received");

        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiFailure::from_response(status.as_u16(), &body))
        }
    }

    /// One page of records; a 404 (empty page) yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns any other request failure.
    pub async fn list<E: Entity>(&self, query: &ListQuery) -> Result<Vec<E>, ApiFailure> {
        match self.execute(&RequestPlan::list::<E>(query)).await {
            Ok(body) => decode(&body),
            Err(err) if err.is_not_found() => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn fetch<E: Entity>(&self, id: RecordId) -> Result<E, ApiFailure> {
        decode(&self.execute(&RequestPlan::fetch::<E>(id)).await?)
    }

    /// POST for [`SubmitTarget::Create`], PUT for [`SubmitTarget::Edit`].
    ///
    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn save<E: Entity>(&self, target: SubmitTarget, values: &FormValues) -> Result<E, ApiFailure> {
        decode(&self.execute(&RequestPlan::submit::<E>(target, values)).await?)
    }

    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn delete<E: Entity>(&self, id: RecordId) -> Result<(), ApiFailure> {
        self.execute(&RequestPlan::delete::<E>(id)).await.map(|_| ())
    }

    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn ban_user(&self, id: RecordId) -> Result<(), ApiFailure> {
        self.execute(&RequestPlan::ban_user(id)).await.map(|_| ())
    }

    /// Ban a user and return its refreshed record, marked banned.
    ///
    /// The item endpoint does not report the active flag, so the ban that
    /// just succeeded is applied to the fetched record.
    ///
    /// # Errors
    ///
    /// Returns the failure of either request.
    pub async fn ban_and_fetch(&self, id: RecordId) -> Result<User, ApiFailure> {
        self.ban_user(id).await?;
        let mut user: User = self.fetch(id).await?;
        user.mark_banned();
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn current_user(&self) -> Result<User, ApiFailure> {
        decode(&self.execute(&RequestPlan::current_user()).await?)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiFailure> {
    serde_json::from_str(body).map_err(|e| ApiFailure::Decode(e.to_string()))
}
