//! REST clients for the hosted database and auth service.
//!
//! [`RestClient`] owns the transport: endpoint composition, the api-key and
//! bearer headers, provider error decoding, and the session cell shared by
//! the data and auth surfaces. [`RestStore`] and [`RestAuth`] are the typed
//! interfaces the app consumes.
mod auth;
mod query;
mod store;

pub use auth::RestAuth;
pub use query::{TableQuery, parse_content_range};
pub use store::RestStore;

use std::cell::RefCell;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::config::SiteConfig;
use crate::error::Error;

/// Shared transport for the hosted service.
pub struct RestClient {
    http: reqwest::Client,
    config: SiteConfig,
    session: RefCell<Option<Session>>,
}

/// Error body the service returns alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct ProviderError {
    code: Option<String>,
    message: Option<String>,
}

impl RestClient {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session: RefCell::new(auth::restore_session()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub(crate) fn session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub(crate) fn set_session(&self, session: Option<Session>) {
        auth::persist_session(session.as_ref());
        *self.session.borrow_mut() = session;
    }

    /// Bearer value for the next request: the user token when signed in,
    /// the publishable key otherwise.
    fn bearer(&self) -> String {
        self.session
            .borrow()
            .as_ref()
            .map_or_else(|| self.config.anon_key.clone(), |s| s.access_token.clone())
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", format!("Bearer {}", self.bearer()))
    }

    async fn decode_failure(response: reqwest::Response) -> Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let parsed: Option<ProviderError> = serde_json::from_str(&body).ok();
        let (code, message) = match parsed {
            Some(provider) => (
                provider.code,
                provider.message.unwrap_or_else(|| status.to_string()),
            ),
            None => (None, status.to_string()),
        };
        Error::Store { code, message }
    }

    async fn expect_ok(response: reqwest::Response) -> Result<reqwest::Response, Error> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::decode_failure(response).await)
        }
    }

    /// Run one table read and decode the row list.
    pub(crate) async fn rows<T: DeserializeOwned>(&self, query: &TableQuery) -> Result<Vec<T>, Error> {
        let url = self.config.rest_endpoint(query.table);
        let response = self
            .request(reqwest::Method::GET, &url)
            .query(&query.params())
            .send()
            .await
            .map_err(|e| Error::network(&e))?;
        let response = Self::expect_ok(response).await?;
        response.json().await.map_err(|e| Error::network(&e))
    }

    /// Single-object read. The provider's "no rows" code maps to `None`;
    /// every other failure surfaces.
    pub(crate) async fn maybe_single<T: DeserializeOwned>(
        &self,
        query: &TableQuery,
    ) -> Result<Option<T>, Error> {
        let url = self.config.rest_endpoint(query.table);
        let response = self
            .request(reqwest::Method::GET, &url)
            .query(&query.params())
            .header("Accept", "application/vnd.pgrst.object+json")
            .send()
            .await
            .map_err(|e| Error::network(&e))?;
        match Self::expect_ok(response).await {
            Ok(ok) => ok.json().await.map(Some).map_err(|e| Error::network(&e)),
            Err(err) if err.is_no_rows() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub(crate) async fn insert<B: Serialize>(&self, table: &str, body: &B) -> Result<(), Error> {
        let url = self.config.rest_endpoint(table);
        let response = self
            .request(reqwest::Method::POST, &url)
            .header("Prefer", "return=minimal")
            .json(body)
            .send()
            .await
            .map_err(|e| Error::network(&e))?;
        Self::expect_ok(response).await.map(|_| ())
    }

    pub(crate) async fn update<B: Serialize>(
        &self,
        query: &TableQuery,
        body: &B,
    ) -> Result<(), Error> {
        let url = self.config.rest_endpoint(query.table);
        let response = self
            .request(reqwest::Method::PATCH, &url)
            .query(&query.filter_params())
            .header("Prefer", "return=minimal")
            .json(body)
            .send()
            .await
            .map_err(|e| Error::network(&e))?;
        Self::expect_ok(response).await.map(|_| ())
    }

    pub(crate) async fn delete(&self, query: &TableQuery) -> Result<(), Error> {
        let url = self.config.rest_endpoint(query.table);
        let response = self
            .request(reqwest::Method::DELETE, &url)
            .query(&query.filter_params())
            .send()
            .await
            .map_err(|e| Error::network(&e))?;
        Self::expect_ok(response).await.map(|_| ())
    }

    /// Exact row count for a predicate, taken from the `Content-Range` tail.
    pub(crate) async fn count(&self, query: &TableQuery) -> Result<u64, Error> {
        let url = self.config.rest_endpoint(query.table);
        let response = self
            .request(reqwest::Method::GET, &url)
            .query(&query.params())
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(|e| Error::network(&e))?;
        let response = Self::expect_ok(response).await?;
        let total = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range);
        total.ok_or_else(|| Error::Store {
            code: None,
            message: String::from("count response missing Content-Range"),
        })
    }

    pub(crate) async fn auth_post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.config.auth_endpoint(path);
        let response = self
            .request(reqwest::Method::POST, &url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::network(&e))?;
        let response = Self::expect_ok(response).await?;
        response.json().await.map_err(|e| Error::network(&e))
    }

    pub(crate) async fn auth_post_empty<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let url = self.config.auth_endpoint(path);
        let response = self
            .request(reqwest::Method::POST, &url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::network(&e))?;
        Self::expect_ok(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Identity;

    fn client() -> RestClient {
        RestClient::new(SiteConfig::new("https://example.supabase.co", "anon-key"))
    }

    #[test]
    fn bearer_switches_to_the_user_token_after_sign_in() {
        let client = client();
        assert_eq!(client.bearer(), "anon-key");

        client.set_session(Some(Session {
            access_token: String::from("user-token"),
            user: Identity {
                id: String::from("u1"),
                email: String::from("u1@example.com"),
            },
        }));
        assert_eq!(client.bearer(), "user-token");

        client.set_session(None);
        assert_eq!(client.bearer(), "anon-key");
    }
}
