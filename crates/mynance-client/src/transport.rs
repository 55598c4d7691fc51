//! Shared request path for every sub-client.
//!
//! One [`Transport`] per [`crate::MynanceClient`]: it owns the configured
//! `reqwest` client (cookie store included), the base address, and the
//! session-expiry hook. Every request any sub-client issues funnels
//! through [`Transport::dispatch`], which is the single place the 401
//! interception lives.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ApiError;
use crate::session::SessionExpiryHook;

/// JSON error body the backend attaches to failing responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: Url,
    hook: SessionExpiryHook,
}

impl Transport {
    pub(crate) fn new(http: reqwest::Client, base_url: Url, hook: SessionExpiryHook) -> Self {
        Self {
            http,
            base_url,
            hook,
        }
    }

    /// Human-readable endpoint label used in errors and logs.
    fn endpoint(method: &Method, path: &str) -> String {
        format!("{method} /{path}")
    }

    /// Issue one request and return the raw response.
    ///
    /// Transport failures are retried with backoff, then surfaced as
    /// [`ApiError::Transport`] (no status, hook untouched). Once a
    /// response exists its status is inspected exactly once here: a 401
    /// notifies the session-expiry hook, synchronously, before the
    /// response is handed back; the caller still sees the failure.
    pub(crate) async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);
        let endpoint = Self::endpoint(&method, path);
        tracing::debug!(endpoint = %endpoint, "dispatching request");

        let resp = crate::retry::retry_send(|| {
            let mut req = self.http.request(method.clone(), &url);
            if let Some(body) = body {
                req = req.json(body);
            }
            req.send()
        })
        .await
        .map_err(|e| ApiError::Transport {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        if resp.status() == StatusCode::UNAUTHORIZED {
            self.hook.notify();
        }

        Ok(resp)
    }

    /// Convert a non-success response into [`ApiError::Api`], pulling the
    /// message out of the backend's `{"error": ...}` body when present and
    /// falling back to the raw body text otherwise.
    pub(crate) async fn api_error(endpoint: &str, resp: reqwest::Response) -> ApiError {
        let status = resp.status().as_u16();
        let message = match resp.text().await {
            Ok(text) => serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.error)
                .or_else(|| (!text.is_empty()).then_some(text)),
            Err(_) => None,
        };
        ApiError::Api {
            endpoint: endpoint.to_string(),
            status,
            message,
        }
    }

    /// Issue a request and deserialize the JSON success body.
    pub(crate) async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let endpoint = Self::endpoint(&method, path);
        let resp = self.dispatch(method, path, body).await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(&endpoint, resp).await);
        }

        resp.json().await.map_err(|e| ApiError::Decode {
            endpoint,
            source: e,
        })
    }

    /// Like [`Transport::request`], mapping 404 to `None` for
    /// single-record lookups.
    pub(crate) async fn request_opt<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let endpoint = Self::endpoint(&method, path);
        let resp = self.dispatch(method, path, body).await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !resp.status().is_success() {
            return Err(Self::api_error(&endpoint, resp).await);
        }

        resp.json().await.map(Some).map_err(|e| ApiError::Decode {
            endpoint,
            source: e,
        })
    }

    /// Issue a request whose success body is an acknowledgement the caller
    /// does not need (`{"message": ...}`).
    pub(crate) async fn request_unit<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let endpoint = Self::endpoint(&method, path);
        let resp = self.dispatch(method, path, body).await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(&endpoint, resp).await);
        }

        Ok(())
    }

    // -- Convenience wrappers -------------------------------------------

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn post_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.request_unit(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.request_unit(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn delete_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.request_unit(Method::DELETE, path, Some(body)).await
    }
}
