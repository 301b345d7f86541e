// RouterOS REST HTTP client
//
// Wraps `reqwest::Client` with RouterOS URL construction, basic auth and
// error-body parsing. One instance is built per process and shared by all
// requests, so the underlying connection pool is reused across calls.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::resource::{Fields, ID_FIELD, ResourceClient, ResourcePath, Row};
use crate::rest::models::{ListBody, RestErrorBody};
use crate::transport::TransportConfig;

/// HTTP client for the RouterOS REST API.
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    password: SecretString,
}

impl RestClient {
    /// Create a new REST client from a `TransportConfig`.
    ///
    /// The `base_url` is the router root, e.g. `https://192.168.88.1`.
    /// No request is made until the first call.
    pub fn new(
        base_url: Url,
        username: String,
        password: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url, username, password))
    }

    /// Create a REST client with a pre-built `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        username: String,
        password: SecretString,
    ) -> Self {
        Self {
            http,
            base_url,
            username,
            password,
        }
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{base}/rest/{path}`
    fn collection_url(&self, path: ResourcePath) -> Result<Url, Error> {
        let full = format!(
            "{}/rest/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.as_str()
        );
        Ok(Url::parse(&full)?)
    }

    /// `{base}/rest/{path}/{id}` -- ids look like `*1A`, which are path-safe.
    fn record_url(&self, path: ResourcePath, id: &str) -> Result<Url, Error> {
        let full = format!(
            "{}/rest/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.as_str(),
            id
        );
        Ok(Url::parse(&full)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Attach credentials, send, and turn non-2xx replies into errors.
    /// Returns the raw response body on success.
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<String, Error> {
        let resp = req
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        trace!(status = status.as_u16(), body_len = body.len(), "response");

        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "router rejected the username or password".into(),
            });
        }

        if !status.is_success() {
            return Err(parse_error_body(status, &body));
        }

        Ok(body)
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
        serde_json::from_str(body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: body.to_owned(),
        })
    }
}

fn parse_error_body(status: StatusCode, body: &str) -> Error {
    let parsed: Option<RestErrorBody> = serde_json::from_str(body).ok();
    let (message, detail) = match parsed {
        Some(err) => (
            err.message
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_owned()),
            err.detail,
        ),
        None => (
            status.canonical_reason().unwrap_or("error").to_owned(),
            (!body.trim().is_empty()).then(|| body.trim().to_owned()),
        ),
    };
    Error::Trap {
        status: status.as_u16(),
        message,
        detail,
    }
}

impl ResourceClient for RestClient {
    async fn list(&self, path: ResourcePath) -> Result<Vec<Row>, Error> {
        let url = self.collection_url(path)?;
        debug!("GET {}", url);

        let body = self.send(self.http.get(url)).await?;
        let listing: ListBody = Self::decode(&body)?;
        Ok(listing.into_rows())
    }

    async fn add(&self, path: ResourcePath, fields: &Fields) -> Result<Option<String>, Error> {
        let url = self.collection_url(path)?;
        debug!("PUT {}", url);

        let body = self.send(self.http.put(url).json(fields)).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        let created: Row = Self::decode(&body)?;
        Ok(created
            .get(ID_FIELD)
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned))
    }

    async fn set(&self, path: ResourcePath, id: &str, fields: &Fields) -> Result<(), Error> {
        let url = self.record_url(path, id)?;
        debug!("PATCH {}", url);

        self.send(self.http.patch(url).json(fields)).await?;
        Ok(())
    }

    async fn remove(&self, path: ResourcePath, id: &str) -> Result<(), Error> {
        let url = self.record_url(path, id)?;
        debug!("DELETE {}", url);

        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}
