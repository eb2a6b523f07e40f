use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt::Debug;
use tracing::debug;

use crate::error::SmhiError;

/// Default endpoint of the SMHI open-data point forecast service.
const DEFAULT_BASE_URL: &str = "https://opendata-download-metfcst.smhi.se";

/// Fetch capability for raw forecast documents.
///
/// Both operations take the coordinates as opaque string tokens; they are
/// interpolated into the request URL without parsing or validation. A test
/// double implementing this trait can replace the network-backed [`SmhiApi`]
/// via [`Smhi::with_api`](crate::Smhi::with_api).
#[async_trait]
pub trait ForecastApi: Send + Sync + Debug {
    /// Fetch the forecast document, blocking the calling thread until the
    /// response has been received and decoded.
    fn fetch_json(&self, longitude: &str, latitude: &str) -> Result<Value, SmhiError>;

    /// Fetch the forecast document without blocking a worker thread.
    ///
    /// When `session` is given its connection pool is reused across calls;
    /// otherwise a one-shot client is built for this request only.
    async fn fetch_json_async(
        &self,
        longitude: &str,
        latitude: &str,
        session: Option<&Client>,
    ) -> Result<Value, SmhiError>;
}

/// Network-backed implementation against the SMHI open-data API.
#[derive(Debug, Clone)]
pub struct SmhiApi {
    base_url: String,
}

impl Default for SmhiApi {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }
}

impl SmhiApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different host, e.g. a mock server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn data_url(&self, longitude: &str, latitude: &str) -> String {
        format!(
            "{}/api/category/pmp3g/version/2/geotype/point/lon/{longitude}/lat/{latitude}/data.json",
            self.base_url
        )
    }
}

#[async_trait]
impl ForecastApi for SmhiApi {
    fn fetch_json(&self, longitude: &str, latitude: &str) -> Result<Value, SmhiError> {
        let url = self.data_url(longitude, latitude);
        debug!(%url, "fetching forecast (blocking)");

        let response = reqwest::blocking::get(&url)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SmhiError::UnexpectedStatus(status));
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_json_async(
        &self,
        longitude: &str,
        latitude: &str,
        session: Option<&Client>,
    ) -> Result<Value, SmhiError> {
        let url = self.data_url(longitude, latitude);
        debug!(%url, pooled = session.is_some(), "fetching forecast");

        let response = match session {
            Some(client) => client.get(&url).send().await?,
            None => Client::new().get(&url).send().await?,
        };

        // The async path is strict: anything but 200 OK fails the call.
        let status = response.status();
        if status != StatusCode::OK {
            return Err(SmhiError::UnexpectedStatus(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
