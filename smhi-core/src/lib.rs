//! Core library for the `smhi` CLI.
//!
//! Client for the point forecast endpoint of the Swedish Meteorological and
//! Hydrological Institute (SMHI) open-data API. This crate defines:
//! - The [`Forecast`] record mapped out of the API's time series
//! - A fetch capability ([`ForecastApi`]) with blocking and async paths
//! - The [`Smhi`] facade tying fetch and mapping together
//! - Configuration for a persisted default location
//!
//! It is used by `smhi-cli`, but can also be reused by other binaries or services.

pub mod api;
pub mod config;
pub mod error;
pub mod mapper;
pub mod model;

pub use api::{ForecastApi, SmhiApi};
pub use config::{Config, Location};
pub use error::SmhiError;
pub use model::Forecast;

use reqwest::Client;

/// Facade over the SMHI point forecast API for one coordinate pair.
///
/// Holds the coordinates and a fetch strategy injected at construction;
/// nothing else. Every call re-fetches from the network — there is no
/// caching between calls.
#[derive(Debug)]
pub struct Smhi {
    longitude: String,
    latitude: String,
    api: Box<dyn ForecastApi>,
}

impl Smhi {
    /// Build a facade backed by the real SMHI API.
    ///
    /// The network implementation is constructed fresh here rather than
    /// shared between instances.
    pub fn new(longitude: impl Into<String>, latitude: impl Into<String>) -> Self {
        Self::with_api(longitude, latitude, Box::new(SmhiApi::new()))
    }

    /// Build a facade with an injected fetch strategy, e.g. a test double.
    pub fn with_api(
        longitude: impl Into<String>,
        latitude: impl Into<String>,
        api: Box<dyn ForecastApi>,
    ) -> Self {
        Self { longitude: longitude.into(), latitude: latitude.into(), api }
    }

    /// Fetch and map the forecasts for the configured coordinates,
    /// blocking until the response is in. The first record is the
    /// nearest time point.
    pub fn forecasts(&self) -> Result<Vec<Forecast>, SmhiError> {
        let document = self.api.fetch_json(&self.longitude, &self.latitude)?;
        mapper::forecasts_from_json(&document)
    }

    /// Async variant of [`Smhi::forecasts`].
    ///
    /// Pass a [`Client`] to pool connections across calls; with `None`
    /// a one-shot client is used for this call.
    pub async fn forecasts_async(
        &self,
        session: Option<&Client>,
    ) -> Result<Vec<Forecast>, SmhiError> {
        let document = self.api.fetch_json_async(&self.longitude, &self.latitude, session).await?;
        mapper::forecasts_from_json(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};

    /// Test double serving a canned document without touching the network.
    #[derive(Debug)]
    struct CannedApi {
        document: Value,
    }

    #[async_trait]
    impl ForecastApi for CannedApi {
        fn fetch_json(&self, _longitude: &str, _latitude: &str) -> Result<Value, SmhiError> {
            Ok(self.document.clone())
        }

        async fn fetch_json_async(
            &self,
            _longitude: &str,
            _latitude: &str,
            _session: Option<&Client>,
        ) -> Result<Value, SmhiError> {
            Ok(self.document.clone())
        }
    }

    fn sample_document() -> Value {
        json!({
            "timeSeries": [
                {
                    "parameters": [
                        { "name": "t", "values": [17] },
                        { "name": "r", "values": [80] },
                        { "name": "msl", "values": [1004] },
                        { "name": "tstm", "values": [10] },
                        { "name": "tcc_mean", "values": [2] },
                        { "name": "Wsymb2", "values": [3] },
                    ]
                },
                {
                    "parameters": [
                        { "name": "t", "values": [14] },
                        { "name": "Wsymb2", "values": [6] },
                    ]
                },
            ]
        })
    }

    fn canned_smhi() -> Smhi {
        Smhi::with_api("17.041", "62.34198", Box::new(CannedApi { document: sample_document() }))
    }

    #[test]
    fn blocking_facade_maps_all_entries() {
        let forecasts = canned_smhi().forecasts().unwrap();

        assert_eq!(forecasts.len(), 2);
        assert_eq!(
            forecasts[0],
            Forecast {
                temperature: 17,
                humidity: 80,
                pressure: 1004,
                thunder: 10,
                cloudiness: 25,
                symbol: 3,
            }
        );
        assert_eq!(forecasts[1], Forecast { temperature: 14, symbol: 6, ..Forecast::default() });
    }

    #[tokio::test]
    async fn async_facade_matches_blocking_facade() {
        let smhi = canned_smhi();

        let blocking = smhi.forecasts().unwrap();
        let suspended = smhi.forecasts_async(None).await.unwrap();

        assert_eq!(blocking, suspended);
    }

    #[tokio::test]
    async fn async_facade_accepts_shared_session() {
        let smhi = canned_smhi();
        let session = Client::new();

        let forecasts = smhi.forecasts_async(Some(&session)).await.unwrap();
        assert_eq!(forecasts.len(), 2);
    }

    #[test]
    fn malformed_document_propagates() {
        let smhi = Smhi::with_api(
            "17.041",
            "62.34198",
            Box::new(CannedApi { document: json!({ "geometry": {} }) }),
        );

        let err = smhi.forecasts().unwrap_err();
        assert!(matches!(err, SmhiError::Malformed(_)));
    }
}
