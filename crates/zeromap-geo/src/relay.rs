//! Client for the server-side geocoding relay.
//!
//! The relay exists so mobile builds without direct provider access can
//! still geocode: `POST /api/coord` with `{"address": …}` answers with a
//! `{success, coordinates, note?}` envelope, applying its own district
//! fallback server-side before responding.

use std::time::Duration;

use reqwest::{Client, Url};
use zeromap_core::Coordinates;

use crate::error::GeoError;
use crate::types::RelayResponse;

const COORD_PATH: &str = "api/coord";

/// Client for the relay's coordinate endpoint.
pub struct RelayClient {
    client: Client,
    base_url: Url,
}

impl RelayClient {
    /// Creates a new client for the relay at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeoError::Client`] if `base_url` is not
    /// a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, GeoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("zeromap/0.1 (place-discovery)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| GeoError::Client(format!("invalid relay URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Resolves an address through the relay.
    ///
    /// Returns `Ok(None)` for an unsuccessful envelope, a missing
    /// coordinate object, or coordinates outside Korea's bounding box.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeoError::Deserialize`] if the response body is not the expected
    ///   JSON shape.
    pub async fn resolve(&self, address: &str) -> Result<Option<Coordinates>, GeoError> {
        let url = self
            .base_url
            .join(COORD_PATH)
            .map_err(|e| GeoError::Client(format!("invalid endpoint path '{COORD_PATH}': {e}")))?;

        let response = self
            .client
            .post(url.clone())
            .json(&serde_json::json!({ "address": address }))
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let envelope: RelayResponse =
            serde_json::from_str(&body).map_err(|e| GeoError::Deserialize {
                context: url.path().to_string(),
                source: e,
            })?;

        match (envelope.success, envelope.coordinates) {
            (true, Some(coords)) if coords.in_korea() => {
                if let Some(note) = envelope.note {
                    tracing::debug!(address, note, "relay answered with a fallback note");
                }
                Ok(Some(coords))
            }
            (true, Some(coords)) => {
                tracing::warn!(
                    address,
                    latitude = coords.latitude,
                    longitude = coords.longitude,
                    "relay coordinates fall outside Korea's bounding box"
                );
                Ok(None)
            }
            _ => {
                tracing::warn!(address, "relay reported failure for address");
                Ok(None)
            }
        }
    }
}
