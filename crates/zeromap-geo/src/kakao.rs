//! HTTP client for the Kakao local REST API.
//!
//! Wraps `reqwest` with the `KakaoAK` authorization header, typed response
//! deserialization, and the Korea bounding-box gate on every coordinate
//! that comes back. "No candidate" and "unusable candidate" both surface
//! as `Ok(None)`; only transport and decode problems become errors.

use std::time::Duration;

use reqwest::{Client, Url};
use zeromap_core::Coordinates;

use crate::error::GeoError;
use crate::types::{AddressSearchResponse, Coord2AddressResponse};

const DEFAULT_BASE_URL: &str = "https://dapi.kakao.com/";
const ADDRESS_SEARCH_PATH: &str = "v2/local/search/address.json";
const COORD_TO_ADDRESS_PATH: &str = "v2/local/geo/coord2address.json";

/// Client for the Kakao local REST API.
///
/// Manages the HTTP client, REST API key, and base URL. Use
/// [`KakaoClient::new`] for production or [`KakaoClient::with_base_url`]
/// to point at a mock server in tests.
pub struct KakaoClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl KakaoClient {
    /// Creates a new client pointed at the production Kakao API.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, GeoError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeoError::Client`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("zeromap/0.1 (place-discovery)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the endpoint path instead of replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| GeoError::Client(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Geocodes a free-text address to WGS-84 coordinates.
    ///
    /// Reads only the first candidate document. Returns `Ok(None)` when the
    /// provider has no candidate, or when the candidate's coordinates fail
    /// to parse or fall outside Korea's bounding box — expected outcomes
    /// the caller handles by falling back to the next resolution tier.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeoError::Deserialize`] if the response body is not the expected
    ///   JSON shape.
    pub async fn address_to_coordinates(
        &self,
        address: &str,
    ) -> Result<Option<Coordinates>, GeoError> {
        let url = self.build_url(ADDRESS_SEARCH_PATH, &[("query", address)])?;
        let body: AddressSearchResponse = self.request_json(&url).await?;

        let Some(document) = body.documents.into_iter().next() else {
            tracing::debug!(address, "no geocoding candidate for address");
            return Ok(None);
        };

        Ok(parse_point(&document.y, &document.x, address))
    }

    /// Reverse-geocodes a coordinate pair to a display address.
    ///
    /// Prefers the lot-number address and falls back to the road-name
    /// address; `Ok(None)` when the provider knows neither.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeoError::Deserialize`] if the response body is not the expected
    ///   JSON shape.
    pub async fn coordinates_to_address(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<String>, GeoError> {
        let url = self.build_url(
            COORD_TO_ADDRESS_PATH,
            &[
                ("x", longitude.to_string().as_str()),
                ("y", latitude.to_string().as_str()),
            ],
        )?;
        let body: Coord2AddressResponse = self.request_json(&url).await?;

        let Some(document) = body.documents.into_iter().next() else {
            return Ok(None);
        };

        let address = document
            .address
            .map(|a| a.address_name)
            .or_else(|| document.road_address.map(|a| a.address_name));
        Ok(address)
    }

    /// Infallible surface over [`KakaoClient::coordinates_to_address`].
    ///
    /// A failed reverse lookup is a routine outcome the caller handles by
    /// showing a placeholder, not an exceptional condition: transport and
    /// decode errors are logged and mapped to `None`, matching how the
    /// forward chain swallows per-tier failures.
    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Option<String> {
        match self.coordinates_to_address(latitude, longitude).await {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(
                    latitude,
                    longitude,
                    error = %err,
                    "reverse geocoding failed"
                );
                None
            }
        }
    }

    /// Joins the endpoint path onto the base URL and appends the query
    /// parameters with proper percent-encoding.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, GeoError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| GeoError::Client(format!("invalid endpoint path '{path}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends an authorized GET request, asserts a 2xx status, and parses
    /// the body into `T`.
    async fn request_json<T: serde::de::DeserializeOwned>(&self, url: &Url) -> Result<T, GeoError> {
        let response = self
            .client
            .get(url.clone())
            .header(
                reqwest::header::AUTHORIZATION,
                format!("KakaoAK {}", self.api_key),
            )
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeoError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }
}

/// Parses provider string coordinates, rejecting anything unparseable or
/// outside Korea's bounding box (which also catches a literal `"NaN"`).
fn parse_point(y: &str, x: &str, address: &str) -> Option<Coordinates> {
    let (Ok(latitude), Ok(longitude)) = (y.parse::<f64>(), x.parse::<f64>()) else {
        tracing::warn!(address, y, x, "provider returned unparseable coordinates");
        return None;
    };
    let coords = Coordinates::new(latitude, longitude);
    if !coords.in_korea() {
        tracing::warn!(
            address,
            latitude,
            longitude,
            "provider coordinates fall outside Korea's bounding box"
        );
        return None;
    }
    Some(coords)
}
