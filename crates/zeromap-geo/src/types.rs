//! Wire types for the Kakao local API and the relay endpoint.
//!
//! Kakao serializes coordinates as strings (`x` = longitude, `y` =
//! latitude); parsing and range-checking happen in the clients, not here.

use serde::Deserialize;
use zeromap_core::Coordinates;

/// Response envelope for `/v2/local/search/address.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct AddressSearchResponse {
    #[serde(default)]
    pub documents: Vec<AddressDocument>,
}

/// One geocoding candidate. Only the first is ever consulted.
#[derive(Debug, Deserialize)]
pub(crate) struct AddressDocument {
    /// Longitude, as a decimal string.
    pub x: String,
    /// Latitude, as a decimal string.
    pub y: String,
}

/// Response envelope for `/v2/local/geo/coord2address.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct Coord2AddressResponse {
    #[serde(default)]
    pub documents: Vec<Coord2AddressDocument>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Coord2AddressDocument {
    /// Lot-number address, preferred for display.
    #[serde(default)]
    pub address: Option<NamedAddress>,
    /// Road-name address, the fallback.
    #[serde(default)]
    pub road_address: Option<NamedAddress>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamedAddress {
    pub address_name: String,
}

/// Envelope returned by the relay's `POST /api/coord`.
///
/// A healthy relay applies its own district fallback server-side, so it
/// answers `success: true` even for unknown addresses, with a `note`
/// explaining the substitution.
#[derive(Debug, Deserialize)]
pub(crate) struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub note: Option<String>,
}
