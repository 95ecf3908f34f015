//! Last-resort district-centroid lookup for Seoul addresses.
//!
//! When every network tier has failed, an address still maps to something
//! useful: the centroid of the first Seoul district whose name occurs in
//! it, or Seoul City Hall when none does. Total by construction.

use zeromap_core::Coordinates;

/// Representative centroids for Seoul's 25 districts, keyed by the short
/// district name as it appears in addresses.
///
/// The scan takes the first entry whose key occurs in the address, so this
/// declaration order is load-bearing for addresses that mention several
/// districts. Do not reorder.
const DISTRICT_CENTROIDS: &[(&str, Coordinates)] = &[
    ("강남", Coordinates::new(37.5172, 127.0473)),
    ("강동", Coordinates::new(37.5301, 127.1238)),
    ("강북", Coordinates::new(37.6396, 127.0257)),
    ("강서", Coordinates::new(37.5509, 126.8495)),
    ("관악", Coordinates::new(37.4784, 126.9516)),
    ("광진", Coordinates::new(37.5384, 127.0822)),
    ("구로", Coordinates::new(37.4954, 126.8874)),
    ("금천", Coordinates::new(37.4569, 126.8956)),
    ("노원", Coordinates::new(37.6542, 127.0568)),
    ("도봉", Coordinates::new(37.6688, 127.0471)),
    ("동대문", Coordinates::new(37.5744, 127.0395)),
    ("동작", Coordinates::new(37.5124, 126.9393)),
    ("마포", Coordinates::new(37.5636, 126.9084)),
    ("서대문", Coordinates::new(37.5791, 126.9368)),
    ("서초", Coordinates::new(37.4837, 127.0324)),
    ("성동", Coordinates::new(37.5634, 127.0369)),
    ("성북", Coordinates::new(37.5894, 127.0167)),
    ("송파", Coordinates::new(37.5145, 127.1059)),
    ("양천", Coordinates::new(37.5270, 126.8566)),
    ("영등포", Coordinates::new(37.5264, 126.8892)),
    ("용산", Coordinates::new(37.5384, 126.9654)),
    ("은평", Coordinates::new(37.6027, 126.9291)),
    ("종로", Coordinates::new(37.5735, 126.9789)),
    ("중구", Coordinates::new(37.5640, 126.9979)),
    ("중랑", Coordinates::new(37.6064, 127.0926)),
];

/// Returns the centroid of the first table entry whose district name
/// occurs anywhere in `address`.
#[must_use]
pub fn district_centroid(address: &str) -> Option<Coordinates> {
    DISTRICT_CENTROIDS
        .iter()
        .find(|(district, _)| address.contains(district))
        .map(|(_, coords)| *coords)
}

/// Total address-to-coordinates fallback.
///
/// Empty input and addresses naming no Seoul district both resolve to
/// [`Coordinates::SEOUL_CITY_HALL`]. Always returns a coordinate inside
/// Korea's bounding box; never fails.
#[must_use]
pub fn simple_address_to_coordinates(address: &str) -> Coordinates {
    if address.is_empty() {
        return Coordinates::SEOUL_CITY_HALL;
    }
    district_centroid(address).unwrap_or(Coordinates::SEOUL_CITY_HALL)
}
