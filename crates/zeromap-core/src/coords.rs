use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Seoul City Hall, the default location when nothing better is known.
    pub const SEOUL_CITY_HALL: Coordinates = Coordinates {
        latitude: 37.5665,
        longitude: 126.9780,
    };

    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether the pair falls inside Korea's bounding box.
    ///
    /// Anything outside `33.0..=38.5` latitude / `124.0..=132.0` longitude
    /// indicates a malformed provider response and must not be surfaced as
    /// a valid coordinate. `NaN` fails every range comparison, so an
    /// unguarded parse of a garbage payload is rejected here too.
    #[must_use]
    pub fn in_korea(&self) -> bool {
        (33.0..=38.5).contains(&self.latitude) && (124.0..=132.0).contains(&self.longitude)
    }
}
