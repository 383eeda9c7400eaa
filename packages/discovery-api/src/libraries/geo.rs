use geohash::{encode, Coord};

use crate::models::ApiError;

/// Precision level 7 gives a roughly 153m x 153m cell, enough for a
/// radius-based event search.
pub const GEOHASH_PRECISION: usize = 7;

/// Encode raw latitude/longitude strings into a geohash cell.
///
/// Both values must parse as floats and fall within valid GPS ranges;
/// anything else is reported as invalid coordinates.
pub fn encode_geo_point(lat: &str, lon: &str) -> Result<String, ApiError> {
    let latitude: f64 = lat.parse().map_err(|_| ApiError::InvalidCoordinates)?;
    let longitude: f64 = lon.parse().map_err(|_| ApiError::InvalidCoordinates)?;

    encode(
        Coord {
            x: longitude,
            y: latitude,
        },
        GEOHASH_PRECISION,
    )
    .map_err(|_| ApiError::InvalidCoordinates)
}
