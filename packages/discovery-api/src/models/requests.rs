use serde::Deserialize;

use crate::libraries::{categories, geo};

use super::error::ApiError;

/// Raw query parameters for `/api/search`, exactly as the browser sends
/// them. Everything is optional here; validation happens once, in
/// [`SearchRequest::from_params`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub distance: Option<String>,
    pub category: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    #[serde(rename = "geoPoint")]
    pub geo_point: Option<String>,
}

/// Raw query parameters for `/api/event`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventParams {
    pub id: Option<String>,
}

/// Raw query parameters for `/api/venue`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueParams {
    pub keyword: Option<String>,
}

/// A validated search, ready to forward upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub keyword: String,
    pub distance: String,
    pub geo_point: String,
    pub segment_id: Option<&'static str>,
}

impl SearchRequest {
    /// Validate raw parameters into a forwardable request.
    ///
    /// Location comes from an explicit `geoPoint` when present; only
    /// otherwise are `lat`/`lon` parsed and encoded. An unknown
    /// `category` is silently dropped.
    pub fn from_params(params: SearchParams) -> Result<Self, ApiError> {
        let keyword = trimmed(params.keyword)
            .ok_or(ApiError::InvalidRequest("Missing required parameters"))?;

        let geo_point = match trimmed(params.geo_point) {
            Some(point) => point,
            None => {
                let (lat, lon) = trimmed(params.lat).zip(trimmed(params.lon)).ok_or(
                    ApiError::InvalidRequest("Missing required parameters"),
                )?;
                geo::encode_geo_point(&lat, &lon)?
            }
        };

        let distance = trimmed(params.distance).unwrap_or_else(|| "10".to_string());

        let segment_id = trimmed(params.category)
            .as_deref()
            .and_then(categories::segment_id);

        Ok(Self {
            keyword,
            distance,
            geo_point,
            segment_id,
        })
    }
}

impl EventParams {
    pub fn into_id(self) -> Result<String, ApiError> {
        trimmed(self.id).ok_or(ApiError::InvalidRequest("Missing event ID"))
    }
}

impl VenueParams {
    pub fn into_keyword(self) -> Result<String, ApiError> {
        trimmed(self.keyword).ok_or(ApiError::InvalidRequest("Missing venue keyword"))
    }
}

/// Trim a raw parameter, treating blank values the same as absent ones.
fn trimmed(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params() -> SearchParams {
        SearchParams {
            keyword: Some("concert".to_string()),
            lat: Some("40.7128".to_string()),
            lon: Some("-74.0060".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_search_with_coordinates() {
        let request = SearchRequest::from_params(valid_params()).unwrap();
        assert_eq!(request.keyword, "concert");
        assert_eq!(request.distance, "10");
        assert_eq!(request.geo_point, "dr5regw");
        assert_eq!(request.segment_id, None);
    }

    #[test]
    fn test_missing_keyword_rejected() {
        let mut params = valid_params();
        params.keyword = None;
        assert!(matches!(
            SearchRequest::from_params(params),
            Err(ApiError::InvalidRequest("Missing required parameters"))
        ));

        let mut params = valid_params();
        params.keyword = Some("   ".to_string());
        assert!(matches!(
            SearchRequest::from_params(params),
            Err(ApiError::InvalidRequest("Missing required parameters"))
        ));
    }

    #[test]
    fn test_missing_location_rejected() {
        let params = SearchParams {
            keyword: Some("concert".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            SearchRequest::from_params(params),
            Err(ApiError::InvalidRequest("Missing required parameters"))
        ));

        // lat alone is not enough
        let params = SearchParams {
            keyword: Some("concert".to_string()),
            lat: Some("40.7128".to_string()),
            ..Default::default()
        };
        assert!(SearchRequest::from_params(params).is_err());
    }

    #[test]
    fn test_malformed_coordinates_rejected() {
        let mut params = valid_params();
        params.lat = Some("abc".to_string());
        params.lon = Some("12.0".to_string());
        assert!(matches!(
            SearchRequest::from_params(params),
            Err(ApiError::InvalidCoordinates)
        ));
    }

    #[test]
    fn test_explicit_geo_point_wins_over_coordinates() {
        let mut params = valid_params();
        params.geo_point = Some("9q8yyk8".to_string());
        params.lat = Some("not-a-number".to_string());
        let request = SearchRequest::from_params(params).unwrap();
        assert_eq!(request.geo_point, "9q8yyk8");
    }

    #[test]
    fn test_blank_distance_defaults_to_ten() {
        let mut params = valid_params();
        params.distance = Some("  ".to_string());
        let request = SearchRequest::from_params(params).unwrap();
        assert_eq!(request.distance, "10");

        let mut params = valid_params();
        params.distance = Some("25".to_string());
        let request = SearchRequest::from_params(params).unwrap();
        assert_eq!(request.distance, "25");
    }

    #[test]
    fn test_category_translation() {
        let mut params = valid_params();
        params.category = Some("music".to_string());
        let request = SearchRequest::from_params(params).unwrap();
        assert_eq!(request.segment_id, Some("KZFzniwnSyZfZ7v7nJ"));
    }

    #[test]
    fn test_unknown_category_silently_dropped() {
        let mut params = valid_params();
        params.category = Some("unknown".to_string());
        let request = SearchRequest::from_params(params).unwrap();
        assert_eq!(request.segment_id, None);
    }

    #[test]
    fn test_event_id_validation() {
        let params = EventParams {
            id: Some("G5vYZ9YXk1p_".to_string()),
        };
        assert_eq!(params.into_id().unwrap(), "G5vYZ9YXk1p_");

        let params = EventParams {
            id: Some("".to_string()),
        };
        assert!(matches!(
            params.into_id(),
            Err(ApiError::InvalidRequest("Missing event ID"))
        ));
    }

    #[test]
    fn test_venue_keyword_validation() {
        let params = VenueParams { keyword: None };
        assert!(matches!(
            params.into_keyword(),
            Err(ApiError::InvalidRequest("Missing venue keyword"))
        ));
    }
}
