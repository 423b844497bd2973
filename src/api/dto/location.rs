//! Location-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{BoundingBox, Location, NewLocation};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new location.
///
/// Latitude and longitude are persisted as given; values outside the valid
/// geographic ranges are accepted silently.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLocationRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub organisation_id: i32,
}

impl CreateLocationRequest {
    /// Converts the request DTO into a NewLocation model for insertion.
    pub fn into_new_location(self) -> NewLocation {
        NewLocation {
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            organisation_id: self.organisation_id,
        }
    }
}

/// Query parameters for listing an organisation's locations.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListLocationsQuery {
    /// Optional filter region as one coupled value:
    /// `min_lat,min_lon,max_lat,max_lon`
    #[param(value_type = Option<String>, example = "49.5,-8.6,59.4,1.8")]
    pub bounding_box: Option<BoundingBox>,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for location data.
#[derive(Debug, Serialize, ToSchema)]
pub struct LocationResponse {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub organisation_id: i32,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
            latitude: location.latitude,
            longitude: location.longitude,
            organisation_id: location.organisation_id,
        }
    }
}
