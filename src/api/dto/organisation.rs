//! Organisation-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{NewOrganisation, Organisation};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new organisation.
///
/// The name is stored as given; there is no length, emptiness, or uniqueness
/// check on it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrganisationRequest {
    pub name: String,
}

impl CreateOrganisationRequest {
    /// Converts the request DTO into a NewOrganisation model for insertion.
    pub fn into_new_organisation(self) -> NewOrganisation {
        NewOrganisation { name: self.name }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for organisation data.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrganisationResponse {
    pub id: i32,
    pub name: String,
}

impl From<Organisation> for OrganisationResponse {
    fn from(organisation: Organisation) -> Self {
        Self {
            id: organisation.id,
            name: organisation.name,
        }
    }
}
