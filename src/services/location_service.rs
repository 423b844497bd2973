//! Location service for business logic operations.

use crate::error::{AppError, AppResult};
use crate::models::{BoundingBox, Location, NewLocation};
use crate::repositories::{LocationRepository, OrganisationRepository};

/// Location service for handling location-related business logic.
///
/// Locations belong to organisations, so the service also holds the
/// organisation repository for the referential check on create.
#[derive(Clone)]
pub struct LocationService {
    repo: LocationRepository,
    organisations: OrganisationRepository,
}

impl LocationService {
    /// Creates a new LocationService with the given repositories.
    pub fn new(repo: LocationRepository, organisations: OrganisationRepository) -> Self {
        Self { repo, organisations }
    }

    /// Creates a new location for an organisation.
    ///
    /// The referenced organisation must exist; otherwise returns `NotFound`
    /// and persists nothing. Latitude and longitude are stored as given,
    /// without range checks.
    pub async fn create_location(&self, new_location: NewLocation) -> AppResult<Location> {
        self.organisations
            .find_by_id(new_location.organisation_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("organisation", "id", new_location.organisation_id)
            })?;

        self.repo.create(new_location).await
    }

    /// Lists an organisation's locations, optionally filtered by a bounding box.
    ///
    /// Returns `NotFound` when the resulting list is empty. This is a single
    /// error for three indistinguishable cases: the organisation does not
    /// exist, it has no locations, or no location falls inside the box —
    /// organisation existence is intentionally not checked separately here.
    pub async fn list_locations(
        &self,
        organisation_id: i32,
        bounding_box: Option<BoundingBox>,
    ) -> AppResult<Vec<Location>> {
        let locations = self
            .repo
            .find_for_organisation(organisation_id, bounding_box)
            .await?;

        if locations.is_empty() {
            return Err(AppError::not_found(
                "location",
                "organisation_id",
                organisation_id,
            ));
        }

        Ok(locations)
    }
}
