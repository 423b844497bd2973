//! Organisation service for business logic operations.

use crate::error::{AppError, AppResult};
use crate::models::{NewOrganisation, Organisation};
use crate::repositories::OrganisationRepository;

/// Organisation service for handling organisation-related business logic.
///
/// Wraps the `OrganisationRepository`; cloning is cheap since the repository
/// holds the pool by `Arc` internally.
#[derive(Clone)]
pub struct OrganisationService {
    repo: OrganisationRepository,
}

impl OrganisationService {
    /// Creates a new OrganisationService with the given repository.
    pub fn new(repo: OrganisationRepository) -> Self {
        Self { repo }
    }

    /// Creates a new organisation.
    ///
    /// Names are persisted as given; empty and duplicate names are accepted.
    pub async fn create_organisation(
        &self,
        new_organisation: NewOrganisation,
    ) -> AppResult<Organisation> {
        self.repo.create(new_organisation).await
    }

    /// Gets an organisation by its ID.
    ///
    /// # Returns
    /// The organisation if found, or `NotFound` error
    pub async fn get_organisation(&self, id: i32) -> AppResult<Organisation> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("organisation", "id", id))
    }

    /// Lists all organisations.
    ///
    /// An empty list is a valid result, not an error.
    pub async fn list_organisations(&self) -> AppResult<Vec<Organisation>> {
        self.repo.list_all().await
    }
}
