//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod location_service;
mod organisation_service;

pub use location_service::LocationService;
pub use organisation_service::OrganisationService;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub organisations: OrganisationService,
    pub locations: LocationService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            organisations: OrganisationService::new(repos.organisations.clone()),
            locations: LocationService::new(repos.locations, repos.organisations),
        }
    }
}
