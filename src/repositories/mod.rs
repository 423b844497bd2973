//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities.

mod location_repo;
mod organisation_repo;

pub use location_repo::LocationRepository;
pub use organisation_repo::OrganisationRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub organisations: OrganisationRepository,
    pub locations: LocationRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            organisations: OrganisationRepository::new(pool.clone()),
            locations: LocationRepository::new(pool),
        }
    }
}
