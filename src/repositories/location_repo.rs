//! Location repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{BoundingBox, Location, NewLocation};

/// Location repository holding an async connection pool.
#[derive(Clone)]
pub struct LocationRepository {
    pool: AsyncDbPool,
}

impl LocationRepository {
    /// Creates a new LocationRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new location in the database.
    ///
    /// # Returns
    /// The created location with its generated id
    pub async fn create(&self, new_location: NewLocation) -> Result<Location, AppError> {
        use crate::schema::locations::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(locations)
            .values(&new_location)
            .returning(Location::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds all locations belonging to an organisation, optionally filtered
    /// by a bounding box.
    ///
    /// Bounding-box bounds are inclusive on all four edges.
    pub async fn find_for_organisation(
        &self,
        org_id: i32,
        bounding_box: Option<BoundingBox>,
    ) -> Result<Vec<Location>, AppError> {
        use crate::schema::locations::dsl::*;
        let mut conn = self.pool.get().await?;

        let mut query = locations
            .select(Location::as_select())
            .filter(organisation_id.eq(org_id))
            .into_boxed();

        if let Some(bbox) = bounding_box {
            query = query
                .filter(latitude.ge(bbox.min_latitude))
                .filter(latitude.le(bbox.max_latitude))
                .filter(longitude.ge(bbox.min_longitude))
                .filter(longitude.le(bbox.max_longitude));
        }

        query.load(&mut conn).await.map_err(AppError::from)
    }
}
