//! Organisation repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewOrganisation, Organisation};

/// Organisation repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment). No need for `Arc<OrganisationRepository>`.
#[derive(Clone)]
pub struct OrganisationRepository {
    pool: AsyncDbPool,
}

impl OrganisationRepository {
    /// Creates a new OrganisationRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new organisation in the database.
    ///
    /// # Returns
    /// The created organisation with its generated id
    pub async fn create(&self, new_organisation: NewOrganisation) -> Result<Organisation, AppError> {
        use crate::schema::organisations::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(organisations)
            .values(&new_organisation)
            .returning(Organisation::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds an organisation by its ID.
    ///
    /// # Returns
    /// `Some(Organisation)` if found, `None` otherwise
    pub async fn find_by_id(&self, organisation_id: i32) -> Result<Option<Organisation>, AppError> {
        use crate::schema::organisations::dsl::*;
        let mut conn = self.pool.get().await?;

        organisations
            .filter(id.eq(organisation_id))
            .select(Organisation::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists all organisations in storage order.
    pub async fn list_all(&self) -> Result<Vec<Organisation>, AppError> {
        use crate::schema::organisations::dsl::*;
        let mut conn = self.pool.get().await?;

        organisations
            .select(Organisation::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
