use diesel::prelude::*;
use serde::Deserialize;

/// Organisation model for reading from database
/// Derives Queryable for SELECT operations and Selectable for type-safe column selection
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::organisations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Organisation {
    pub id: i32,
    pub name: String,
}

/// NewOrganisation model for inserting new records
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::organisations)]
pub struct NewOrganisation {
    pub name: String,
}
