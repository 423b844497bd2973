//! Database models for all domain entities.

mod location;
mod organisation;

pub use location::{BoundingBox, Location, NewLocation};
pub use organisation::{NewOrganisation, Organisation};
