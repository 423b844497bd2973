use std::str::FromStr;

use diesel::prelude::*;
use serde::{Deserialize, Deserializer};

/// Location model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::locations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub organisation_id: i32,
}

/// NewLocation model for inserting new records
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::locations)]
pub struct NewLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub organisation_id: i32,
}

/// Rectangular latitude/longitude filter region.
///
/// Travels over the wire as a single coupled query value of four
/// comma-separated floats in `min_lat,min_lon,max_lat,max_lon` order.
/// The four values are all-or-nothing; there are no independent
/// per-bound parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub min_longitude: f64,
    pub max_latitude: f64,
    pub max_longitude: f64,
}

impl FromStr for BoundingBox {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(format!(
                "bounding_box must be four comma-separated values (min_lat,min_lon,max_lat,max_lon), got {}",
                parts.len()
            ));
        }

        let mut values = [0f64; 4];
        for (i, part) in parts.iter().enumerate() {
            values[i] = part
                .parse()
                .map_err(|_| format!("bounding_box component '{}' is not a number", part))?;
        }

        Ok(Self {
            min_latitude: values[0],
            min_longitude: values[1],
            max_latitude: values[2],
            max_longitude: values[3],
        })
    }
}

impl<'de> Deserialize<'de> for BoundingBox {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_parses_four_components() {
        let bbox: BoundingBox = "49.5,-8.6,59.4,1.8".parse().unwrap();
        assert_eq!(bbox.min_latitude, 49.5);
        assert_eq!(bbox.min_longitude, -8.6);
        assert_eq!(bbox.max_latitude, 59.4);
        assert_eq!(bbox.max_longitude, 1.8);
    }

    #[test]
    fn test_bounding_box_accepts_whitespace() {
        let bbox: BoundingBox = " 0.0 , 1.0 , 2.0 , 3.0 ".parse().unwrap();
        assert_eq!(bbox.min_longitude, 1.0);
        assert_eq!(bbox.max_longitude, 3.0);
    }

    #[test]
    fn test_bounding_box_rejects_wrong_arity() {
        assert!("1.0,2.0,3.0".parse::<BoundingBox>().is_err());
        assert!("1.0,2.0,3.0,4.0,5.0".parse::<BoundingBox>().is_err());
        assert!("".parse::<BoundingBox>().is_err());
    }

    #[test]
    fn test_bounding_box_rejects_non_numeric() {
        assert!("a,b,c,d".parse::<BoundingBox>().is_err());
        assert!("1.0,2.0,3.0,north".parse::<BoundingBox>().is_err());
    }

    #[test]
    fn test_bounding_box_values_are_not_range_checked() {
        // Out-of-range coordinates pass through untouched, matching the
        // unchecked create path.
        let bbox: BoundingBox = "-200,-400,200,400".parse().unwrap();
        assert_eq!(bbox.min_latitude, -200.0);
        assert_eq!(bbox.max_longitude, 400.0);
    }
}
