use crate::pricing::VehicleType;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// A persisted premium calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: i64,
    pub annual_kilometers: u32,
    pub postcode: String,
    pub registration_office: String,
    pub vehicle_type: VehicleType,
    pub calculated_premium: f64,
}

/// Field values for an insert or a full update. The premium is always the
/// server-side result.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteDraft {
    pub annual_kilometers: u32,
    pub postcode: String,
    pub registration_office: String,
    pub vehicle_type: VehicleType,
    pub calculated_premium: f64,
}

impl<'r> FromRow<'r, SqliteRow> for Quote {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let annual_kilometers: i64 = row.try_get("annual_kilometers")?;
        let vehicle_type: String = row.try_get("vehicle_type")?;

        Ok(Quote {
            id: row.try_get("id")?,
            annual_kilometers: u32::try_from(annual_kilometers).map_err(|e| {
                sqlx::Error::ColumnDecode {
                    index: "annual_kilometers".to_string(),
                    source: Box::new(e),
                }
            })?,
            postcode: row.try_get("postcode")?,
            registration_office: row.try_get("registration_office")?,
            vehicle_type: VehicleType::from_name(&vehicle_type),
            calculated_premium: row.try_get("calculated_premium")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Reference row describing a postal area. Owns its coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRecord {
    pub id: i64,
    pub region_code: String,
    pub region_name: String,
    pub country: String,
    pub city: String,
    pub postal_code: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRegion {
    pub region_code: String,
    pub region_name: String,
    pub country: String,
    pub city: String,
    pub postal_code: String,
    pub location: Location,
}

impl<'r> FromRow<'r, SqliteRow> for RegionRecord {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(RegionRecord {
            id: row.try_get("id")?,
            region_code: row.try_get("region_code")?,
            region_name: row.try_get("region_name")?,
            country: row.try_get("country")?,
            city: row.try_get("city")?,
            postal_code: row.try_get("postal_code")?,
            location: Location {
                latitude: row.try_get("latitude")?,
                longitude: row.try_get("longitude")?,
            },
        })
    }
}
