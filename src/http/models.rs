use crate::services::ReferenceDataStatus;
use crate::pricing::VehicleType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /insurance/calculate` and `PUT /insurance/{id}`.
///
/// `id` and `calculatedPremium` are accepted so a full quote can be sent
/// back, but neither is ever used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub annual_kilometers: i64,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub registration_office: Option<String>,
    #[serde(default)]
    pub vehicle_type: VehicleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_premium: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub ok: bool,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
    pub reference_data: ReferenceDataStatus,
}
