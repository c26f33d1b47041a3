use crate::pricing::{mileage_factor, region_factor, VehicleType};
use serde::Serialize;

/// The three multipliers behind a premium and their product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumBreakdown {
    pub mileage_factor: f64,
    pub vehicle_factor: f64,
    pub region_factor: f64,
    pub premium: f64,
}

/// `premium = mileage * vehicle * region`. Every lookup has a fallback, so
/// this cannot fail.
pub fn calculate(kilometers: u32, vehicle: VehicleType, registration_office: &str) -> PremiumBreakdown {
    let mileage_factor = mileage_factor(kilometers);
    let vehicle_factor = vehicle.factor().value();
    let region_factor = region_factor(registration_office).value();

    PremiumBreakdown {
        mileage_factor,
        vehicle_factor,
        region_factor,
        premium: mileage_factor * vehicle_factor * region_factor,
    }
}
