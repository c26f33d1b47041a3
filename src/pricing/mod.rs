pub mod calculator;
pub mod factor;
pub mod mileage;
pub mod region;
pub mod vehicle;

pub use calculator::{calculate, PremiumBreakdown};
pub use factor::Factor;
pub use mileage::mileage_factor;
pub use region::{region_factor, Bundesland};
pub use vehicle::VehicleType;
