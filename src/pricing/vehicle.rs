use crate::pricing::Factor;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle categories with their pricing multiplier.
///
/// `Default` stands for any category outside the table and prices at the
/// baseline factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    Car,
    Truck,
    Motorcycle,
    Bicycle,
    Bus,
    Van,
    Suv,
    Tractor,
    Scooter,
    Atv,
    Boat,
    Airplane,
    Train,
    Helicopter,
    Submarine,
    Snowmobile,
    #[default]
    Default,
}

impl VehicleType {
    pub const KNOWN: [VehicleType; 16] = [
        VehicleType::Car,
        VehicleType::Truck,
        VehicleType::Motorcycle,
        VehicleType::Bicycle,
        VehicleType::Bus,
        VehicleType::Van,
        VehicleType::Suv,
        VehicleType::Tractor,
        VehicleType::Scooter,
        VehicleType::Atv,
        VehicleType::Boat,
        VehicleType::Airplane,
        VehicleType::Train,
        VehicleType::Helicopter,
        VehicleType::Submarine,
        VehicleType::Snowmobile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "CAR",
            VehicleType::Truck => "TRUCK",
            VehicleType::Motorcycle => "MOTORCYCLE",
            VehicleType::Bicycle => "BICYCLE",
            VehicleType::Bus => "BUS",
            VehicleType::Van => "VAN",
            VehicleType::Suv => "SUV",
            VehicleType::Tractor => "TRACTOR",
            VehicleType::Scooter => "SCOOTER",
            VehicleType::Atv => "ATV",
            VehicleType::Boat => "BOAT",
            VehicleType::Airplane => "AIRPLANE",
            VehicleType::Train => "TRAIN",
            VehicleType::Helicopter => "HELICOPTER",
            VehicleType::Submarine => "SUBMARINE",
            VehicleType::Snowmobile => "SNOWMOBILE",
            VehicleType::Default => "DEFAULT",
        }
    }

    pub fn factor(&self) -> Factor {
        match self {
            VehicleType::Car => Factor::Known(1.0),
            VehicleType::Truck => Factor::Known(1.2),
            VehicleType::Motorcycle => Factor::Known(1.3),
            VehicleType::Bicycle => Factor::Known(0.6),
            VehicleType::Bus => Factor::Known(1.5),
            VehicleType::Van => Factor::Known(1.1),
            VehicleType::Suv => Factor::Known(1.2),
            VehicleType::Tractor => Factor::Known(1.4),
            VehicleType::Scooter => Factor::Known(0.8),
            VehicleType::Atv => Factor::Known(1.3),
            VehicleType::Boat => Factor::Known(1.4),
            VehicleType::Airplane => Factor::Known(1.5),
            VehicleType::Train => Factor::Known(1.4),
            VehicleType::Helicopter => Factor::Known(1.5),
            VehicleType::Submarine => Factor::Known(1.5),
            VehicleType::Snowmobile => Factor::Known(1.2),
            VehicleType::Default => Factor::Default,
        }
    }

    /// Case-insensitive lookup. Anything outside the table maps to `Default`.
    pub fn from_name(name: &str) -> Self {
        Self::KNOWN
            .iter()
            .copied()
            .find(|vehicle| vehicle.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(VehicleType::Default)
    }
}

impl FromStr for VehicleType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Lenient: unknown text, null, numbers and anything else that is not a
// known name become `Default` instead of a 400.
impl<'de> Deserialize<'de> for VehicleType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(name) => Ok(VehicleType::from_name(&name)),
            _ => Ok(VehicleType::Default),
        }
    }
}
