use crate::domain::chassis::ChassisId;
use crate::utils::error::VehicleError;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Closed set of vehicle types. The remote API speaks in integer codes,
/// everything user-facing speaks in labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Bus,
    Truck,
    Car,
}

impl VehicleType {
    /// Fixed passenger capacity per type. Never stored independently and
    /// never overridden.
    pub fn passenger_capacity(self) -> u32 {
        match self {
            VehicleType::Car => 4,
            VehicleType::Truck => 1,
            VehicleType::Bus => 42,
        }
    }

    /// Integer code used by the remote API.
    pub fn wire_code(self) -> i64 {
        match self {
            VehicleType::Bus => 0,
            VehicleType::Truck => 1,
            VehicleType::Car => 2,
        }
    }

    /// Unrecognized codes map to `Car` rather than failing. Inbound records
    /// must never be rejected over their type field.
    pub fn from_wire_code(code: i64) -> Self {
        match code {
            0 => VehicleType::Bus,
            1 => VehicleType::Truck,
            2 => VehicleType::Car,
            _ => VehicleType::Car,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleType::Bus => "Bus",
            VehicleType::Truck => "Truck",
            VehicleType::Car => "Car",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for VehicleType {
    type Err = VehicleError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "bus" => Ok(VehicleType::Bus),
            "truck" => Ok(VehicleType::Truck),
            "car" => Ok(VehicleType::Car),
            _ => Err(VehicleError::InvalidFieldError {
                field: "type".to_string(),
                value: input.to_string(),
                reason: "Expected one of: Car, Truck, Bus".to_string(),
            }),
        }
    }
}

/// A vehicle as held for display. The chassis ID is the identity and is
/// immutable; the only supported mutation is replacing the color through
/// the API. Passenger count is derived from the type, so it cannot drift
/// out of sync with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub chassis_id: ChassisId,
    pub vehicle_type: VehicleType,
    pub color: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Vehicle {
    pub fn number_of_passengers(&self) -> u32 {
        self.vehicle_type.passenger_capacity()
    }
}

/// User-supplied fields for a create request. The server assigns the
/// timestamps and echoes the full record back.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleInput {
    pub chassis_id: ChassisId,
    pub vehicle_type: VehicleType,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passenger_capacity() {
        assert_eq!(VehicleType::Car.passenger_capacity(), 4);
        assert_eq!(VehicleType::Truck.passenger_capacity(), 1);
        assert_eq!(VehicleType::Bus.passenger_capacity(), 42);
        // Stable across calls.
        assert_eq!(VehicleType::Bus.passenger_capacity(), 42);
    }

    #[test]
    fn test_wire_code_round_trip() {
        for vehicle_type in [VehicleType::Bus, VehicleType::Truck, VehicleType::Car] {
            assert_eq!(
                VehicleType::from_wire_code(vehicle_type.wire_code()),
                vehicle_type
            );
        }
        assert_eq!(VehicleType::Bus.wire_code(), 0);
        assert_eq!(VehicleType::Truck.wire_code(), 1);
        assert_eq!(VehicleType::Car.wire_code(), 2);
    }

    #[test]
    fn test_unknown_wire_code_defaults_to_car() {
        assert_eq!(VehicleType::from_wire_code(9), VehicleType::Car);
        assert_eq!(VehicleType::from_wire_code(-1), VehicleType::Car);
    }

    #[test]
    fn test_type_labels() {
        assert_eq!(VehicleType::Bus.to_string(), "Bus");
        assert_eq!("truck".parse::<VehicleType>().unwrap(), VehicleType::Truck);
        assert_eq!("Car".parse::<VehicleType>().unwrap(), VehicleType::Car);
        assert!("van".parse::<VehicleType>().is_err());
    }

    #[test]
    fn test_passengers_derived_from_type() {
        let vehicle = Vehicle {
            chassis_id: ChassisId::new("TO", 123456),
            vehicle_type: VehicleType::Bus,
            color: "Red".to_string(),
            created_at: None,
            updated_at: None,
        };
        assert_eq!(
            vehicle.number_of_passengers(),
            vehicle.vehicle_type.passenger_capacity()
        );
    }
}
