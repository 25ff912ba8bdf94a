//! Serde DTOs for the remote API's JSON shapes. The wire side keeps the
//! flat `chassisSeries`/`chassisNumber` pair and the integer type code;
//! translation to the domain shapes happens at the boundary, here.

use crate::domain::chassis::ChassisId;
use crate::domain::vehicle::{Vehicle, VehicleInput, VehicleType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[serde(rename = "type")]
    pub type_code: i64,
    pub chassis_series: String,
    pub chassis_number: u32,
    pub color: String,
}

impl From<&VehicleInput> for CreateVehicleRequest {
    fn from(input: &VehicleInput) -> Self {
        Self {
            type_code: input.vehicle_type.wire_code(),
            chassis_series: input.chassis_id.series.clone(),
            chassis_number: input.chassis_id.number,
            color: input.color.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub chassis_series: String,
    pub chassis_number: u32,
    #[serde(rename = "type")]
    pub type_code: i64,
    pub color: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<VehicleRecord> for Vehicle {
    fn from(record: VehicleRecord) -> Self {
        Vehicle {
            chassis_id: ChassisId::new(record.chassis_series, record.chassis_number),
            vehicle_type: VehicleType::from_wire_code(record.type_code),
            color: record.color,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
