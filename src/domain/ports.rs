use crate::domain::chassis::ChassisId;
use crate::domain::vehicle::{Vehicle, VehicleInput};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

/// The four operations the remote vehicle collection exposes.
///
/// Failure contracts differ per operation and are part of the interface:
/// `list_vehicles` degrades to an empty list on any failure, and
/// `find_by_chassis_id` folds every failure (including not-found) into
/// `None`. Only create and color update surface errors to the caller.
#[async_trait]
pub trait VehicleApi: Send + Sync {
    async fn add_vehicle(&self, input: &VehicleInput) -> Result<Vehicle>;
    async fn update_color(&self, chassis_id: &ChassisId, color: &str) -> Result<()>;
    async fn list_vehicles(&self) -> Vec<Vehicle>;
    async fn find_by_chassis_id(&self, chassis_id: &ChassisId) -> Option<Vehicle>;
}
