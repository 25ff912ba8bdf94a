pub mod app;
pub mod client;
pub mod config;
pub mod domain;
pub mod utils;

pub use client::VehicleClient;
pub use config::{cli::Command, CliConfig};
pub use domain::chassis::ChassisId;
pub use domain::ports::{ConfigProvider, VehicleApi};
pub use domain::vehicle::{Vehicle, VehicleInput, VehicleType};
pub use utils::error::{Result, VehicleError};
