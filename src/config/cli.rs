use crate::domain::vehicle::VehicleType;
use clap::Subcommand;

/// One subcommand per tab of the original interface.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add a new vehicle to the inventory.
    Add {
        /// Two-letter chassis series, e.g. TO.
        #[arg(long)]
        series: String,

        /// Chassis number, a positive integer with at most six digits.
        #[arg(long)]
        number: u32,

        /// Vehicle type: Car, Truck or Bus.
        #[arg(long = "type")]
        vehicle_type: VehicleType,

        #[arg(long)]
        color: String,
    },

    /// Find a vehicle by its chassis ID, e.g. TO123456 or TO-123456.
    Find { chassis_id: String },

    /// List all vehicles in the inventory.
    List,

    /// Change the color of an existing vehicle.
    SetColor { chassis_id: String, color: String },
}
