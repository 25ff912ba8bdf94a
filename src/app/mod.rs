//! Command handlers. Each handler replicates the validation its form did
//! in the original interface before any network call, then issues exactly
//! one request through the `VehicleApi` port.

use crate::config::cli::Command;
use crate::domain::chassis::ChassisId;
use crate::domain::ports::VehicleApi;
use crate::domain::vehicle::{Vehicle, VehicleInput, VehicleType};
use crate::utils::error::{Result, VehicleError};
use crate::utils::validation::{validate_non_empty_string, validate_range};

pub async fn run(command: &Command, api: &impl VehicleApi) -> Result<()> {
    match command {
        Command::Add {
            series,
            number,
            vehicle_type,
            color,
        } => add_vehicle(api, series, *number, *vehicle_type, color).await,
        Command::Find { chassis_id } => find_vehicle(api, chassis_id).await,
        Command::List => list_vehicles(api).await,
        Command::SetColor { chassis_id, color } => set_color(api, chassis_id, color).await,
    }
}

/// Entry-side normalization, as the form fields did it: drop everything
/// that is not a letter and upper-case the rest. The result must be
/// exactly two letters.
fn normalize_series(raw: &str) -> Result<String> {
    let series: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if series.len() != 2 {
        return Err(VehicleError::InvalidFieldError {
            field: "series".to_string(),
            value: raw.to_string(),
            reason: "Chassis series must be exactly two letters".to_string(),
        });
    }
    Ok(series)
}

/// Combined chassis ID fields are upper-cased at entry; the codec itself
/// matches strictly.
fn parse_chassis_id(raw: &str) -> Result<ChassisId> {
    raw.trim().to_ascii_uppercase().parse()
}

pub async fn add_vehicle(
    api: &impl VehicleApi,
    series: &str,
    number: u32,
    vehicle_type: VehicleType,
    color: &str,
) -> Result<()> {
    let series = normalize_series(series)?;
    validate_range("number", number, 1, 999999)?;
    validate_non_empty_string("color", color)?;

    let input = VehicleInput {
        chassis_id: ChassisId::new(series, number),
        vehicle_type,
        color: color.to_string(),
    };

    let vehicle = api.add_vehicle(&input).await?;
    tracing::info!("Vehicle {} added", vehicle.chassis_id);
    println!("Vehicle added successfully!");
    print_vehicle(&vehicle);
    Ok(())
}

pub async fn find_vehicle(api: &impl VehicleApi, chassis_id: &str) -> Result<()> {
    let chassis_id = parse_chassis_id(chassis_id)?;

    match api.find_by_chassis_id(&chassis_id).await {
        Some(vehicle) => {
            print_vehicle(&vehicle);
            Ok(())
        }
        None => Err(VehicleError::NotFoundError {
            chassis_id: chassis_id.to_string(),
        }),
    }
}

pub async fn list_vehicles(api: &impl VehicleApi) -> Result<()> {
    let vehicles = api.list_vehicles().await;

    if vehicles.is_empty() {
        println!("No vehicles in the inventory.");
        return Ok(());
    }

    println!("{} vehicle(s):", vehicles.len());
    for vehicle in &vehicles {
        print_vehicle(vehicle);
    }
    Ok(())
}

pub async fn set_color(api: &impl VehicleApi, chassis_id: &str, color: &str) -> Result<()> {
    let chassis_id = parse_chassis_id(chassis_id)?;
    validate_non_empty_string("color", color)?;

    api.update_color(&chassis_id, color).await?;
    tracing::info!("Color of {} updated", chassis_id);
    println!("Color of {} updated to {}", chassis_id, color.trim());
    Ok(())
}

fn print_vehicle(vehicle: &Vehicle) {
    println!(
        "  {}  {}  {} passenger(s)  {}",
        vehicle.chassis_id,
        vehicle.vehicle_type,
        vehicle.number_of_passengers(),
        vehicle.color
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_series() {
        assert_eq!(normalize_series("to").unwrap(), "TO");
        assert_eq!(normalize_series(" A b ").unwrap(), "AB");
        assert!(normalize_series("A").is_err());
        assert!(normalize_series("ABC").is_err());
        assert!(normalize_series("12").is_err());
    }

    #[test]
    fn test_parse_chassis_id_uppercases_at_entry() {
        assert_eq!(
            parse_chassis_id(" to-123456 ").unwrap(),
            ChassisId::new("TO", 123456)
        );
        assert!(parse_chassis_id("TO-12").is_err());
    }
}
