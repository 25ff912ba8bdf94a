use clap::Parser;
use vehicle_inventory::utils::{logger, validation::Validate};
use vehicle_inventory::{app, CliConfig, VehicleClient, VehicleError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    let client = match VehicleClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = app::run(&config.command, &client).await {
        tracing::error!("Command failed: {}", e);
        eprintln!("Error: {}", e);

        // Exit 2 for bad input, 1 for a failed request.
        let exit_code = match e {
            VehicleError::InvalidChassisId { .. }
            | VehicleError::InvalidFieldError { .. } => 2,
            _ => 1,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}
