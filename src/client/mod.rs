pub mod wire;

use crate::domain::chassis::ChassisId;
use crate::domain::ports::{ConfigProvider, VehicleApi};
use crate::domain::vehicle::{Vehicle, VehicleInput};
use crate::utils::error::{Result, VehicleError};
use regex::Regex;
use reqwest::Client;
use self::wire::{CreateVehicleRequest, VehicleRecord};

const GENERIC_ADD_ERROR: &str = "Failed to add vehicle";
const GENERIC_COLOR_ERROR: &str = "Failed to update vehicle color";

/// HTTP client for the remote vehicle collection. One request per user
/// action, no retries; a failed request is reported once and retried only
/// by explicit user action.
pub struct VehicleClient {
    client: Client,
    base_url: String,
}

impl VehicleClient {
    pub fn new(base_url: impl Into<String>, timeout: std::time::Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &impl ConfigProvider) -> Result<Self> {
        Self::new(config.base_url(), config.request_timeout())
    }

    fn collection_url(&self) -> String {
        format!("{}/api/Vehicles", self.base_url)
    }

    fn vehicle_url(&self, chassis_id: &ChassisId) -> String {
        format!(
            "{}/api/Vehicles/{}/{}",
            self.base_url, chassis_id.series, chassis_id.number
        )
    }

    async fn fetch_all(&self) -> Result<Vec<Vehicle>> {
        let response = self.client.get(self.collection_url()).send().await?;
        tracing::debug!("List response status: {}", response.status());

        if !response.status().is_success() {
            return Err(VehicleError::ServerError {
                message: format!("Failed to fetch vehicles: {}", response.status()),
            });
        }

        let records: Vec<VehicleRecord> = response.json().await?;
        Ok(records.into_iter().map(Vehicle::from).collect())
    }
}

/// The server reports duplicate chassis IDs (and similar rule violations)
/// as a stack trace in the response body. Pull the human-readable part out
/// of it when present.
fn extract_server_message(body: &str, fallback: &str) -> String {
    let re = Regex::new(r"System\.InvalidOperationException: (.+?)\r?\n").unwrap();
    re.captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| fallback.to_string())
}

#[async_trait::async_trait]
impl VehicleApi for VehicleClient {
    async fn add_vehicle(&self, input: &VehicleInput) -> Result<Vehicle> {
        let payload = CreateVehicleRequest::from(input);
        tracing::debug!("Creating vehicle {}", input.chassis_id);

        let response = self
            .client
            .post(self.collection_url())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VehicleError::ServerError {
                message: extract_server_message(&body, GENERIC_ADD_ERROR),
            });
        }

        let record: VehicleRecord = response.json().await?;
        Ok(Vehicle::from(record))
    }

    async fn update_color(&self, chassis_id: &ChassisId, color: &str) -> Result<()> {
        let url = format!("{}/color", self.vehicle_url(chassis_id));
        tracing::debug!("Updating color of {} to {}", chassis_id, color);

        // The color sub-resource takes the new value as a bare JSON string.
        let response = self
            .client
            .put(url)
            .json(&color.trim())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(VehicleError::ServerError {
                message: GENERIC_COLOR_ERROR.to_string(),
            });
        }

        Ok(())
    }

    async fn list_vehicles(&self) -> Vec<Vehicle> {
        // A broken list fetch degrades to "no vehicles" instead of an error.
        match self.fetch_all().await {
            Ok(vehicles) => vehicles,
            Err(e) => {
                tracing::warn!("Error fetching vehicles: {}", e);
                Vec::new()
            }
        }
    }

    async fn find_by_chassis_id(&self, chassis_id: &ChassisId) -> Option<Vehicle> {
        let response = self
            .client
            .get(self.vehicle_url(chassis_id))
            .send()
            .await
            .ok()?;

        // Not-found and any other failure look the same to the caller.
        if !response.status().is_success() {
            return None;
        }

        let record: VehicleRecord = response.json().await.ok()?;
        Some(Vehicle::from(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_server_message_from_stack_trace() {
        let body = "System.InvalidOperationException: Vehicle with chassis ID TO-123456 already exists\r\n   at VehicleApi.Services.VehicleService.AddAsync()";
        assert_eq!(
            extract_server_message(body, GENERIC_ADD_ERROR),
            "Vehicle with chassis ID TO-123456 already exists"
        );
    }

    #[test]
    fn test_extract_server_message_fallback() {
        assert_eq!(extract_server_message("", GENERIC_ADD_ERROR), GENERIC_ADD_ERROR);
        assert_eq!(
            extract_server_message("{\"title\":\"Bad Request\"}", GENERIC_ADD_ERROR),
            GENERIC_ADD_ERROR
        );
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let client =
            VehicleClient::new("http://localhost:5000/", std::time::Duration::from_secs(5))
                .unwrap();
        assert_eq!(client.collection_url(), "http://localhost:5000/api/Vehicles");
    }
}
