use thiserror::Error;

#[derive(Error, Debug)]
pub enum VehicleError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid chassis ID: {input}")]
    InvalidChassisId { input: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidFieldError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Vehicle with chassis ID \"{chassis_id}\" not found")]
    NotFoundError { chassis_id: String },

    #[error("{message}")]
    ServerError { message: String },
}

pub type Result<T> = std::result::Result<T, VehicleError>;
