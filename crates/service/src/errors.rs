use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
}
