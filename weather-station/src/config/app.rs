use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use validator::{Validate, ValidationError};
use weather::{display::DisplayKind, Measurement};

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "STATION";

#[derive(Debug, Deserialize, Clone, Validate)]
#[validate(schema(function = "validate_detach_after"))]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub readings: Vec<Measurement>,
    pub detach_after: usize,
    pub detached_display: DisplayKind,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}

fn validate_detach_after(config: &AppConfig) -> Result<(), ValidationError> {
    if config.detach_after > config.readings.len() {
        return Err(ValidationError::new("detach_after_out_of_range"));
    }
    Ok(())
}
