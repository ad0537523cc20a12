//! Config file operations.

use std::path::Path;

use sf_project::RunConfig;

use crate::error::{AppError, AppResult};

/// Load and validate a config; the format follows the file extension.
pub fn load_config(path: &Path) -> AppResult<RunConfig> {
    Ok(sf_project::load_config(path)?)
}

pub fn save_config(path: &Path, config: &RunConfig) -> AppResult<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => sf_project::save_json(path, config)?,
        Some("yaml") | Some("yml") => sf_project::save_yaml(path, config)?,
        _ => {
            return Err(AppError::InvalidInput(format!(
                "config path must end in .yaml, .yml or .json: {}",
                path.display()
            )));
        }
    }
    Ok(())
}

pub fn validate_config(config: &RunConfig) -> AppResult<()> {
    Ok(sf_project::validate_config(config)?)
}

/// Write the reference scenario to `path`.
pub fn write_template(path: &Path) -> AppResult<RunConfig> {
    let config = RunConfig::reference();
    save_config(path, &config)?;
    Ok(config)
}
