use crate::error::PapermindError;

use client_core::config::{AppConfig, BASE_URL_ENV_VAR};

use std::path::Path;

pub fn show(config: &AppConfig, config_dir: &Path) {
    println!("config dir:  {}", config_dir.display());
    println!("base url:    {}", config.backend.base_url);

    let resolved = config.resolve_base_url();
    if resolved != config.backend.base_url {
        println!("effective:   {resolved} (from {BASE_URL_ENV_VAR})");
    }
}

pub fn set_url(config_dir: &Path, url: &str) -> Result<(), PapermindError> {
    let mut config = AppConfig::load(config_dir)?;
    config.backend.base_url = url.to_owned();
    config.save(config_dir)?;

    println!("Backend base URL set to {url}");
    Ok(())
}
