//! CLI commands.

pub mod config;
pub mod extract;
pub mod process;

use std::path::Path;

use dirx_core::DirxConfig;

/// Load the configuration: an explicit `--config` file, else the default file when present, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<DirxConfig> {
    let config = match config_path {
        Some(path) => DirxConfig::from_file(Path::new(path))?,
        None => {
            let default_path = config::default_config_path();
            if default_path.exists() {
                DirxConfig::from_file(&default_path)?
            } else {
                DirxConfig::default()
            }
        }
    };

    config.validate()?;
    Ok(config)
}
