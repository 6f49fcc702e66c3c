use anyhow::Result;

use landing_core::AppConfig;

/// Print the effective configuration, CLI overrides included
pub fn run(config: &AppConfig) -> Result<()> {
    println!("# {}", AppConfig::config_path().display());
    print!("{}", config.to_toml()?);
    Ok(())
}
