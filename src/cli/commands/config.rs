//! Configuration management commands

use crate::cli::{ConfigCommands, Output};
use crate::config::CommitgateConfig;
use anyhow::{Context, Result};

const CONFIG_TEMPLATE: &str = include_str!("../../../templates/commitgate.toml");

/// Execute config commands
pub async fn execute(cmd: ConfigCommands, config_path: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Init => init(output).await,
        ConfigCommands::Validate => validate(config_path, output).await,
        ConfigCommands::Show { format } => show(config_path, &format, output).await,
    }
}

async fn init(output: &Output) -> Result<()> {
    let path = std::env::current_dir()?.join("commitgate.toml");

    if path.exists() {
        output.warning("commitgate.toml already exists, not overwriting");
        return Ok(());
    }

    std::fs::write(&path, CONFIG_TEMPLATE).context("Failed to write commitgate.toml")?;
    output.success(&format!("Wrote {}", path.display()));
    Ok(())
}

async fn validate(config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = CommitgateConfig::load(config_path)?;
    config.validate()?;
    output.success("Configuration is valid");
    Ok(())
}

async fn show(config_path: Option<&str>, format: &str, _output: &Output) -> Result<()> {
    let config = CommitgateConfig::load(config_path)?;

    let rendered = match format {
        "json" => serde_json::to_string_pretty(&config).context("Failed to render configuration")?,
        "toml" => toml::to_string_pretty(&config).context("Failed to render configuration")?,
        other => anyhow::bail!("Unknown format \"{other}\" (expected toml or json)"),
    };

    println!("{rendered}");
    Ok(())
}
