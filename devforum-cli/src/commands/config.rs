use anyhow::{Result, bail};
use shared::config::ClientConfig;

/// Prints `config` in the requested format, ready to save as a config file.
///
/// # Errors
/// Returns an error if the format is unsupported or serialization fails.
pub fn generate_config(config: &ClientConfig, format: &str) -> Result<()> {
    let serialized = match format {
        "yaml" | "yml" => serde_yml::to_string(config)?,
        "json" => serde_json::to_string_pretty(config)?,
        other => bail!("unsupported format `{other}`; use 'yaml' or 'json'"),
    };
    println!("{}", serialized.trim_end());
    Ok(())
}
