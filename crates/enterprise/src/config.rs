use enterprise_config::{Config, LoadedConfig};

use crate::args::Args;

/// Loads the configuration file, falling back to defaults when there is none.
pub(crate) fn load(args: &Args) -> anyhow::Result<Config> {
    match Config::loader().load(args.config_path()) {
        Ok(Some(LoadedConfig { path, config })) => {
            tracing::info!(path = %path.display(), "Configuration file loaded");
            Ok(config)
        }
        Ok(None) => {
            tracing::info!("No configuration loaded");
            Ok(Config::default())
        }
        Err(error) => {
            tracing::error!("Problem reading the configuration file: {error}");
            Err(anyhow::anyhow!(error))
        }
    }
}
