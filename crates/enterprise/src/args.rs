use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use clap::Parser;

use crate::logging::{LogLevel, LogStyle};

#[derive(Debug, Parser)]
#[command(name = "enterprise", version)]
/// The Enterprise GraphQL server
pub(crate) struct Args {
    /// IP address on which the server will listen for incoming connections. Overrides the
    /// configuration file, defaults to 0.0.0.0:8080.
    #[arg(short, long, env = "ENTERPRISE_LISTEN_ADDRESS")]
    pub listen_address: Option<SocketAddr>,
    /// Path to the TOML or JSON configuration file. If not set, enterprise.toml or
    /// enterprise.json is looked up in the working directory.
    #[arg(long, short, env = "ENTERPRISE_CONFIG_PATH")]
    pub config: Option<PathBuf>,
    /// Set the logging level
    #[arg(long = "log", env = "ENTERPRISE_LOG", default_value = "info")]
    pub log_level: LogLevel,
    /// Set the style of log output
    #[arg(long, env = "ENTERPRISE_LOG_STYLE", default_value = "text")]
    pub log_style: LogStyle,
    /// Print the GraphQL schema definition and exit
    #[arg(long)]
    pub print_schema: bool,
}

impl Args {
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}

pub(crate) fn parse() -> Args {
    Args::parse()
}
