//! Configuration for the enterprise GraphQL server.
//!
//! Every setting has a default, so running without a configuration file is
//! a supported setup. See [`ConfigLoader`] for how the file is found.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod http;
mod loader;

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

pub use http::HttpConfig;
pub use loader::{ConfigError, ConfigFormat, ConfigLoader, LoadedConfig, CONFIG_NAME};

/// Value of `ENTERPRISE_WEB` when the configuration does not set it.
pub const DEFAULT_ENTERPRISE_WEB: &str = "/tmp";

/// All interfaces, port 8080.
pub const DEFAULT_LISTEN_ADDRESS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);

const DEFAULT_GRAPH_PATH: &str = "/graphql";
const DEFAULT_PLAYGROUND_PATH: &str = "/graphiql";

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
/// Configuration struct to define settings for the enterprise server.
///
/// Unknown top-level keys are ignored, sections reject keys they do not know.
pub struct Config {
    /// Web directory of the deployment. The key is case sensitive.
    #[serde(rename = "ENTERPRISE_WEB")]
    pub enterprise_web: PathBuf,
    /// Server bind settings
    pub network: NetworkConfig,
    /// Graph location and features, such as introspection
    pub graph: GraphConfig,
    /// Interactive query explorer
    pub playground: PlaygroundConfig,
    /// HTTP request handling
    pub http: HttpConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enterprise_web: PathBuf::from(DEFAULT_ENTERPRISE_WEB),
            network: Default::default(),
            graph: Default::default(),
            playground: Default::default(),
            http: Default::default(),
        }
    }
}

impl Config {
    /// A loader looking for `enterprise.toml` or `enterprise.json` in the working directory.
    pub fn loader() -> ConfigLoader {
        ConfigLoader::default()
    }

    /// The configured listen address, or [`DEFAULT_LISTEN_ADDRESS`].
    pub fn listen_address(&self) -> SocketAddr {
        self.network.listen_address.unwrap_or(DEFAULT_LISTEN_ADDRESS)
    }

    /// The path the query explorer sends its requests to.
    pub fn playground_endpoint(&self) -> &str {
        self.playground.endpoint.as_deref().unwrap_or_else(|| self.graph.path())
    }
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    pub listen_address: Option<SocketAddr>,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    pub path: Option<String>,
    pub introspection: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            path: None,
            introspection: true,
        }
    }
}

impl GraphConfig {
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_GRAPH_PATH)
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaygroundConfig {
    pub enabled: bool,
    pub path: String,
    /// Defaults to the graph path. Set it when the server sits behind a proxy
    /// that mounts the graph somewhere else, e.g. `/api/graphql`.
    pub endpoint: Option<String>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: DEFAULT_PLAYGROUND_PATH.to_string(),
            endpoint: None,
        }
    }
}
