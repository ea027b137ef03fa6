//! HTTP server exposing the enterprise GraphQL schema.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod access_log;
mod error;
mod graphql;
mod playground;
mod shutdown;

use std::net::SocketAddr;

use axum::{response, routing::get, Router};
use enterprise_config::Config;
use enterprise_schema::EnterpriseSchema;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer};

pub use axum_server::Handle;
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Start parameters for the server.
pub struct ServeConfig {
    /// The GraphQL endpoint listen address.
    pub listen_address: SocketAddr,
    /// The server configuration.
    pub config: Config,
}

/// Starts the server and serves requests until SIGINT or SIGTERM.
///
/// Returns `Ok(())` once the listener was closed after a signal, and an
/// error if the routes are invalid or the address cannot be bound.
pub async fn serve(config: ServeConfig, schema: EnterpriseSchema) -> crate::Result<()> {
    let handle = Handle::new();

    tokio::spawn(shutdown::on_signal(handle.clone(), config.config.http.shutdown_grace_period));

    bind(config, schema, handle).await
}

/// Serves requests until `handle` is shut down.
pub async fn bind(
    ServeConfig { listen_address, config }: ServeConfig,
    schema: EnterpriseSchema,
    handle: Handle,
) -> crate::Result<()> {
    let app = router(&config, schema)?.into_make_service();
    let path = config.graph.path();

    tracing::info!("GraphQL endpoint exposed at http://{listen_address}{path}");

    if config.playground.enabled {
        tracing::info!("GraphQL playground exposed at http://{listen_address}{}", config.playground.path);
    }

    axum_server::bind(listen_address)
        .handle(handle)
        .serve(app)
        .await
        .map_err(crate::Error::Server)?;

    tracing::info!("Server closed");

    Ok(())
}

/// The routes of the server: the GraphQL endpoint and, if enabled, the playground.
pub fn router(config: &Config, schema: EnterpriseSchema) -> crate::Result<Router> {
    let path = config.graph.path();
    validate_path("graph", path)?;

    let mut router = Router::new()
        .route(path, get(graphql::execute).post(graphql::execute))
        .with_state(schema);

    if config.playground.enabled {
        let playground_path = config.playground.path.as_str();
        validate_path("playground", playground_path)?;

        if playground_path == path {
            return Err(Error::InvalidRoute(format!("playground and graph share the path {path}")));
        }

        let page = playground::source(config.playground_endpoint());
        router = router.route(playground_path, get(|| async move { response::Html(page.clone()) }));
    }

    if let Some(timeout) = config.http.timeout {
        router = router.layer(TimeoutLayer::new(timeout));
    }

    let router = router
        .layer(RequestBodyLimitLayer::new(config.http.request_body_limit))
        .layer(axum::middleware::from_fn(access_log::log));

    Ok(router)
}

fn validate_path(name: &str, path: &str) -> crate::Result<()> {
    if !path.starts_with('/') {
        return Err(Error::InvalidRoute(format!("{name} path must start with a slash, got {path:?}")));
    }

    if path.contains(['{', '}', '*', ':']) {
        return Err(Error::InvalidRoute(format!("{name} path must be static, got {path:?}")));
    }

    Ok(())
}
