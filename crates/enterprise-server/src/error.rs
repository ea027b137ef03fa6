/// The enterprise server error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured routes cannot be mounted
    #[error("invalid route configuration: {0}")]
    InvalidRoute(String),
    /// Cannot bind the listener or serve requests
    #[error("starting server: {0}")]
    Server(#[source] std::io::Error),
}
