use async_graphql::http::GraphiQLSource;

/// The GraphiQL page, sending its queries to `endpoint`.
pub(crate) fn source(endpoint: &str) -> String {
    GraphiQLSource::build().endpoint(endpoint).finish()
}
