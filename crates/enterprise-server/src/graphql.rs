use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use enterprise_schema::EnterpriseSchema;

/// Executes a GraphQL request, sent either as a POST body or GET query string.
pub(crate) async fn execute(State(schema): State<EnterpriseSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}
