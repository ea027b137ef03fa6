use async_graphql::{Context, Object};

use crate::{ResolverError, User};

#[derive(Debug, Default)]
pub struct Query;

#[Object]
impl Query {
    /// Always `"world"`.
    async fn hello(&self) -> &'static str {
        "world"
    }

    /// The user bound to the session of the request.
    async fn current_user(&self, ctx: &Context<'_>) -> Option<User> {
        tracing::debug!("currentUser requested");

        ResolverError::not_implemented("currentUser").report(ctx)
    }
}
