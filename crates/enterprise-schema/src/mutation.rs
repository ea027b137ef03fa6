use async_graphql::{Context, Object};

use crate::{ResolverError, User};

#[derive(Debug, Default)]
pub struct Mutation;

#[Object]
impl Mutation {
    /// Creates an account.
    async fn register(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        #[graphql(name = "password", secret)] _password: String,
    ) -> Option<User> {
        tracing::debug!(%name, %email, "register requested");

        ResolverError::not_implemented("register").report(ctx)
    }

    /// Authenticates an account and opens a session.
    async fn login(
        &self,
        ctx: &Context<'_>,
        name: String,
        #[graphql(name = "password", secret)] _password: String,
    ) -> Option<User> {
        tracing::debug!(%name, "login requested");

        ResolverError::not_implemented("login").report(ctx)
    }

    /// Terminates the current session.
    async fn logout(&self, ctx: &Context<'_>) -> Option<bool> {
        tracing::debug!("logout requested");

        ResolverError::not_implemented("logout").report(ctx)
    }
}
