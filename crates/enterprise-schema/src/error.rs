use async_graphql::{Context, ErrorExtensions, ErrorExtensionValues};

/// Errors returned by the resolvers, reported as regular GraphQL error
/// entries with an `extensions.code` value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolverError {
    #[error("{operation} is not implemented")]
    NotImplemented { operation: &'static str },
}

impl ResolverError {
    pub fn not_implemented(operation: &'static str) -> Self {
        Self::NotImplemented { operation }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotImplemented { .. } => "NOT_IMPLEMENTED",
        }
    }

    /// Adds the error to the response at the path of the current field and
    /// resolves that field to `null`. The rest of `data` is kept.
    pub(crate) fn report<T>(self, ctx: &Context<'_>) -> Option<T> {
        let error = self.extend().into_server_error(ctx.item.pos);
        ctx.add_error(ctx.set_error_path(error));

        None
    }
}

impl ErrorExtensions for ResolverError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, extensions: &mut ErrorExtensionValues| {
            extensions.set("code", self.code());
        })
    }
}
