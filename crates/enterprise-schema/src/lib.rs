//! The GraphQL schema served by the enterprise server.
//!
//! The account fields (`register`, `login`, `logout` and `currentUser`) are
//! part of the public contract but have no backing implementation. They
//! resolve to a [`ResolverError::NotImplemented`] error entry.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod error;
mod mutation;
mod query;
mod user;

use async_graphql::EmptySubscription;

pub use error::ResolverError;
pub use mutation::Mutation;
pub use query::Query;
pub use user::User;

pub type EnterpriseSchema = async_graphql::Schema<Query, Mutation, EmptySubscription>;

#[derive(Debug, Clone, Copy)]
pub struct SchemaOptions {
    /// Serve `__schema` and `__type` queries.
    pub introspection: bool,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self { introspection: true }
    }
}

/// Builds the schema. It is immutable afterwards and cheap to clone.
pub fn build(options: SchemaOptions) -> EnterpriseSchema {
    let mut builder = async_graphql::Schema::build(Query, Mutation, EmptySubscription);

    if !options.introspection {
        builder = builder.disable_introspection();
    }

    builder.finish()
}

/// The schema definition language document of the schema.
pub fn sdl() -> String {
    build(SchemaOptions::default()).sdl()
}
