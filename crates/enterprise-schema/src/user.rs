use async_graphql::{SimpleObject, ID};

/// An account holder. Only its identity is part of the schema for now.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct User {
    pub id: ID,
}
