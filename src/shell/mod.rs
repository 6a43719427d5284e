// Composition root for the games bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory game store.
// - Wire the store into use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
