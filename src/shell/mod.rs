// Composition root for the events bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory event store.
// - Wire it into the use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
