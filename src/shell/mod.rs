// Composition root of the restaurants service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory adapters and wire them into use case handlers.
// - Expose the REST routes, the GraphQL endpoint and the authentication guard.

pub mod auth;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
