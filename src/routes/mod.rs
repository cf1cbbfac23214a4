// # Routes Module
//
// HTTP route handlers, grouped by API area. Each module exposes a
// `create_routes` function that `server::build_router` merges.

/// Welcome and health check endpoints
pub mod health;

/// Blog post endpoints
pub mod posts;

/// Signup and login endpoints
pub mod user;
