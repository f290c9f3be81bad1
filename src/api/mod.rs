//! HTTP transport adapter: routes, wire DTOs, and the mapping from registry
//! outcomes to status codes.

pub mod dtos;
pub mod error;
pub mod handlers;

use axum::routing::get;
use axum::Router;

use crate::clients::RegistryClient;

/// Builds the service router: `GET /users` and `POST /users`.
pub fn router(client: RegistryClient) -> Router {
    Router::new()
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .with_state(client)
}
