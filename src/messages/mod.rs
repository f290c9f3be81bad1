use tokio::sync::oneshot;

use crate::domain::{User, UserCreate};
use crate::error::UserError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the registry service. Each request variant carries a
/// oneshot channel for the response.
#[derive(Debug)]
pub enum RegistryRequest {
    ListUsers {
        respond_to: ServiceResponse<Vec<User>, UserError>,
    },
    CreateUser {
        params: UserCreate,
        respond_to: ServiceResponse<User, UserError>,
    },
    Shutdown,
    #[cfg(test)]
    GetUserCount {
        respond_to: ServiceResponse<usize, UserError>,
    },
}
