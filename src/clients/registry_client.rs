use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::{User, UserCreate};
use crate::error::UserError;
use crate::messages::RegistryRequest;

/// Generates a client method that sends a request variant and awaits the
/// response over the oneshot channel carried in the message.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Client for interacting with the registry service actor.
#[derive(Clone)]
pub struct RegistryClient {
    sender: mpsc::Sender<RegistryRequest>,
}

impl RegistryClient {
    pub fn new(sender: mpsc::Sender<RegistryRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop. Requests still queued behind the shutdown
    /// message are dropped unanswered.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), UserError> {
        debug!("Sending shutdown request");
        self.sender
            .send(RegistryRequest::Shutdown)
            .await
            .map_err(|_| UserError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(RegistryClient => fn list_users() -> Vec<User> as RegistryRequest::ListUsers, Error = UserError);
client_method!(RegistryClient => fn create_user(params: UserCreate) -> User as RegistryRequest::CreateUser, Error = UserError);

#[cfg(test)]
client_method!(RegistryClient => fn get_user_count() -> usize as RegistryRequest::GetUserCount, Error = UserError);
