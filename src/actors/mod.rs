use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::clients::RegistryClient;
use crate::domain::{User, UserCreate};
use crate::error::UserError;
use crate::messages::{RegistryRequest, ServiceResponse};
use crate::registry::Registry;

/// Actor that owns the [`Registry`].
///
/// Every request passes through a single message loop, so creates are atomic
/// with respect to each other and lists always observe a consistent snapshot.
pub struct RegistryService {
    receiver: mpsc::Receiver<RegistryRequest>,
    registry: Registry,
}

impl RegistryService {
    pub fn new(buffer_size: usize) -> (Self, RegistryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            registry: Registry::new(),
        };
        let client = RegistryClient::new(sender);
        (service, client)
    }

    #[instrument(name = "registry_service", skip(self))]
    pub async fn run(mut self) {
        info!("RegistryService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RegistryRequest::ListUsers { respond_to } => {
                    self.handle_list_users(respond_to);
                }
                RegistryRequest::CreateUser { params, respond_to } => {
                    self.handle_create_user(params, respond_to);
                }
                RegistryRequest::Shutdown => {
                    info!("RegistryService shutting down");
                    break;
                }
                #[cfg(test)]
                RegistryRequest::GetUserCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.registry.len()));
                }
            }
        }
        info!("RegistryService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_users(&self, respond_to: ServiceResponse<Vec<User>, UserError>) {
        let users = self.registry.list();
        debug!(count = users.len(), "Listing users");
        let _ = respond_to.send(Ok(users));
    }

    #[instrument(fields(email = %params.email), skip(self, params, respond_to))]
    fn handle_create_user(&mut self, params: UserCreate, respond_to: ServiceResponse<User, UserError>) {
        info!("Processing create_user request");
        match self.registry.create(params) {
            Ok(user) => {
                info!(user_id = user.id, "User created successfully");
                let _ = respond_to.send(Ok(user));
            }
            Err(e) => {
                error!(error = %e, "User creation rejected");
                let _ = respond_to.send(Err(e));
            }
        }
    }
}
