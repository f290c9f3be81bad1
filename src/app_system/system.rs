use tracing::{error, info};

use crate::actors::RegistryService;
use crate::clients::RegistryClient;

const CHANNEL_BUFFER_SIZE: usize = 32;

/// The main application system owning the registry service task.
///
/// Responsible for starting the actor, handing out client handles, and
/// orderly shutdown.
pub struct RegistrySystem {
    pub registry_client: RegistryClient,
    handle: tokio::task::JoinHandle<()>,
}

impl RegistrySystem {
    pub fn new() -> Self {
        let (service, registry_client) = RegistryService::new(CHANNEL_BUFFER_SIZE);
        let handle = tokio::spawn(service.run());
        Self {
            registry_client,
            handle,
        }
    }

    /// Stops the registry service and waits for its task to finish.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        if self.registry_client.shutdown().await.is_err() {
            // Channel already closed; the join below still reaps the task.
            error!("Registry service channel already closed");
        }
        drop(self.registry_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
