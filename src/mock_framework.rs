//! # Mock Framework
//!
//! Utilities for testing callers of [`RegistryClient`] in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then the
//! `expect_*` helpers to assert on the requests that arrive and script the
//! service's replies deterministically — no running actor required.

use tokio::sync::mpsc;

use crate::clients::RegistryClient;
use crate::domain::{User, UserCreate};
use crate::error::UserError;
use crate::messages::{RegistryRequest, ServiceResponse};

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client(buffer_size: usize) -> (RegistryClient, mpsc::Receiver<RegistryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RegistryClient::new(sender), receiver)
}

/// Helper to verify that the next message is a ListUsers request
pub async fn expect_list(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<ServiceResponse<Vec<User>, UserError>> {
    match receiver.recv().await {
        Some(RegistryRequest::ListUsers { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a CreateUser request
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(UserCreate, ServiceResponse<User, UserError>)> {
    match receiver.recv().await {
        Some(RegistryRequest::CreateUser { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let create_task = tokio::spawn(async move {
            client
                .create_user(UserCreate::new("Test", "test@example.com"))
                .await
        });

        let (params, respond_to) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Test");
        respond_to
            .send(Ok(User {
                id: 1,
                name: params.name,
                email: params.email,
            }))
            .unwrap();

        let result = create_task.await.unwrap().unwrap();
        assert_eq!(result.id, 1);
    }
}
