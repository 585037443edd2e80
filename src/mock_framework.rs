//! # Mock Framework
//!
//! Utilities for testing actors and clients in isolation.
//!
//! Instead of spinning up a full store actor, a "mock client" sends its
//! messages to a channel the test controls. The test inspects the messages
//! arriving on that channel, asserts they are correct, and answers through
//! the carried oneshot sender, simulating the store's behavior (success,
//! failure, ordering) deterministically.

use tokio::sync::{mpsc, oneshot};

use crate::clients::{CatalogClient, UserClient};
use crate::domain::{Product, User};
use crate::error::{ProductError, UserError};
use crate::messages::{ProductRequest, UserRequest};

pub fn mock_user_client(buffer_size: usize) -> (UserClient, mpsc::Receiver<UserRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (UserClient::new(sender), receiver)
}

pub fn mock_catalog_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<ProductRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Helper to verify that the next message is a GetProfile request.
pub async fn expect_get_profile(
    receiver: &mut mpsc::Receiver<UserRequest>,
) -> Option<(String, oneshot::Sender<Result<User, UserError>>)> {
    match receiver.recv().await {
        Some(UserRequest::GetProfile { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a product Get request.
pub async fn expect_product_get(
    receiver: &mut mpsc::Receiver<ProductRequest>,
) -> Option<(String, oneshot::Sender<Result<Product, ProductError>>)> {
    match receiver.recv().await {
        Some(ProductRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a ReserveStock request.
pub async fn expect_reserve_stock(
    receiver: &mut mpsc::Receiver<ProductRequest>,
) -> Option<(String, u32, oneshot::Sender<Result<(), ProductError>>)> {
    match receiver.recv().await {
        Some(ProductRequest::ReserveStock {
            id,
            quantity,
            respond_to,
        }) => Some((id, quantity, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = mock_user_client(10);

        // Drive a login through the mock and answer it by hand.
        let login_task = tokio::spawn(async move {
            client
                .login("test@example.com".to_string(), "pw".to_string())
                .await
        });

        let (email, responder) = match receiver.recv().await {
            Some(UserRequest::Login {
                email, respond_to, ..
            }) => (email, respond_to),
            other => panic!("Expected Login request, got {:?}", other),
        };
        assert_eq!(email, "test@example.com");
        responder.send(Ok("user_1".to_string())).unwrap();

        let result = login_task.await.unwrap();
        assert_eq!(result, Ok("user_1".to_string()));
    }
}
