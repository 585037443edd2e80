use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{Purchase, PurchaseCreate};
use crate::error::PurchaseError;
use crate::messages::PurchaseRequest;

/// Client for the purchase ledger actor.
#[derive(Clone)]
pub struct PurchaseClient {
    sender: mpsc::Sender<PurchaseRequest>,
}

impl PurchaseClient {
    pub fn new(sender: mpsc::Sender<PurchaseRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), PurchaseError> {
        debug!("Sending shutdown request");
        self.sender
            .send(PurchaseRequest::Shutdown)
            .await
            .map_err(|_| PurchaseError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(PurchaseClient => fn record(payload: PurchaseCreate) -> Purchase as PurchaseRequest::Record, Error = PurchaseError);
client_method!(PurchaseClient => fn by_user(user_id: String) -> Vec<Purchase> as PurchaseRequest::ByUser, Error = PurchaseError);
client_method!(PurchaseClient => fn by_product(product_id: String) -> Vec<Purchase> as PurchaseRequest::ByProduct, Error = PurchaseError);
