use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::clients::{CatalogClient, PurchaseClient, UserClient};
use crate::domain::{Purchase, PurchaseCreate};
use crate::error::{ProductError, PurchaseError, UserError};
use crate::messages::{PurchaseRequest, ServiceResponse};

/// Purchase ledger actor. Append-only: records are pushed in creation order
/// and never mutated or removed. Validates references and reserves stock
/// through the other stores' clients before appending.
pub struct PurchaseLedger {
    receiver: mpsc::Receiver<PurchaseRequest>,
    user_client: UserClient,
    catalog_client: CatalogClient,
    purchases: Vec<Purchase>,
}

impl PurchaseLedger {
    pub fn new(
        buffer_size: usize,
        user_client: UserClient,
        catalog_client: CatalogClient,
    ) -> (Self, PurchaseClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let ledger = Self {
            receiver,
            user_client,
            catalog_client,
            purchases: Vec::new(),
        };
        let client = PurchaseClient::new(sender);
        (ledger, client)
    }

    #[instrument(name = "purchase_ledger", skip(self))]
    pub async fn run(mut self) {
        info!("PurchaseLedger starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                PurchaseRequest::Record {
                    payload,
                    respond_to,
                } => {
                    self.handle_record(payload, respond_to).await;
                }
                PurchaseRequest::ByUser {
                    user_id,
                    respond_to,
                } => {
                    self.handle_by_user(user_id, respond_to);
                }
                PurchaseRequest::ByProduct {
                    product_id,
                    respond_to,
                } => {
                    self.handle_by_product(product_id, respond_to);
                }
                PurchaseRequest::Shutdown => {
                    info!("PurchaseLedger shutting down");
                    break;
                }
            }
        }

        info!("PurchaseLedger stopped");
    }

    /// Records a purchase: validate the user, validate the product, reserve
    /// stock, then append. The stock check-and-decrement is atomic inside the
    /// catalog actor; the reservation re-checks existence, so a product
    /// deleted between steps still fails cleanly.
    #[instrument(
        fields(
            user_id = %payload.user_id,
            product_id = %payload.product_id,
            quantity = %payload.quantity
        ),
        skip(self, payload, respond_to)
    )]
    async fn handle_record(
        &mut self,
        payload: PurchaseCreate,
        respond_to: ServiceResponse<Purchase, PurchaseError>,
    ) {
        info!("Processing record request");

        if payload.quantity == 0 {
            error!("Invalid quantity");
            let _ = respond_to.send(Err(PurchaseError::InvalidQuantity(payload.quantity)));
            return;
        }

        // Step 1: Validate user
        match self.user_client.get_profile(payload.user_id.clone()).await {
            Ok(user) => info!(user_name = %user.name, "User validation successful"),
            Err(UserError::NotFound) => {
                error!("User not found");
                let _ = respond_to.send(Err(PurchaseError::UserNotFound));
                return;
            }
            Err(e) => {
                error!(error = %e, "User validation failed");
                let _ = respond_to.send(Err(PurchaseError::ActorCommunicationError(e.to_string())));
                return;
            }
        }

        // Step 2: Validate product
        match self.catalog_client.get(payload.product_id.clone()).await {
            Ok(product) => info!(product_name = %product.name, "Product validation successful"),
            Err(ProductError::NotFound) => {
                error!("Product not found");
                let _ = respond_to.send(Err(PurchaseError::ProductNotFound));
                return;
            }
            Err(e) => {
                error!(error = %e, "Product validation failed");
                let _ = respond_to.send(Err(PurchaseError::ActorCommunicationError(e.to_string())));
                return;
            }
        }

        // Step 3: Reserve stock
        match self
            .catalog_client
            .reserve_stock(payload.product_id.clone(), payload.quantity)
            .await
        {
            Ok(()) => info!("Stock reserved"),
            Err(e @ ProductError::InsufficientStock { .. }) => {
                error!(error = %e, "Stock reservation failed");
                let _ = respond_to.send(Err(PurchaseError::InsufficientStock(e.to_string())));
                return;
            }
            Err(ProductError::NotFound) => {
                error!("Product disappeared before reservation");
                let _ = respond_to.send(Err(PurchaseError::ProductNotFound));
                return;
            }
            Err(e) => {
                error!(error = %e, "Stock reservation failed");
                let _ = respond_to.send(Err(PurchaseError::ActorCommunicationError(e.to_string())));
                return;
            }
        }

        // Step 4: Append the record
        let purchase = Purchase {
            id: Uuid::new_v4().to_string(),
            user_id: payload.user_id,
            product_id: payload.product_id,
            quantity: payload.quantity,
            created_at: chrono::Utc::now(),
        };
        self.purchases.push(purchase.clone());

        info!(purchase_id = %purchase.id, "Purchase recorded");
        let _ = respond_to.send(Ok(purchase));
    }

    #[instrument(fields(user_id = %user_id), skip(self, respond_to))]
    fn handle_by_user(
        &self,
        user_id: String,
        respond_to: ServiceResponse<Vec<Purchase>, PurchaseError>,
    ) {
        debug!("Processing by_user request");

        let purchases: Vec<Purchase> = self
            .purchases
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();

        info!(purchase_count = purchases.len(), "Listed user purchases");
        let _ = respond_to.send(Ok(purchases));
    }

    #[instrument(fields(product_id = %product_id), skip(self, respond_to))]
    fn handle_by_product(
        &self,
        product_id: String,
        respond_to: ServiceResponse<Vec<Purchase>, PurchaseError>,
    ) {
        debug!("Processing by_product request");

        let purchases: Vec<Purchase> = self
            .purchases
            .iter()
            .filter(|p| p.product_id == product_id)
            .cloned()
            .collect();

        info!(purchase_count = purchases.len(), "Listed product purchases");
        let _ = respond_to.send(Ok(purchases));
    }
}
