use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::error::ProductError;
use crate::messages::ProductRequest;

/// Client for the catalog store actor.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<ProductRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<ProductRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), ProductError> {
        debug!("Sending shutdown request");
        self.sender
            .send(ProductRequest::Shutdown)
            .await
            .map_err(|_| ProductError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(CatalogClient => fn add(payload: ProductCreate) -> String as ProductRequest::Add, Error = ProductError);
client_method!(CatalogClient => fn get(id: String) -> Product as ProductRequest::Get, Error = ProductError);
client_method!(CatalogClient => fn get_all() -> Vec<Product> as ProductRequest::GetAll, Error = ProductError);
client_method!(CatalogClient => fn update(id: String, patch: ProductPatch) -> Product as ProductRequest::Update, Error = ProductError);
client_method!(CatalogClient => fn delete(id: String) -> () as ProductRequest::Delete, Error = ProductError);
client_method!(CatalogClient => fn reserve_stock(id: String, quantity: u32) -> () as ProductRequest::ReserveStock, Error = ProductError);
