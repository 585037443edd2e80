use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::clients::CatalogClient;
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::error::ProductError;
use crate::messages::{ProductRequest, ServiceResponse};

/// Catalog store actor. Owns the product map and the stock levels inside it;
/// `ReserveStock` is the single atomic check-and-decrement used by the
/// purchase ledger.
pub struct CatalogStore {
    receiver: mpsc::Receiver<ProductRequest>,
    products: HashMap<String, Product>,
}

impl CatalogStore {
    pub fn new(buffer_size: usize) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            products: HashMap::new(),
        };
        let client = CatalogClient::new(sender);
        (store, client)
    }

    #[instrument(name = "catalog_store", skip(self))]
    pub async fn run(mut self) {
        info!("CatalogStore starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ProductRequest::Add {
                    payload,
                    respond_to,
                } => {
                    self.handle_add(payload, respond_to);
                }
                ProductRequest::Get { id, respond_to } => {
                    self.handle_get(id, respond_to);
                }
                ProductRequest::GetAll { respond_to } => {
                    self.handle_get_all(respond_to);
                }
                ProductRequest::Update {
                    id,
                    patch,
                    respond_to,
                } => {
                    self.handle_update(id, patch, respond_to);
                }
                ProductRequest::Delete { id, respond_to } => {
                    self.handle_delete(id, respond_to);
                }
                ProductRequest::ReserveStock {
                    id,
                    quantity,
                    respond_to,
                } => {
                    self.handle_reserve_stock(id, quantity, respond_to);
                }
                ProductRequest::Shutdown => {
                    info!("CatalogStore shutting down");
                    break;
                }
            }
        }

        info!("CatalogStore stopped");
    }

    #[instrument(fields(product_name = %payload.name), skip(self, payload, respond_to))]
    fn handle_add(
        &mut self,
        payload: ProductCreate,
        respond_to: ServiceResponse<String, ProductError>,
    ) {
        debug!("Processing add request");

        let id = Uuid::new_v4().to_string();
        let product = Product {
            id: id.clone(),
            name: payload.name,
            description: payload.description,
            price: payload.price,
            quantity: payload.quantity,
        };
        self.products.insert(id.clone(), product);

        info!(product_id = %id, "Product added");
        let _ = respond_to.send(Ok(id));
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_get(&self, id: String, respond_to: ServiceResponse<Product, ProductError>) {
        debug!("Processing get request");

        let result = match self.products.get(&id) {
            Some(product) => {
                info!(product_name = %product.name, "Product found");
                Ok(product.clone())
            }
            None => {
                debug!("Product not found");
                Err(ProductError::NotFound)
            }
        };

        let _ = respond_to.send(result);
    }

    /// An empty catalog is reported as `ListEmpty` rather than an empty list,
    /// matching the source system's contract.
    #[instrument(skip(self, respond_to))]
    fn handle_get_all(&self, respond_to: ServiceResponse<Vec<Product>, ProductError>) {
        debug!("Processing get_all request");

        let products: Vec<Product> = self.products.values().cloned().collect();
        let result = if products.is_empty() {
            debug!("Catalog is empty");
            Err(ProductError::ListEmpty)
        } else {
            info!(product_count = products.len(), "Listed products");
            Ok(products)
        };

        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %id), skip(self, patch, respond_to))]
    fn handle_update(
        &mut self,
        id: String,
        patch: ProductPatch,
        respond_to: ServiceResponse<Product, ProductError>,
    ) {
        debug!("Processing update request");

        let result = match self.products.get_mut(&id) {
            Some(product) => {
                if let Some(name) = patch.name {
                    product.name = name;
                }
                if let Some(description) = patch.description {
                    product.description = description;
                }
                if let Some(price) = patch.price {
                    product.price = price;
                }
                if let Some(quantity) = patch.quantity {
                    product.quantity = quantity;
                }
                info!("Product updated");
                Ok(product.clone())
            }
            None => {
                error!("Product not found for update");
                Err(ProductError::NotFound)
            }
        };

        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_delete(&mut self, id: String, respond_to: ServiceResponse<(), ProductError>) {
        debug!("Processing delete request");

        let result = match self.products.remove(&id) {
            Some(_) => {
                info!("Product deleted");
                Ok(())
            }
            None => {
                error!("Product not found for delete");
                Err(ProductError::NotFound)
            }
        };

        let _ = respond_to.send(result);
    }

    /// Check-and-decrement in one message. Because the actor handles one
    /// message at a time, two concurrent reservations of the last unit
    /// serialize here and exactly one succeeds.
    #[instrument(fields(product_id = %id, quantity = %quantity), skip(self, respond_to))]
    fn handle_reserve_stock(
        &mut self,
        id: String,
        quantity: u32,
        respond_to: ServiceResponse<(), ProductError>,
    ) {
        debug!("Processing reserve_stock request");

        let result = match self.products.get_mut(&id) {
            Some(product) => {
                if product.quantity >= quantity {
                    product.quantity -= quantity;
                    info!(remaining_stock = product.quantity, "Stock reserved");
                    Ok(())
                } else {
                    error!(
                        available = product.quantity,
                        requested = quantity,
                        "Insufficient stock"
                    );
                    Err(ProductError::InsufficientStock {
                        requested: quantity,
                        available: product.quantity,
                    })
                }
            }
            None => {
                error!("Product not found");
                Err(ProductError::NotFound)
            }
        };

        let _ = respond_to.send(result);
    }
}
