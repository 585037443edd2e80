use tokio::sync::oneshot;

use crate::domain::{Product, ProductCreate, ProductPatch, Purchase, PurchaseCreate, User, UserCreate};
use crate::error::{ProductError, PurchaseError, UserError};

/// Generic type aliases for store communication.
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed message enums for store actors. Each variant carries its parameters
/// and a oneshot channel for the response.

#[derive(Debug)]
pub enum UserRequest {
    Register {
        payload: UserCreate,
        respond_to: ServiceResponse<String, UserError>,
    },
    Login {
        email: String,
        pass: String,
        respond_to: ServiceResponse<String, UserError>,
    },
    GetProfile {
        id: String,
        respond_to: ServiceResponse<User, UserError>,
    },
    Shutdown,
    #[cfg(test)]
    Count {
        respond_to: ServiceResponse<usize, UserError>,
    },
}

#[derive(Debug)]
pub enum ProductRequest {
    Add {
        payload: ProductCreate,
        respond_to: ServiceResponse<String, ProductError>,
    },
    Get {
        id: String,
        respond_to: ServiceResponse<Product, ProductError>,
    },
    GetAll {
        respond_to: ServiceResponse<Vec<Product>, ProductError>,
    },
    Update {
        id: String,
        patch: ProductPatch,
        respond_to: ServiceResponse<Product, ProductError>,
    },
    Delete {
        id: String,
        respond_to: ServiceResponse<(), ProductError>,
    },
    ReserveStock {
        id: String,
        quantity: u32,
        respond_to: ServiceResponse<(), ProductError>,
    },
    Shutdown,
}

#[derive(Debug)]
pub enum PurchaseRequest {
    Record {
        payload: PurchaseCreate,
        respond_to: ServiceResponse<Purchase, PurchaseError>,
    },
    ByUser {
        user_id: String,
        respond_to: ServiceResponse<Vec<Purchase>, PurchaseError>,
    },
    ByProduct {
        product_id: String,
        respond_to: ServiceResponse<Vec<Purchase>, PurchaseError>,
    },
    Shutdown,
}
