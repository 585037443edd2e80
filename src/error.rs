use thiserror::Error;

/// Errors that can occur during identity store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("user not found")]
    NotFound,
    #[error("invalid password")]
    InvalidCredentials,
    #[error("email already registered: {0}")]
    AlreadyRegistered(String),
    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors that can occur during catalog store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found")]
    NotFound,
    #[error("Product database is empty")]
    ListEmpty,
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors that can occur while recording or querying purchases.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PurchaseError {
    #[error("user not found")]
    UserNotFound,
    #[error("Product not found")]
    ProductNotFound,
    #[error("insufficient stock: {0}")]
    InsufficientStock(String),
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}
