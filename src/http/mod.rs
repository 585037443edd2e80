//! HTTP façade. One route maps to one store-client call; handlers perform no
//! business logic beyond translating payloads and errors.

pub mod error;
pub mod products;
pub mod purchases;
pub mod users;

use axum::Router;

use crate::clients::{CatalogClient, PurchaseClient, UserClient};

/// Shared handler state: one client handle per store.
#[derive(Clone)]
pub struct AppState {
    pub user_client: UserClient,
    pub catalog_client: CatalogClient,
    pub purchase_client: PurchaseClient,
}

/// Build the full route table.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/user/", users::routes())
        .nest("/product", products::routes())
        .nest("/purchase", purchases::routes())
        .with_state(state)
}
