use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::error::{ApiError, Result};
use super::AppState;
use crate::domain::{Product, ProductCreate, ProductPatch};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/addProd", post(add_product))
        .route("/delete/{id}", post(delete_product))
        .route("/updateProd", post(update_product))
        .route("/getPID", get(get_product))
        .route("/allProd", get(all_products))
}

// Wire field names follow the upstream API contract.

#[derive(Debug, Deserialize)]
pub struct AddProductBody {
    #[serde(rename = "Product_name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    pub price: Decimal,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductBody {
    #[serde(rename = "P_id")]
    pub id: String,
    #[serde(rename = "Product_name")]
    pub name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    #[serde(rename = "P_id")]
    pub id: String,
    #[serde(rename = "Product_name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

async fn add_product(
    State(state): State<AppState>,
    Json(body): Json<AddProductBody>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let id = state
        .catalog_client
        .add(ProductCreate {
            name: body.name,
            description: body.description,
            price: body.price,
            quantity: body.quantity,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "P_id": id }))))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<&'static str>> {
    state.catalog_client.delete(id).await?;
    Ok(Json("product is deleted"))
}

async fn update_product(
    State(state): State<AppState>,
    Json(body): Json<UpdateProductBody>,
) -> Result<Json<ProductResponse>> {
    let patch = ProductPatch {
        name: body.name,
        description: body.description,
        price: body.price,
        quantity: body.quantity,
    };
    let product = state.catalog_client.update(body.id, patch).await?;
    Ok(Json(product.into()))
}

async fn get_product(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<ProductResponse>> {
    let id = query
        .id
        .ok_or_else(|| ApiError::BadRequest("missing product id".to_string()))?;
    let product = state.catalog_client.get(id).await?;
    Ok(Json(product.into()))
}

async fn all_products(State(state): State<AppState>) -> Result<Json<Vec<ProductResponse>>> {
    let products = state.catalog_client.get_all().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}
