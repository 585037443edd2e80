use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{ApiError, Result};
use super::users::authorized_user;
use super::AppState;
use crate::domain::{Purchase, PurchaseCreate};

pub fn routes() -> Router<AppState> {
    // All purchase routes are GETs, including the recording one; the route
    // table follows the upstream API contract.
    Router::new()
        .route("/getPurID", get(record_purchase))
        .route("/getUserPur", get(user_purchases))
        .route("/getProdPur", get(product_purchases))
}

#[derive(Debug, Deserialize)]
pub struct RecordPurchaseBody {
    #[serde(rename = "pur_uid")]
    pub user_id: String,
    #[serde(rename = "pur_pid")]
    pub product_id: String,
    #[serde(rename = "pur_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    #[serde(rename = "pur_id")]
    pub id: String,
    #[serde(rename = "pur_uid")]
    pub user_id: String,
    #[serde(rename = "pur_pid")]
    pub product_id: String,
    #[serde(rename = "pur_quantity")]
    pub quantity: u32,
    pub timestamp: DateTime<Utc>,
}

impl From<Purchase> for PurchaseResponse {
    fn from(purchase: Purchase) -> Self {
        Self {
            id: purchase.id,
            user_id: purchase.user_id,
            product_id: purchase.product_id,
            quantity: purchase.quantity,
            timestamp: purchase.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

async fn record_purchase(
    State(state): State<AppState>,
    Json(body): Json<RecordPurchaseBody>,
) -> Result<(StatusCode, Json<PurchaseResponse>)> {
    let purchase = state
        .purchase_client
        .record(PurchaseCreate {
            user_id: body.user_id,
            product_id: body.product_id,
            quantity: body.quantity,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(purchase.into())))
}

async fn user_purchases(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<PurchaseResponse>>> {
    let user = authorized_user(&state, &headers).await?;
    let purchases = state.purchase_client.by_user(user.id).await?;
    Ok(Json(purchases.into_iter().map(Into::into).collect()))
}

async fn product_purchases(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Vec<PurchaseResponse>>> {
    let product_id = query
        .id
        .ok_or_else(|| ApiError::BadRequest("missing product id".to_string()))?;
    let purchases = state.purchase_client.by_product(product_id).await?;
    Ok(Json(purchases.into_iter().map(Into::into).collect()))
}
