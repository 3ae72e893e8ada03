//! HTTP surface: `POST /order` and `GET /health`.

use std::net::SocketAddr;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::app::scheduler::{spawn_execution, ScheduledExecution};
use crate::app::state::AppState;
use crate::domain::{OrderAmounts, OrderRequest, ValidationError};
use crate::error::{CreateOrderError, Error, Result};
use crate::exchange::{CreateOrderPayload, CreatedOrder};

/// Build the router. CORS is permissive so browser frontends on other origins
/// can post orders.
pub fn routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/order", post(create_order_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cors)
}

/// Bind `address` and serve until the listener fails.
pub async fn serve(address: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!(address = %listener.local_addr()?, "Order service listening");

    axum::serve(listener, routes(state)).await?;
    Ok(())
}

/// Why an order request was not scheduled.
#[derive(Debug)]
enum OrderRejection {
    Invalid(ValidationError),
    CreateFailed(Error),
    IncompleteResponse(Value),
}

impl From<ValidationError> for OrderRejection {
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err)
    }
}

impl From<Error> for OrderRejection {
    fn from(err: Error) -> Self {
        match err {
            Error::CreateOrder(CreateOrderError::Incomplete { response }) => {
                Self::IncompleteResponse(response)
            }
            other => Self::CreateFailed(other),
        }
    }
}

impl IntoResponse for OrderRejection {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Invalid(err) => {
                let label = match err {
                    ValidationError::InvalidSide { .. } => "'side' must be 'buy' or 'sell'",
                    _ => "Invalid params",
                };
                (
                    StatusCode::BAD_REQUEST,
                    json!({"error": label, "details": err.to_string()}),
                )
            }
            Self::CreateFailed(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "createOrder failed", "details": err.to_string()}),
            ),
            Self::IncompleteResponse(resp) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "Invalid createOrder response", "resp": resp}),
            ),
        };
        (status, Json(body)).into_response()
    }
}

async fn create_order_handler(State(state): State<AppState>, body: Bytes) -> Response {
    match create_and_schedule(&state, &body).await {
        Ok(scheduled) => (StatusCode::OK, Json(scheduled)).into_response(),
        Err(rejection) => {
            warn!(rejection = ?rejection, "Order request rejected");
            rejection.into_response()
        }
    }
}

async fn create_and_schedule(
    state: &AppState,
    body: &[u8],
) -> std::result::Result<Value, OrderRejection> {
    let body: Value = serde_json::from_slice(body).map_err(|e| ValidationError::MalformedJson {
        reason: e.to_string(),
    })?;
    let request = OrderRequest::from_json(&body)?;
    let amounts = OrderAmounts::from_request(&request)?;

    info!(
        venue = state.api().venue_name(),
        side = %request.side,
        amount = %request.amount,
        price = %request.price,
        expiry_minutes = request.expiry_minutes,
        after_minutes = request.after_minutes,
        "Order request received"
    );

    let payload = CreateOrderPayload::new(
        &amounts,
        state.maker(),
        state.compute_unit_price(),
        request.expires_at(Utc::now().timestamp()),
    );
    let response = state.api().create_order(&payload).await?;
    let order = CreatedOrder::from_response(&response).map_err(Error::from)?;

    let request_id = order.request_id.clone();
    let delay_seconds = request.delay_seconds();
    // The handle is dropped: the job runs detached and reports only to the log.
    drop(spawn_execution(
        state.execution().clone(),
        ScheduledExecution::new(order, request.delay()),
    ));

    Ok(json!({
        "status": "scheduled",
        "requestId": request_id,
        "execute_in_seconds": delay_seconds,
    }))
}

async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({"status": "ok", "maker": state.maker()}))
}
