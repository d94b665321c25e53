use axum::{
    Json, Router,
    extract::{Path, State},
    http::header,
    routing::{get, post},
};

use crate::{
    dto::orders::{CreateOrderRequest, CreatedOrder, OrderHistory},
    middleware::auth::AuthUser,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/", post(create_order))
        .route("/{id}/pdf", get(order_invoice))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "Order history", body = OrderHistory),
        (status = 401, description = "Missing Authorization header"),
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>, _user: AuthUser) -> Json<OrderHistory> {
    Json(order_service::history(&state))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = CreatedOrder),
        (status = 401, description = "Missing Authorization header"),
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreateOrderRequest>,
) -> Json<CreatedOrder> {
    Json(order_service::create(&state, payload))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}/pdf",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Invoice download", content_type = "application/pdf"),
        (status = 401, description = "Missing Authorization header"),
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn order_invoice(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> impl axum::response::IntoResponse {
    let body = order_service::render_invoice(&state, &id);
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"order-{id}.pdf\""),
        ),
    ];
    (headers, body)
}
