use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};

use crate::{
    dto::products::{CartLookupRequest, CartProducts, ProductPage},
    routes::params::ProductListParams,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/cart", post(cart_lookup))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 12"),
        ("category" = Option<String>, Query, description = "Exact category filter"),
        ("sort" = Option<String>, Query, description = "price-asc, price-desc or name-asc"),
        ("search" = Option<String>, Query, description = "Case-insensitive name substring"),
    ),
    responses(
        (status = 200, description = "Filtered, sorted, paginated products", body = ProductPage)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> Json<ProductPage> {
    let page = state.catalog.list(&params.normalize());
    Json(ProductPage::from(page))
}

#[utoipa::path(
    post,
    path = "/api/products/cart",
    request_body = CartLookupRequest,
    responses(
        (status = 200, description = "Products matching the cart ids", body = CartProducts)
    ),
    tag = "Products"
)]
pub async fn cart_lookup(
    State(state): State<AppState>,
    Json(payload): Json<CartLookupRequest>,
) -> Json<CartProducts> {
    let products = state.catalog.by_ids(&payload.product_ids);
    Json(CartProducts { products })
}
