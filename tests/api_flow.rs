use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use serde_json::{Value, json};
use tower::ServiceExt;

use storefront_api::{
    config::AppConfig,
    routes::build_app,
    state::AppState,
    token::{TokenCodec, UnsignedTokenCodec},
};

fn app() -> Router {
    build_app(AppState::new(&AppConfig::default()))
}

async fn send(request: Request<Body>) -> Response {
    app().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_authed(uri: &str) -> Request<Body> {
    Request::get(uri)
        .header(header::AUTHORIZATION, "Bearer some-token")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn admin_login_succeeds_and_issues_a_decodable_token() {
    let response = send(post_json(
        "/api/auth/login",
        json!({"email": "admin@example.com", "password": "AdminPass123!"}),
    ))
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["user"]["role"], "admin");
    assert_eq!(body["user"]["email"], "admin@example.com");
    assert!(body["user"].get("password").is_none());

    let claims = UnsignedTokenCodec
        .verify(body["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.user_id, "1");
}

#[tokio::test]
async fn login_with_wrong_password_is_401() {
    let response = send(post_json(
        "/api/auth/login",
        json!({"email": "admin@example.com", "password": "guess"}),
    ))
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn register_with_empty_password_is_400_with_a_message() {
    let response = send(post_json(
        "/api/auth/register",
        json!({"name": "Jane", "email": "jane@example.com", "password": ""}),
    ))
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn register_synthesizes_a_customer_and_token() {
    let response = send(post_json(
        "/api/auth/register",
        json!({"name": "Jane", "email": "jane@example.com", "password": "Secret1!"}),
    ))
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user"]["role"], "customer");
    assert!(body["user"]["id"].as_str().unwrap().starts_with("new-"));

    let claims = UnsignedTokenCodec
        .verify(body["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.email, "jane@example.com");
}

#[tokio::test]
async fn product_listing_defaults_to_price_desc_over_the_full_catalog() {
    let response = send(
        Request::get("/api/products")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["total"], 6);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 12);
    let prices: Vec<f64> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_f64().unwrap())
        .collect();
    assert_eq!(prices.len(), 6);
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn category_filter_and_price_asc_sort_compose() {
    let response = send(
        Request::get("/api/products?category=electronics&sort=price-asc")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let body = body_json(response).await;

    assert_eq!(body["total"], 2);
    let products = body["products"].as_array().unwrap();
    assert!(
        products
            .iter()
            .all(|p| p["category"] == "electronics")
    );
    let prices: Vec<f64> = products.iter().map(|p| p["price"].as_f64().unwrap()).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn search_matches_names_case_insensitively() {
    let response = send(
        Request::get("/api/products?search=WIRELESS")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn unknown_sort_preserves_catalog_order() {
    let response = send(
        Request::get("/api/products?sort=rating-desc")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let body = body_json(response).await;
    let ids: Vec<&str> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
}

#[tokio::test]
async fn pagination_reports_the_preslice_total() {
    let response = send(
        Request::get("/api/products?page=2&limit=4&sort=name-asc")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["total"], 6);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 4);
    assert_eq!(body["products"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn cart_lookup_resolves_known_ids_only() {
    let response = send(post_json(
        "/api/products/cart",
        json!({"productIds": ["1", "5", "404"]}),
    ))
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let names: Vec<&str> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Wireless Headphones", "Wireless Mouse"]);
}

#[tokio::test]
async fn orders_require_an_authorization_header() {
    let response = send(Request::get("/api/orders").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Unauthorized");

    let response = send(post_json(
        "/api/orders",
        json!({"items": [], "total": 0.0}),
    ))
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn checkout_fabricates_a_completed_order() {
    let request = Request::post("/api/orders")
        .header(header::CONTENT_TYPE, "application/json")
        // The gate checks presence only; this token never verifies.
        .header(header::AUTHORIZATION, "Bearer not-even-a-token")
        .body(Body::from(
            json!({
                "items": [
                    {"productId": "1", "quantity": 1, "priceAtPurchase": 199.99},
                    {"productId": "2", "quantity": 2, "priceAtPurchase": 29.99}
                ],
                "total": 259.97
            })
            .to_string(),
        ))
        .unwrap();
    let response = send(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let order = &body["order"];
    assert!(order["id"].as_str().unwrap().starts_with("ORD-"));
    assert_eq!(order["status"], "completed");
    assert_eq!(order["total"], 259.97);
    assert_eq!(order["items"][0]["productId"], "1");
    assert_eq!(order["items"][1]["priceAtPurchase"], 29.99);
}

#[tokio::test]
async fn order_history_returns_the_fabricated_order() {
    let response = send(get_authed("/api/orders")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let orders = body["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["id"], "ORD-123456");
    assert_eq!(orders[0]["items"][0]["productName"], "Wireless Headphones");
    assert_eq!(orders[0]["items"][1]["quantity"], 5);
}

#[tokio::test]
async fn invoice_download_carries_pdf_headers_and_the_order_id() {
    let response = send(get_authed("/api/orders/ORD-42/pdf")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"order-ORD-42.pdf\""
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("Order ID: ORD-42"));
    assert!(text.contains("Total: $349.94"));
}

#[tokio::test]
async fn invoice_requires_an_authorization_header() {
    let response = send(
        Request::get("/api/orders/ORD-42/pdf")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn reports_return_the_three_aggregate_tables() {
    let response = send(get_authed("/api/reports")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["dailyRevenue"].as_array().unwrap().len(), 3);
    assert_eq!(body["categoryWiseSales"].as_array().unwrap().len(), 4);
    assert_eq!(body["topCustomers"][0]["name"], "John Doe");
}

#[tokio::test]
async fn reports_without_a_header_are_401() {
    let response = send(Request::get("/api/reports").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_paths_fall_back_to_404_json() {
    let response = send(
        Request::get("/api/warehouse")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Not Found");
}
