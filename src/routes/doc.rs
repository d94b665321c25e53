use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{AuthResponse, LoginRequest, RegisterRequest},
        orders::{CreateOrderRequest, CreatedOrder, OrderHistory},
        products::{CartLookupRequest, CartProducts, ProductPage},
    },
    models::{
        CategorySales, CustomerTotal, DailyRevenue, HistoryLine, HistoryOrder, Order, OrderLine,
        Product, PublicUser, ReportTables, Role,
    },
    routes::{auth, health, orders, params, products, reports},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::register,
        products::list_products,
        products::cart_lookup,
        orders::list_orders,
        orders::create_order,
        orders::order_invoice,
        reports::get_reports,
    ),
    components(
        schemas(
            Role,
            PublicUser,
            Product,
            Order,
            OrderLine,
            HistoryOrder,
            HistoryLine,
            DailyRevenue,
            CategorySales,
            CustomerTotal,
            ReportTables,
            LoginRequest,
            RegisterRequest,
            AuthResponse,
            ProductPage,
            CartLookupRequest,
            CartProducts,
            CreateOrderRequest,
            CreatedOrder,
            OrderHistory,
            params::ProductListParams,
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Reports", description = "Reporting endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
