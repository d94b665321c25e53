use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;
use crate::repo::CatalogPage;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

impl From<CatalogPage> for ProductPage {
    fn from(page: CatalogPage) -> Self {
        Self {
            products: page.products,
            total: page.total,
            page: page.page,
            limit: page.limit,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartLookupRequest {
    pub product_ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartProducts {
    pub products: Vec<Product>,
}
