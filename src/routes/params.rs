use serde::Deserialize;
use utoipa::ToSchema;

use crate::repo::{CatalogQuery, ProductSort};

/// Raw query string for `GET /api/products`. `sort` stays a free-form string
/// because unknown keys mean "leave the input order alone", not 400.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
}

impl ProductListParams {
    /// Defaults: page 1, limit 12, sort `price-desc`.
    /// Policy for out-of-range values: page is clamped to >= 1 and limit to
    /// 1..=100 so a client can neither request negative offsets nor an
    /// unbounded page size.
    pub fn normalize(self) -> CatalogQuery {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(12).clamp(1, 100);
        let sort = match self.sort.as_deref() {
            None | Some("") => Some(ProductSort::PriceDesc),
            Some(raw) => ProductSort::parse(raw),
        };
        CatalogQuery {
            category: self.category,
            search: self.search,
            sort,
            page,
            limit,
        }
    }
}
