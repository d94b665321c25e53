use crate::models::{Account, HistoryOrder, Order, OrderLine, Product, ReportTables};

pub mod memory;

/// Sort keys accepted by the catalog. Anything else preserves input order,
/// so parsing is infallible by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    PriceAsc,
    PriceDesc,
    NameAsc,
}

impl ProductSort {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "name-asc" => Some(Self::NameAsc),
            _ => None,
        }
    }
}

/// A normalized catalog listing request. `page` and `limit` are expected to
/// be clamped by the caller (see `routes::params`).
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<ProductSort>,
    pub page: i64,
    pub limit: i64,
}

#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub products: Vec<Product>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

/// Static lookup of known accounts by email + password.
pub trait AccountRepository: Send + Sync {
    /// Exact match on both fields; `None` means "invalid credentials".
    fn authenticate(&self, email: &str, password: &str) -> Option<Account>;
}

/// The product list and its query pipeline.
pub trait CatalogRepository: Send + Sync {
    fn list(&self, query: &CatalogQuery) -> CatalogPage;
    /// Resolve cart product ids; unknown ids are dropped, catalog order kept.
    fn by_ids(&self, ids: &[String]) -> Vec<Product>;
}

/// The order ledger. The in-memory implementation fabricates records on
/// every call; nothing survives across requests.
pub trait OrderRepository: Send + Sync {
    fn create(&self, items: Vec<OrderLine>, total: f64) -> Order;
    fn history(&self) -> Vec<HistoryOrder>;
}

pub trait ReportRepository: Send + Sync {
    fn tables(&self) -> ReportTables;
}
