use std::sync::Arc;

use crate::config::AppConfig;
use crate::repo::memory::{MemoryCatalog, MemoryDirectory, MemoryLedger, MemoryReports};
use crate::repo::{AccountRepository, CatalogRepository, OrderRepository, ReportRepository};
use crate::token::{HmacTokenCodec, TokenCodec, UnsignedTokenCodec};

/// Dependency-injected repositories and token scheme. Handlers never touch a
/// concrete backing store, so the in-memory mocks can be swapped for real
/// storage without changing call sites.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub reports: Arc<dyn ReportRepository>,
    pub tokens: Arc<dyn TokenCodec>,
    pub token_ttl_secs: i64,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let tokens: Arc<dyn TokenCodec> = match config.token_secret.as_deref() {
            Some(secret) => Arc::new(HmacTokenCodec::new(secret)),
            None => Arc::new(UnsignedTokenCodec),
        };
        Self {
            accounts: Arc::new(MemoryDirectory::seeded()),
            catalog: Arc::new(MemoryCatalog::seeded()),
            orders: Arc::new(MemoryLedger),
            reports: Arc::new(MemoryReports),
            tokens,
            token_ttl_secs: config.token_ttl_secs,
        }
    }
}
