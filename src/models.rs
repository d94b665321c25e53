use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

/// A known account in the static credential directory. The password is kept
/// as-is (no hashing) because the directory does a plaintext comparison; it
/// is never serialized back to clients.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// The caller-visible projection of an account: everything but the password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&Account> for PublicUser {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub rating: f64,
}

/// A line as submitted at checkout: the client reports the price it saw.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: u32,
    pub price_at_purchase: f64,
}

/// An order as fabricated by the ledger at checkout. The total is echoed
/// from the request and is not checked against the lines.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub total: f64,
    pub items: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

/// A line in the order history, carrying the resolved product name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryLine {
    pub id: String,
    pub product_name: String,
    pub quantity: u32,
    pub price_at_purchase: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryOrder {
    pub id: String,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub items: Vec<HistoryLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DailyRevenue {
    pub date: String,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategorySales {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerTotal {
    pub name: String,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportTables {
    pub daily_revenue: Vec<DailyRevenue>,
    pub category_wise_sales: Vec<CategorySales>,
    pub top_customers: Vec<CustomerTotal>,
}
