use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{HistoryOrder, Order, OrderLine};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderLine>,
    /// Client-computed total; echoed, not checked against the lines.
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedOrder {
    pub order: Order,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderHistory {
    pub orders: Vec<HistoryOrder>,
}
