use chrono::Utc;

use crate::dto::orders::{CreateOrderRequest, CreatedOrder, OrderHistory};
use crate::state::AppState;

pub fn create(state: &AppState, payload: CreateOrderRequest) -> CreatedOrder {
    let order = state.orders.create(payload.items, payload.total);
    tracing::info!(order_id = %order.id, total = order.total, "order placed");
    CreatedOrder { order }
}

pub fn history(state: &AppState) -> OrderHistory {
    OrderHistory {
        orders: state.orders.history(),
    }
}

/// Renders the plain-text invoice body for an order id. This is not a real
/// PDF; the route serves it with a PDF content type so browsers download it.
/// Swapping in an actual PDF generator only needs to change this function.
pub fn render_invoice(state: &AppState, order_id: &str) -> String {
    let mut lines = String::new();
    let mut total = 0.0;
    if let Some(order) = state.orders.history().into_iter().next() {
        for item in &order.items {
            let line_total = item.price_at_purchase * f64::from(item.quantity);
            total += line_total;
            lines.push_str(&format!(
                "- {} x{} - ${:.2}\n",
                item.product_name, item.quantity, line_total
            ));
        }
    }

    format!(
        "Order Invoice\n\
         Order ID: {order_id}\n\
         Date: {date}\n\
         \n\
         Items:\n\
         {lines}\
         \n\
         Total: ${total:.2}\n\
         \n\
         Thank you for your purchase!",
        date = Utc::now().format("%m/%d/%Y"),
    )
}
