use crate::domain::OrderStatus;

/// Custom actions for submitted orders.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderBookAction {
    ChangeStatus(OrderStatus),
}
