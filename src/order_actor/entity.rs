use crate::actor_framework::Entity;
use crate::domain::{Order, OrderPayload, OrderStatus};

use super::actions::OrderBookAction;

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderPayload;
    type Update = ();
    type Action = OrderBookAction;
    type ActionResult = OrderStatus;

    /// Records a submitted payload. New orders start out `Pending`.
    ///
    /// Orders are never edited; only their status moves, through actions.
    fn from_create_params(id: String, params: OrderPayload) -> Result<Self, String> {
        Ok(Self {
            id,
            client_id: params.client_id,
            lines: params.lines,
            total: params.total,
            status: OrderStatus::Pending,
        })
    }

    /// Handles order-specific actions.
    ///
    /// # Errors
    /// A cancelled order cannot be moved to another status.
    fn handle_action(&mut self, action: OrderBookAction) -> Result<OrderStatus, String> {
        match action {
            OrderBookAction::ChangeStatus(status) => {
                if self.status == OrderStatus::Cancelled && status != OrderStatus::Cancelled {
                    return Err(format!("Order {} is cancelled", self.id));
                }
                self.status = status;
                Ok(self.status)
            }
        }
    }
}
