//! [`ActorEntity`] implementation for [`Order`].

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::model::{
    create_order, CustomerId, Dish, Order, OrderId, OrderStatus, OrderSubject, OrderType,
    SharedObserver,
};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use tracing::{debug, warn};

/// Payload for creating a new order from already-resolved dishes.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub dishes: Vec<Dish>,
    pub order_type: OrderType,
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    /// Default observers attached to every newly created order.
    type Context = Vec<SharedObserver>;
    type Error = OrderError;

    fn id(&self) -> OrderId {
        Order::id(self)
    }

    /// Builds the order with the factory for `params.order_type`.
    fn from_create_params(params: OrderCreate) -> Result<Self, OrderError> {
        Ok(create_order(
            params.order_type,
            params.customer_id,
            &params.dishes,
        ))
    }

    /// Attaches the default observers and announces the new order.
    async fn on_create(&mut self, observers: &Self::Context) -> Result<(), OrderError> {
        for observer in observers {
            self.attach(observer.clone());
        }
        self.notify();
        Ok(())
    }

    /// Handles order actions.
    ///
    /// # Actions
    /// - `AddDish` / `RemoveDish`: only while the order is `Created`, otherwise `false`
    /// - `UpdateStatus`: always applied; a change outside the intended lifecycle is logged
    /// - `Attach` / `Detach` / `Notify`: observer management
    /// - `CalculateTotal`: read-only; a total past `u64::MAX` cents is an error, not a wrap
    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Self::Context,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::AddDish(dish) => {
                if self.status() != OrderStatus::Created {
                    debug!(order_id = %self.id(), status = %self.status(), "Dish not added");
                    return Ok(OrderActionResult::AddDish(false));
                }
                self.add_dish(dish);
                Ok(OrderActionResult::AddDish(true))
            }
            OrderAction::RemoveDish(dish_id) => {
                if self.status() != OrderStatus::Created {
                    debug!(order_id = %self.id(), status = %self.status(), "Dish not removed");
                    return Ok(OrderActionResult::RemoveDish(false));
                }
                Ok(OrderActionResult::RemoveDish(self.remove_dish(dish_id)))
            }
            OrderAction::UpdateStatus(status) => {
                let from = self.status();
                if !from.can_transition_to(status) {
                    warn!(order_id = %self.id(), %from, to = %status, "Unusual status change");
                }
                self.update_status(status);
                Ok(OrderActionResult::UpdateStatus(()))
            }
            OrderAction::Attach(observer) => {
                self.attach(observer);
                Ok(OrderActionResult::Attach(()))
            }
            OrderAction::Detach(observer) => {
                self.detach(&observer);
                Ok(OrderActionResult::Detach(()))
            }
            OrderAction::Notify => {
                self.notify();
                Ok(OrderActionResult::Notify(()))
            }
            OrderAction::CalculateTotal => {
                Ok(OrderActionResult::CalculateTotal(self.calculate_total()?))
            }
        }
    }
}
