use crate::model::{ObserverError, OrderId, OrderObserver};
use tokio::sync::mpsc;
use tracing::debug;

/// Messages the kitchen station consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KitchenEvent {
    /// Something about the order changed.
    OrderUpdated(OrderId),
    /// The order is ready to leave the kitchen.
    OrderReady(OrderId),
    Shutdown,
}

/// Forwards order notifications to the kitchen station.
#[derive(Debug, Clone)]
pub struct KitchenNotifier {
    sender: mpsc::UnboundedSender<KitchenEvent>,
}

impl KitchenNotifier {
    pub fn new(sender: mpsc::UnboundedSender<KitchenEvent>) -> Self {
        Self { sender }
    }

    /// Tells the station `order_id` is ready for delivery.
    pub fn notify_order_ready(&self, order_id: OrderId) -> Result<(), ObserverError> {
        self.send(KitchenEvent::OrderReady(order_id))
    }

    /// Asks the station to stop once it has drained earlier events.
    pub fn shutdown(&self) -> Result<(), ObserverError> {
        self.send(KitchenEvent::Shutdown)
    }

    fn send(&self, event: KitchenEvent) -> Result<(), ObserverError> {
        debug!(?event, "Kitchen event");
        self.sender
            .send(event)
            .map_err(|_| ObserverError::Disconnected)
    }
}

impl OrderObserver for KitchenNotifier {
    fn update(&self, order_id: OrderId) -> Result<(), ObserverError> {
        self.send(KitchenEvent::OrderUpdated(order_id))
    }
}
