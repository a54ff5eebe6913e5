use super::KitchenEvent;
use crate::clients::OrderClient;
use crate::model::{Order, OrderId, OrderStatus, Price};
use resource_actor::ActorClient;
use std::collections::HashSet;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TicketKind {
    NewOrder,
    ReadyForDelivery,
}

/// A record of one thing the kitchen was told to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitchenTicket {
    pub order_id: OrderId,
    pub kind: TicketKind,
    pub dish_count: usize,
    /// `None` when the dish prices add up past what a [`Price`] can hold.
    pub total: Option<Price>,
}

impl KitchenTicket {
    fn for_order(order: &Order, kind: TicketKind) -> Self {
        Self {
            order_id: order.id(),
            kind,
            dish_count: order.dishes().len(),
            total: order.calculate_total().ok(),
        }
    }
}

/// Consumes [`KitchenEvent`]s until told to shut down.
pub struct KitchenStation {
    receiver: mpsc::UnboundedReceiver<KitchenEvent>,
    orders: OrderClient,
    announced: HashSet<OrderId>,
}

impl KitchenStation {
    pub fn new(receiver: mpsc::UnboundedReceiver<KitchenEvent>, orders: OrderClient) -> Self {
        Self {
            receiver,
            orders,
            announced: HashSet::new(),
        }
    }

    /// Runs until a [`KitchenEvent::Shutdown`] arrives (or every notifier is gone) and
    /// returns the tickets recorded along the way.
    ///
    /// An order gets at most one `NewOrder` ticket, the first time it is seen in
    /// `Created`.
    pub async fn run(mut self) -> Vec<KitchenTicket> {
        info!("Kitchen station started");
        let mut tickets = Vec::new();

        while let Some(event) = self.receiver.recv().await {
            let ticket = match event {
                KitchenEvent::OrderUpdated(order_id) => self.order_updated(order_id).await,
                KitchenEvent::OrderReady(order_id) => self.order_ready(order_id).await,
                KitchenEvent::Shutdown => break,
            };
            tickets.extend(ticket);
        }

        info!(tickets = tickets.len(), "Kitchen station stopped");
        tickets
    }

    async fn lookup(&self, order_id: OrderId) -> Option<Order> {
        match self.orders.get(order_id).await {
            Ok(Some(order)) => Some(order),
            Ok(None) => {
                debug!(%order_id, "Order gone before the kitchen saw it");
                None
            }
            Err(e) => {
                warn!(%order_id, error = %e, "Kitchen could not load order");
                None
            }
        }
    }

    async fn order_updated(&mut self, order_id: OrderId) -> Option<KitchenTicket> {
        let order = self.lookup(order_id).await?;
        if order.status() != OrderStatus::Created || !self.announced.insert(order_id) {
            debug!(%order_id, status = %order.status(), "Kitchen noted order update");
            return None;
        }

        let ticket = KitchenTicket::for_order(&order, TicketKind::NewOrder);
        info!(
            %order_id,
            dishes = ticket.dish_count,
            total = ?ticket.total,
            "New order received"
        );
        Some(ticket)
    }

    async fn order_ready(&mut self, order_id: OrderId) -> Option<KitchenTicket> {
        let order = self.lookup(order_id).await?;
        info!(%order_id, status = %order.status(), "Order ready for delivery");
        Some(KitchenTicket::for_order(&order, TicketKind::ReadyForDelivery))
    }
}
