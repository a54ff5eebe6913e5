use crate::clients::{CustomerClient, MenuClient, OrderClient};
use crate::customer_actor::{self, CustomerError};
use crate::kitchen::{self, KitchenNotifier, KitchenTicket};
use crate::lifecycle::{ConfigError, SystemConfig};
use crate::menu_actor::{self, MenuError};
use crate::model::SharedObserver;
use crate::order_actor::{self, OrderError};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Name of the menu every system starts with.
pub const MAIN_MENU: &str = "Main Menu";

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Order(#[from] OrderError),

    /// A background task panicked or was cancelled.
    #[error("Task failed: {0}")]
    Join(String),
}

/// Main system orchestrator that manages all actors and the kitchen.
pub struct OrderSystem {
    pub customer_client: CustomerClient,
    pub menu_client: MenuClient,
    pub order_client: OrderClient,
    /// Attached to every new order; also how callers signal "ready for delivery".
    pub kitchen: Arc<KitchenNotifier>,
    handles: Vec<JoinHandle<()>>,
    kitchen_handle: JoinHandle<Vec<KitchenTicket>>,
}

impl OrderSystem {
    /// Creates and starts the actors and the kitchen station. Must run inside a Tokio runtime.
    pub fn new(config: SystemConfig) -> Self {
        info!(?config, "Starting order system");

        // 1. Create actors (no dependencies yet)
        let (customer_actor, customer_client) = customer_actor::new(config.channel_buffer);
        let (menu_actor, menu_client, menu_id) =
            menu_actor::new(config.channel_buffer, MAIN_MENU);
        let (order_actor, order_client) = order_actor::new(config.channel_buffer);

        // 2. Wrap them in domain clients
        let customer_client = CustomerClient::new(customer_client);
        let menu_client = MenuClient::new(menu_client, menu_id);
        let order_client = OrderClient::new(order_client, menu_client.clone());
        let (notifier, station) = kitchen::new(order_client.clone());
        let kitchen = Arc::new(notifier);

        // 3. Start everything, injecting the kitchen as the orders' default observer
        let default_observers: Vec<SharedObserver> = vec![kitchen.clone()];
        let handles = vec![
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(menu_actor.run(())),
            tokio::spawn(order_actor.run(default_observers)),
        ];
        let kitchen_handle = tokio::spawn(station.run());

        Self {
            customer_client,
            menu_client,
            order_client,
            kitchen,
            handles,
            kitchen_handle,
        }
    }

    /// Stops the kitchen, then every actor, and returns the kitchen's tickets.
    ///
    /// The kitchen and the order actor reference each other, so the kitchen is stopped
    /// with an explicit event first. The actors then stop once their clients are gone;
    /// clones of the clients held elsewhere keep their actor alive and this call waiting.
    pub async fn shutdown(self) -> Result<Vec<KitchenTicket>, SystemError> {
        info!("Shutting down order system");
        let OrderSystem {
            customer_client,
            menu_client,
            order_client,
            kitchen,
            handles,
            kitchen_handle,
        } = self;

        if let Err(e) = kitchen.shutdown() {
            warn!(error = %e, "Kitchen station already stopped");
        }
        let tickets = kitchen_handle
            .await
            .map_err(|e| SystemError::Join(e.to_string()))?;

        drop(customer_client);
        drop(menu_client);
        drop(order_client);
        drop(kitchen);

        for handle in handles {
            handle.await.map_err(|e| SystemError::Join(e.to_string()))?;
        }

        info!(tickets = tickets.len(), "Order system stopped");
        Ok(tickets)
    }
}
