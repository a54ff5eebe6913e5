//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and uses a [`MenuClient`] to turn dish ids into
//! dishes.
//!
//! Lookups that miss are answers, not failures: a missing order makes the mutators and
//! [`OrderClient::delete_order`] return `false` and the total `None`. Only communication problems come back as `Err`.
use crate::clients::MenuClient;
use crate::model::{
    CustomerId, DishId, Order, OrderId, OrderStatus, OrderType, Price, SharedObserver,
};
use crate::order_actor::{OrderAction, OrderActionResult, OrderCreate, OrderError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    menu: MenuClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, menu: MenuClient) -> Self {
        Self { inner, menu }
    }

    /// Runs `action` on order `id`. `Ok(None)` means there is no such order.
    async fn act(
        &self,
        id: OrderId,
        action: OrderAction,
    ) -> Result<Option<OrderActionResult>, OrderError> {
        match self.inner.perform_action(id, action).await {
            Ok(result) => Ok(Some(result)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Creates an order from menu dish ids.
    ///
    /// The ids are resolved against the menu once, here; ids not on the menu are skipped.
    /// The order gets the actor's default observers and one initial notification.
    #[instrument(skip(self))]
    pub async fn create_order(
        &self,
        customer_id: CustomerId,
        dish_ids: &[DishId],
        order_type: OrderType,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        let dishes = self.menu.resolve_dishes(dish_ids.to_vec()).await?;
        if dishes.len() != dish_ids.len() {
            debug!(
                requested = dish_ids.len(),
                resolved = dishes.len(),
                "Skipped dish ids not on the menu"
            );
        }

        let order = self
            .inner
            .create(OrderCreate {
                customer_id,
                dishes,
                order_type,
            })
            .await
            .map_err(Self::map_error)?;
        info!(order_id = %order.id(), %order_type, dishes = order.dishes().len(), "Order created");
        Ok(order)
    }

    /// Stores a factory-built `order` as-is.
    ///
    /// `false` when an order with the same id is already stored: it is left untouched, so
    /// a copy fetched with `get` and edited locally cannot undo concurrent changes. Stored
    /// orders change through the other methods of this client.
    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    pub async fn put_order(&self, order: Order) -> Result<bool, OrderError> {
        debug!("Sending request");
        self.inner.insert(order).await.map_err(Self::map_error)
    }

    /// Deletes an order. `false` if there is no such order.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, order_id: OrderId) -> Result<bool, OrderError> {
        debug!("Sending request");
        match self.inner.delete(order_id).await {
            Ok(()) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Sets the status and notifies the order's observers. `false` if there is no such order.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<bool, OrderError> {
        debug!("Sending request");
        match self.act(order_id, OrderAction::UpdateStatus(status)).await? {
            Some(OrderActionResult::UpdateStatus(())) => Ok(true),
            None => Ok(false),
            Some(_) => unreachable!("UpdateStatus action must return UpdateStatus result"),
        }
    }

    /// Adds a menu dish to a `Created` order.
    ///
    /// `false` when the order or the dish does not exist, or the order is past `Created`.
    #[instrument(skip(self))]
    pub async fn add_dish_to_order(
        &self,
        order_id: OrderId,
        dish_id: DishId,
    ) -> Result<bool, OrderError> {
        debug!("Sending request");
        let Some(dish) = self.menu.get_dish(dish_id).await? else {
            return Ok(false);
        };
        match self.act(order_id, OrderAction::AddDish(dish)).await? {
            Some(OrderActionResult::AddDish(added)) => Ok(added),
            None => Ok(false),
            Some(_) => unreachable!("AddDish action must return AddDish result"),
        }
    }

    /// Removes one dish from a `Created` order.
    ///
    /// `false` when the order does not exist, is past `Created`, or does not hold the dish.
    #[instrument(skip(self))]
    pub async fn remove_dish_from_order(
        &self,
        order_id: OrderId,
        dish_id: DishId,
    ) -> Result<bool, OrderError> {
        debug!("Sending request");
        match self.act(order_id, OrderAction::RemoveDish(dish_id)).await? {
            Some(OrderActionResult::RemoveDish(removed)) => Ok(removed),
            None => Ok(false),
            Some(_) => unreachable!("RemoveDish action must return RemoveDish result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn calculate_order_total(&self, order_id: OrderId) -> Result<Option<Price>, OrderError> {
        debug!("Sending request");
        match self.act(order_id, OrderAction::CalculateTotal).await? {
            Some(OrderActionResult::CalculateTotal(total)) => Ok(Some(total)),
            None => Ok(None),
            Some(_) => unreachable!("CalculateTotal action must return CalculateTotal result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn attach_observer(
        &self,
        order_id: OrderId,
        observer: SharedObserver,
    ) -> Result<bool, OrderError> {
        debug!("Sending request");
        match self.act(order_id, OrderAction::Attach(observer)).await? {
            Some(OrderActionResult::Attach(())) => Ok(true),
            None => Ok(false),
            Some(_) => unreachable!("Attach action must return Attach result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn detach_observer(
        &self,
        order_id: OrderId,
        observer: SharedObserver,
    ) -> Result<bool, OrderError> {
        debug!("Sending request");
        match self.act(order_id, OrderAction::Detach(observer)).await? {
            Some(OrderActionResult::Detach(())) => Ok(true),
            None => Ok(false),
            Some(_) => unreachable!("Detach action must return Detach result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn notify_observers(&self, order_id: OrderId) -> Result<bool, OrderError> {
        debug!("Sending request");
        match self.act(order_id, OrderAction::Notify).await? {
            Some(OrderActionResult::Notify(())) => Ok(true),
            None => Ok(false),
            Some(_) => unreachable!("Notify action must return Notify result"),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
