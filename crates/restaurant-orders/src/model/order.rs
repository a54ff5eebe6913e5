use crate::model::{
    CustomerId, Dish, DishId, ModelError, ObserverSet, OrderId, OrderSubject, OrderType, Price,
    SharedObserver,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Where an order is in its life.
///
/// The intended flow is `Created → Processing → Ready → Delivered`, with `Cancelled`
/// reachable from any state that is not terminal. [`Order::update_status`] does not
/// enforce this graph; [`OrderStatus::can_transition_to`] describes it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Processing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether `next` is a step of the intended lifecycle from `self`.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match (self, next) {
            (Created, Processing) | (Processing, Ready) | (Ready, Delivered) => true,
            (from, Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Created => "created",
            OrderStatus::Processing => "processing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(OrderStatus::Created),
            "processing" => Ok(OrderStatus::Processing),
            "ready" => Ok(OrderStatus::Ready),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(ModelError::InvalidStatus(other.to_string())),
        }
    }
}

/// A customer's order.
///
/// The order owns its own copy of the dishes it was built with; later menu changes never
/// reach it. Duplicates are allowed and order of the list is kept.
///
/// Every mutation moves `updated_at` strictly forward, so `updated_at >= created_at` always
/// holds and two mutations never share a timestamp.
///
/// # Actor Framework
/// `Order` implements [`ActorEntity`](resource_actor::ActorEntity) (see
/// [`order_actor`](crate::order_actor)). The order actor is the only writer of a stored
/// order, which makes each mutation (and its notify round) atomic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    dishes: Vec<Dish>,
    status: OrderStatus,
    order_type: OrderType,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip)]
    observers: ObserverSet,
}

impl Order {
    /// Builds a fresh order in [`OrderStatus::Created`] with no observers.
    ///
    /// Prefer [`create_order`](crate::model::create_order), which picks the construction
    /// strategy for an [`OrderType`].
    pub fn new(customer_id: CustomerId, dishes: Vec<Dish>, order_type: OrderType) -> Self {
        let now = Utc::now();
        Self {
            id: OrderId::new(),
            customer_id,
            dishes,
            status: OrderStatus::Created,
            order_type,
            created_at: now,
            updated_at: now,
            observers: ObserverSet::new(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Appends `dish`. No status check and no notification.
    pub fn add_dish(&mut self, dish: Dish) {
        self.dishes.push(dish);
        self.touch();
    }

    /// Removes the first dish with `dish_id`. Returns `false` (and leaves the order
    /// untouched) when there is none.
    pub fn remove_dish(&mut self, dish_id: DishId) -> bool {
        match self.dishes.iter().position(|d| d.id() == dish_id) {
            Some(index) => {
                self.dishes.remove(index);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Sets the status and runs one notify round. Any status is accepted.
    pub fn update_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.touch();
        self.notify();
    }

    /// Exact sum of the dish prices; zero for an empty order.
    pub fn calculate_total(&self) -> Result<Price, ModelError> {
        Price::checked_sum(self.dishes.iter().map(Dish::price)).ok_or(ModelError::PriceOverflow)
    }

    fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::nanoseconds(1)
        };
    }
}

impl OrderSubject for Order {
    fn attach(&mut self, observer: SharedObserver) {
        self.observers.insert(observer);
    }

    fn detach(&mut self, observer: &SharedObserver) {
        self.observers.remove(observer);
    }

    fn notify(&self) {
        self.observers.deliver(self.id);
    }
}
