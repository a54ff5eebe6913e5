//! Order construction by type.
//!
//! Each [`OrderType`] maps to one [`OrderFactory`]. All three currently build the same
//! order shape; `Bulk` and `Express` are the places to hang a discount or a priority
//! lane when those exist.

use crate::model::{CustomerId, Dish, ModelError, Order};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Regular,
    Bulk,
    Express,
}

impl OrderType {
    /// The construction strategy for this type.
    pub fn factory(self) -> &'static dyn OrderFactory {
        match self {
            OrderType::Regular => &RegularOrderFactory,
            OrderType::Bulk => &BulkOrderFactory,
            OrderType::Express => &ExpressOrderFactory,
        }
    }
}

impl Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderType::Regular => "regular",
            OrderType::Bulk => "bulk",
            OrderType::Express => "express",
        })
    }
}

impl FromStr for OrderType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(OrderType::Regular),
            "bulk" => Ok(OrderType::Bulk),
            "express" => Ok(OrderType::Express),
            other => Err(ModelError::InvalidOrderType(other.to_string())),
        }
    }
}

/// Builds orders of one [`OrderType`].
pub trait OrderFactory: Send + Sync {
    fn order_type(&self) -> OrderType;

    /// Builds a fresh order owning a copy of `dishes`.
    fn create_order(&self, customer_id: CustomerId, dishes: &[Dish]) -> Order;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RegularOrderFactory;

impl OrderFactory for RegularOrderFactory {
    fn order_type(&self) -> OrderType {
        OrderType::Regular
    }

    fn create_order(&self, customer_id: CustomerId, dishes: &[Dish]) -> Order {
        Order::new(customer_id, dishes.to_vec(), OrderType::Regular)
    }
}

/// Same as regular; no bulk discount is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct BulkOrderFactory;

impl OrderFactory for BulkOrderFactory {
    fn order_type(&self) -> OrderType {
        OrderType::Bulk
    }

    fn create_order(&self, customer_id: CustomerId, dishes: &[Dish]) -> Order {
        Order::new(customer_id, dishes.to_vec(), OrderType::Bulk)
    }
}

/// Same as regular; express orders get no priority yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressOrderFactory;

impl OrderFactory for ExpressOrderFactory {
    fn order_type(&self) -> OrderType {
        OrderType::Express
    }

    fn create_order(&self, customer_id: CustomerId, dishes: &[Dish]) -> Order {
        Order::new(customer_id, dishes.to_vec(), OrderType::Express)
    }
}

/// Builds an order of `order_type` for `customer_id`.
pub fn create_order(order_type: OrderType, customer_id: CustomerId, dishes: &[Dish]) -> Order {
    order_type.factory().create_order(customer_id, dishes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderStatus, Price};

    #[test]
    fn test_regular_keeps_dishes_exactly() {
        let dishes = vec![
            Dish::new("Pizza", Price::from_cents(1299)),
            Dish::new("Salad", Price::from_cents(899)),
            Dish::new("Pizza", Price::from_cents(1299)),
        ];
        let customer = CustomerId::new();

        let order = create_order(OrderType::Regular, customer, &dishes);

        assert_eq!(order.dishes(), dishes.as_slice());
        assert_eq!(order.customer_id(), customer);
        assert_eq!(order.status(), OrderStatus::Created);
        assert_eq!(order.order_type(), OrderType::Regular);
    }

    #[test]
    fn test_every_type_has_matching_factory() {
        for order_type in [OrderType::Regular, OrderType::Bulk, OrderType::Express] {
            assert_eq!(order_type.factory().order_type(), order_type);
            let order = create_order(order_type, CustomerId::new(), &[]);
            assert_eq!(order.order_type(), order_type);
            assert_eq!(order.calculate_total(), Ok(Price::ZERO));
        }
    }

    #[test]
    fn test_bulk_applies_no_discount() {
        let dishes = vec![Dish::new("Tray", Price::from_cents(5000)); 10];
        let order = create_order(OrderType::Bulk, CustomerId::new(), &dishes);
        assert_eq!(order.calculate_total(), Ok(Price::from_cents(50_000)));
    }

    #[test]
    fn test_parse_order_type() {
        assert_eq!("express".parse::<OrderType>(), Ok(OrderType::Express));
        assert_eq!(OrderType::Bulk.to_string().parse::<OrderType>(), Ok(OrderType::Bulk));
        assert_eq!(
            "takeaway".parse::<OrderType>(),
            Err(ModelError::InvalidOrderType("takeaway".into()))
        );
        assert!("Regular".parse::<OrderType>().is_err());
    }
}
