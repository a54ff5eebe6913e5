//! Custom actions for the Order actor.

use crate::model::{Dish, DishId, OrderStatus, Price, SharedObserver};

/// Mutations and queries on one stored order.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Appends a dish. Refused unless the order is still `Created`.
    AddDish(Dish),
    /// Removes the first matching dish. Refused unless the order is still `Created`.
    RemoveDish(DishId),
    /// Sets the status and notifies every attached observer.
    UpdateStatus(OrderStatus),
    Attach(SharedObserver),
    Detach(SharedObserver),
    /// Runs one notify round without changing the order.
    Notify,
    CalculateTotal,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// `false` when the order is no longer `Created`
    AddDish(bool),
    /// `false` when the order is no longer `Created` or the dish is not in it
    RemoveDish(bool),
    UpdateStatus(()),
    Attach(()),
    Detach(()),
    Notify(()),
    CalculateTotal(Price),
}
