//! Custom actions for the Menu actor.

use crate::model::{Dish, DishId};

/// Operations on the menu beyond the store surface.
#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Adds a dish unless its id is already listed.
    AddDish(Dish),
    RemoveDish(DishId),
    GetDish(DishId),
    ListDishes,
    /// Exact, case-sensitive category match.
    ByCategory(String),
    /// Looks up each id in order, skipping ids that are not on the menu.
    ResolveDishes(Vec<DishId>),
}

/// Results from MenuActions - variants match 1:1 with MenuAction
#[derive(Debug, Clone)]
pub enum MenuActionResult {
    /// `true` if the dish was added, `false` if it was already listed
    AddDish(bool),
    /// `true` if a dish was removed
    RemoveDish(bool),
    GetDish(Option<Dish>),
    ListDishes(Vec<Dish>),
    ByCategory(Vec<Dish>),
    ResolveDishes(Vec<Dish>),
}
