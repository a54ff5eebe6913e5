use crate::model::{Dish, DishId, MenuId};
use serde::{Deserialize, Serialize};

/// The restaurant's collection of available dishes.
///
/// A menu holds at most one dish per [`DishId`] and lists dishes in the order they were
/// first added. Every read hands out clones, so nothing a caller does with the result can
/// change the menu.
///
/// # Actor Framework
/// `Menu` implements [`ActorEntity`](resource_actor::ActorEntity) (see
/// [`menu_actor`](crate::menu_actor)), so the whole menu lives in one actor and every menu
/// operation is a single atomic step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    id: MenuId,
    name: String,
    dishes: Vec<Dish>,
}

/// Payload for creating an empty menu.
#[derive(Debug, Clone)]
pub struct MenuCreate {
    pub name: String,
}

impl Menu {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MenuId::new(),
            name: name.into(),
            dishes: Vec::new(),
        }
    }

    pub fn id(&self) -> MenuId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds `dish` unless a dish with the same id is already listed.
    /// Returns whether the dish was added.
    pub fn add(&mut self, dish: Dish) -> bool {
        if self.contains(&dish) {
            return false;
        }
        self.dishes.push(dish);
        true
    }

    /// Removes the dish with `dish_id`. Returns `false` if there was none.
    pub fn remove(&mut self, dish_id: DishId) -> bool {
        match self.dishes.iter().position(|d| d.id() == dish_id) {
            Some(index) => {
                self.dishes.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, dish_id: DishId) -> Option<Dish> {
        self.dishes.iter().find(|d| d.id() == dish_id).cloned()
    }

    pub fn contains(&self, dish: &Dish) -> bool {
        self.dishes.iter().any(|d| d == dish)
    }

    /// Every dish, in the order it was added.
    pub fn all(&self) -> Vec<Dish> {
        self.dishes.clone()
    }

    /// Dishes whose category is exactly `category` (case-sensitive, no trimming).
    pub fn by_category(&self, category: &str) -> Vec<Dish> {
        self.dishes
            .iter()
            .filter(|d| d.category() == Some(category))
            .cloned()
            .collect()
    }

    /// Resolves `dish_ids` in request order. Unknown ids are skipped; repeated ids
    /// resolve once per occurrence.
    pub fn resolve(&self, dish_ids: &[DishId]) -> Vec<Dish> {
        dish_ids.iter().filter_map(|id| self.get(*id)).collect()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
