use crate::model::{DishId, Price};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A menu item.
///
/// Dishes are values: once built they are never changed, and equality (and hashing) is by
/// [`DishId`] alone. Two dishes with the same id are the same dish even if a later copy
/// carries a different name or price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    id: DishId,
    name: String,
    price: Price,
    description: Option<String>,
    category: Option<String>,
}

impl Dish {
    /// Creates a new dish with a fresh id and no description or category.
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self::with_id(DishId::new(), name, price)
    }

    /// Creates a dish under a known id.
    pub fn with_id(id: DishId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: None,
            category: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn id(&self) -> DishId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl PartialEq for Dish {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Dish {}

impl Hash for Dish {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Payload for adding a new dish to the menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    pub price: Price,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl From<DishCreate> for Dish {
    fn from(params: DishCreate) -> Self {
        Self {
            id: DishId::new(),
            name: params.name,
            price: params.price,
            description: params.description,
            category: params.category,
        }
    }
}
