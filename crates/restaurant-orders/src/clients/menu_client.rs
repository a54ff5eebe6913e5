//! # Menu Client
//!
//! Provides a high‑level API for interacting with the `Menu` actor.
//! Every call targets the one menu the client was built for.
use crate::menu_actor::{MenuAction, MenuActionResult, MenuError};
use crate::model::{Dish, DishCreate, DishId, Menu, MenuId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<Menu>,
    menu_id: MenuId,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<Menu>, menu_id: MenuId) -> Self {
        Self { inner, menu_id }
    }

    pub fn menu_id(&self) -> MenuId {
        self.menu_id
    }

    async fn action(&self, action: MenuAction) -> Result<MenuActionResult, MenuError> {
        self.inner
            .perform_action(self.menu_id, action)
            .await
            .map_err(Self::map_error)
    }

    /// Adds a new dish and returns it with its freshly assigned id.
    #[instrument(skip(self))]
    pub async fn add_dish(&self, params: DishCreate) -> Result<Dish, MenuError> {
        debug!("Sending request");
        let dish = Dish::from(params);
        match self.action(MenuAction::AddDish(dish.clone())).await? {
            MenuActionResult::AddDish(_) => Ok(dish),
            _ => unreachable!("AddDish action must return AddDish result"),
        }
    }

    /// Lists an already-built dish. Returns `false` if its id was already on the menu.
    #[instrument(skip(self))]
    pub async fn put_dish(&self, dish: Dish) -> Result<bool, MenuError> {
        debug!("Sending request");
        match self.action(MenuAction::AddDish(dish)).await? {
            MenuActionResult::AddDish(added) => Ok(added),
            _ => unreachable!("AddDish action must return AddDish result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_dish(&self, dish_id: DishId) -> Result<Option<Dish>, MenuError> {
        debug!("Sending request");
        match self.action(MenuAction::GetDish(dish_id)).await? {
            MenuActionResult::GetDish(dish) => Ok(dish),
            _ => unreachable!("GetDish action must return GetDish result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_dish(&self, dish_id: DishId) -> Result<bool, MenuError> {
        debug!("Sending request");
        match self.action(MenuAction::RemoveDish(dish_id)).await? {
            MenuActionResult::RemoveDish(removed) => Ok(removed),
            _ => unreachable!("RemoveDish action must return RemoveDish result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn all_dishes(&self) -> Result<Vec<Dish>, MenuError> {
        debug!("Sending request");
        match self.action(MenuAction::ListDishes).await? {
            MenuActionResult::ListDishes(dishes) => Ok(dishes),
            _ => unreachable!("ListDishes action must return ListDishes result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn dishes_by_category(&self, category: &str) -> Result<Vec<Dish>, MenuError> {
        debug!("Sending request");
        match self
            .action(MenuAction::ByCategory(category.to_string()))
            .await?
        {
            MenuActionResult::ByCategory(dishes) => Ok(dishes),
            _ => unreachable!("ByCategory action must return ByCategory result"),
        }
    }

    /// Resolves `dish_ids` in order; ids not on the menu are dropped.
    #[instrument(skip(self))]
    pub async fn resolve_dishes(&self, dish_ids: Vec<DishId>) -> Result<Vec<Dish>, MenuError> {
        debug!("Sending request");
        match self.action(MenuAction::ResolveDishes(dish_ids)).await? {
            MenuActionResult::ResolveDishes(dishes) => Ok(dishes),
            _ => unreachable!("ResolveDishes action must return ResolveDishes result"),
        }
    }

    /// A snapshot of the whole menu.
    #[instrument(skip(self))]
    pub async fn menu(&self) -> Result<Menu, MenuError> {
        debug!("Sending request");
        self.inner
            .get(self.menu_id)
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| MenuError::NotFound(self.menu_id.to_string()))
    }
}

#[async_trait]
impl ActorClient<Menu> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<Menu> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<MenuError>() {
                Ok(err) => *err,
                Err(other) => MenuError::ActorCommunicationError(other.to_string()),
            },
            other => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}
