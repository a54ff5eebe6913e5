//! [`ActorEntity`] implementation for [`Menu`].

use super::actions::{MenuAction, MenuActionResult};
use super::error::MenuError;
use crate::model::{Menu, MenuCreate, MenuId};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Menu {
    type Id = MenuId;
    type Create = MenuCreate;
    type Action = MenuAction;
    type ActionResult = MenuActionResult;
    type Context = ();
    type Error = MenuError;

    fn id(&self) -> MenuId {
        Menu::id(self)
    }

    fn from_create_params(params: MenuCreate) -> Result<Self, MenuError> {
        if params.name.trim().is_empty() {
            return Err(MenuError::ValidationError("menu name is empty".into()));
        }
        Ok(Menu::new(params.name))
    }

    /// Handles menu actions.
    ///
    /// # Actions
    /// - `AddDish`: rejects a dish with a blank name, otherwise adds it (no-op for a known id)
    /// - `RemoveDish` / `GetDish`: by id
    /// - `ListDishes` / `ByCategory` / `ResolveDishes`: snapshots, never references into the menu
    async fn handle_action(
        &mut self,
        action: MenuAction,
        _ctx: &Self::Context,
    ) -> Result<MenuActionResult, MenuError> {
        match action {
            MenuAction::AddDish(dish) => {
                if dish.name().trim().is_empty() {
                    return Err(MenuError::ValidationError("dish name is empty".into()));
                }
                Ok(MenuActionResult::AddDish(self.add(dish)))
            }
            MenuAction::RemoveDish(dish_id) => Ok(MenuActionResult::RemoveDish(self.remove(dish_id))),
            MenuAction::GetDish(dish_id) => Ok(MenuActionResult::GetDish(self.get(dish_id))),
            MenuAction::ListDishes => Ok(MenuActionResult::ListDishes(self.all())),
            MenuAction::ByCategory(category) => {
                Ok(MenuActionResult::ByCategory(self.by_category(&category)))
            }
            MenuAction::ResolveDishes(dish_ids) => {
                Ok(MenuActionResult::ResolveDishes(self.resolve(&dish_ids)))
            }
        }
    }
}
