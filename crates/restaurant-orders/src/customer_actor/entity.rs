//! [`ActorEntity`] implementation for [`Customer`].

use super::error::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId};
use async_trait::async_trait;
use resource_actor::ActorEntity;

/// Customers have no custom actions.
#[derive(Debug, Clone)]
pub enum CustomerAction {}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Action = CustomerAction;
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn id(&self) -> CustomerId {
        self.id
    }

    /// Rejects a blank name, or an email without an `@`.
    fn from_create_params(params: CustomerCreate) -> Result<Self, CustomerError> {
        if params.name.trim().is_empty() {
            return Err(CustomerError::ValidationError("name is empty".into()));
        }
        if !params.email.contains('@') {
            return Err(CustomerError::ValidationError(format!(
                "invalid email: {}",
                params.email
            )));
        }
        Ok(Customer::from(params))
    }

    async fn handle_action(
        &mut self,
        action: CustomerAction,
        _ctx: &Self::Context,
    ) -> Result<(), CustomerError> {
        match action {}
    }
}
