use crate::model::CustomerId;
use serde::{Deserialize, Serialize};

/// A customer who places orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Payload for registering a new customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Customer {
    /// Creates a new Customer with a fresh id and no contact details beyond email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
            email: email.into(),
            phone: None,
            address: None,
        }
    }
}

impl From<CustomerCreate> for Customer {
    fn from(params: CustomerCreate) -> Self {
        Self {
            id: CustomerId::new(),
            name: params.name,
            email: params.email,
            phone: params.phone,
            address: params.address,
        }
    }
}
