//! Startup data: a categorised menu, two customers and a first order.

use crate::lifecycle::{OrderSystem, SystemError};
use crate::model::{Customer, CustomerCreate, Dish, DishCreate, Order, OrderType, Price};
use tracing::info;

/// What [`populate`] loaded.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub dishes: Vec<Dish>,
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
}

const DISHES: &[(&str, u64, &str, &str)] = &[
    ("Garlic Bread", 599, "Toasted bread with garlic butter", "Appetizer"),
    ("Bruschetta", 799, "Grilled bread with tomato and basil", "Appetizer"),
    ("Margherita Pizza", 1299, "Tomato, mozzarella and basil", "Main Course"),
    ("Caesar Salad", 899, "Romaine, parmesan and croutons", "Main Course"),
    ("Spaghetti Carbonara", 1499, "Egg, pecorino and guanciale", "Main Course"),
    ("Tiramisu", 750, "Coffee-soaked ladyfingers and mascarpone", "Dessert"),
    ("Soda", 249, "Chilled soft drink", "Beverage"),
];

/// Loads the sample menu, customers and one regular order into `system`.
pub async fn populate(system: &OrderSystem) -> Result<SampleData, SystemError> {
    let mut dishes = Vec::with_capacity(DISHES.len());
    for &(name, cents, description, category) in DISHES {
        let dish = system
            .menu_client
            .add_dish(DishCreate {
                name: name.to_string(),
                price: Price::from_cents(cents),
                description: Some(description.to_string()),
                category: Some(category.to_string()),
            })
            .await?;
        dishes.push(dish);
    }

    let mut customers = Vec::new();
    for params in [
        CustomerCreate {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: Some("555-1234".to_string()),
            address: Some("123 Main St".to_string()),
        },
        CustomerCreate {
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            address: None,
        },
    ] {
        customers.push(system.customer_client.create_customer(params).await?);
    }

    let first_order = system
        .order_client
        .create_order(
            customers[0].id,
            &[dishes[2].id(), dishes[3].id(), dishes[6].id()],
            OrderType::Regular,
        )
        .await?;

    info!(
        menu_items = dishes.len(),
        customers = customers.len(),
        orders = 1,
        "Sample data loaded"
    );

    Ok(SampleData {
        dishes,
        customers,
        orders: vec![first_order],
    })
}
