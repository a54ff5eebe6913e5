use resource_actor::tracing::setup_tracing;
use resource_actor::ActorClient;
use restaurant_orders::lifecycle::{sample_data, OrderSystem, SystemConfig, SystemError};
use restaurant_orders::model::{CustomerCreate, DishCreate, OrderStatus, OrderType, Price};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    setup_tracing();

    let config = SystemConfig::from_env()?;
    info!(?config, "Starting restaurant order system");
    let system = OrderSystem::new(config.clone());

    if config.load_sample_data {
        let data = sample_data::populate(&system).await?;
        info!(
            menu_items = data.dishes.len(),
            customers = data.customers.len(),
            orders = data.orders.len(),
            "Sample data ready"
        );
    }

    let span = tracing::info_span!("menu_setup");
    let (pizza, salad) = async {
        let pizza = system
            .menu_client
            .add_dish(DishCreate {
                name: "Pizza".to_string(),
                price: Price::from_cents(1299),
                description: Some("Delicious cheese pizza".to_string()),
                category: Some("Main Course".to_string()),
            })
            .await?;
        let salad = system
            .menu_client
            .add_dish(DishCreate {
                name: "Salad".to_string(),
                price: Price::from_cents(899),
                description: None,
                category: Some("Appetizer".to_string()),
            })
            .await?;
        Ok::<_, SystemError>((pizza, salad))
    }
    .instrument(span)
    .await?;

    let customer = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
            address: None,
        })
        .await?;
    info!(customer_id = %customer.id, "Customer created");

    let span = tracing::info_span!("order_processing");
    async {
        let order = system
            .order_client
            .create_order(customer.id, &[pizza.id(), salad.id()], OrderType::Regular)
            .await?;
        let order_id = order.id();

        system.order_client.remove_dish_from_order(order_id, pizza.id()).await?;
        let total = system.order_client.calculate_order_total(order_id).await?;
        info!(%order_id, total = ?total.map(|t| t.to_string()), "Pizza removed");

        for status in [OrderStatus::Processing, OrderStatus::Ready] {
            system.order_client.update_order_status(order_id, status).await?;
        }
        if let Err(e) = system.kitchen.notify_order_ready(order_id) {
            warn!(error = %e, "Kitchen unavailable");
        }
        system
            .order_client
            .update_order_status(order_id, OrderStatus::Delivered)
            .await?;

        if let Some(order) = system.order_client.get(order_id).await? {
            info!(%order_id, status = %order.status(), dishes = order.dishes().len(), "Order finished");
        }
        Ok::<_, SystemError>(())
    }
    .instrument(span)
    .await?;

    let tickets = system.shutdown().await?;
    info!(tickets = tickets.len(), "Application completed successfully");
    Ok(())
}
