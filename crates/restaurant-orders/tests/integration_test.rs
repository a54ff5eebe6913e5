use resource_actor::ActorClient;
use restaurant_orders::kitchen::TicketKind;
use restaurant_orders::lifecycle::{sample_data, OrderSystem, SystemConfig};
use restaurant_orders::model::{
    create_order, CustomerCreate, CustomerId, Dish, DishCreate, DishId, ModelError, ObserverError,
    OrderId, OrderObserver, OrderStatus, OrderType, Price, SharedObserver,
};
use restaurant_orders::order_actor::OrderError;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Recorder {
    seen: Mutex<Vec<OrderId>>,
}

impl Recorder {
    fn seen(&self) -> Vec<OrderId> {
        self.seen.lock().unwrap().clone()
    }
}

impl OrderObserver for Recorder {
    fn update(&self, order_id: OrderId) -> Result<(), ObserverError> {
        self.seen.lock().unwrap().push(order_id);
        Ok(())
    }
}

#[derive(Debug)]
struct Broken;

impl OrderObserver for Broken {
    fn update(&self, _order_id: OrderId) -> Result<(), ObserverError> {
        Err(ObserverError::Failed("printer jammed".into()))
    }
}

fn dish_params(name: &str, cents: u64, category: Option<&str>) -> DishCreate {
    DishCreate {
        name: name.to_string(),
        price: Price::from_cents(cents),
        description: None,
        category: category.map(str::to_string),
    }
}

async fn customer(system: &OrderSystem) -> CustomerId {
    system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
            address: None,
        })
        .await
        .expect("Failed to create customer")
        .id
}

/// Full end-to-end run with all real actors and the kitchen.
#[tokio::test]
async fn test_full_order_system_integration() {
    let system = OrderSystem::new(SystemConfig::default());

    let pizza = system
        .menu_client
        .add_dish(dish_params("Pizza", 1299, Some("Main Course")))
        .await
        .expect("Failed to add pizza");
    let salad = system
        .menu_client
        .add_dish(dish_params("Salad", 899, None))
        .await
        .expect("Failed to add salad");
    let customer_id = customer(&system).await;

    let order = system
        .order_client
        .create_order(customer_id, &[pizza.id(), salad.id()], OrderType::Regular)
        .await
        .expect("Failed to create order");
    let order_id = order.id();
    assert_eq!(order.status(), OrderStatus::Created);
    assert_eq!(order.customer_id(), customer_id);
    assert_eq!(order.observer_count(), 1);
    assert_eq!(
        system.order_client.calculate_order_total(order_id).await.unwrap(),
        Some(Price::from_cents(2198))
    );

    assert!(system
        .order_client
        .remove_dish_from_order(order_id, pizza.id())
        .await
        .unwrap());
    let stored = system.order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(stored.dishes(), &[salad.clone()]);
    assert_eq!(stored.calculate_total(), Ok(Price::from_cents(899)));
    assert!(stored.updated_at() > order.updated_at());

    for status in [OrderStatus::Processing, OrderStatus::Ready] {
        assert!(system
            .order_client
            .update_order_status(order_id, status)
            .await
            .unwrap());
    }
    system.kitchen.notify_order_ready(order_id).unwrap();
    assert!(system
        .order_client
        .update_order_status(order_id, OrderStatus::Delivered)
        .await
        .unwrap());

    let delivered = system.order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(delivered.status(), OrderStatus::Delivered);

    let tickets = system.shutdown().await.expect("Shutdown failed");
    let ready: Vec<_> = tickets
        .iter()
        .filter(|t| t.kind == TicketKind::ReadyForDelivery)
        .collect();
    assert_eq!(ready.len(), 1);
    assert_eq!(ready[0].order_id, order_id);
    assert_eq!(ready[0].dish_count, 1);
}

#[tokio::test]
async fn test_each_order_gets_one_kitchen_ticket() {
    let system = OrderSystem::new(SystemConfig::default());
    let soup = system
        .menu_client
        .add_dish(dish_params("Soup", 650, Some("Appetizer")))
        .await
        .unwrap();
    let customer_id = customer(&system).await;

    let mut order_ids = Vec::new();
    for order_type in [OrderType::Regular, OrderType::Bulk, OrderType::Express] {
        let order = system
            .order_client
            .create_order(customer_id, &[soup.id()], order_type)
            .await
            .unwrap();
        assert_eq!(order.order_type(), order_type);
        order_ids.push(order.id());
    }

    let tickets = system.shutdown().await.unwrap();
    let announced: Vec<OrderId> = tickets
        .iter()
        .filter(|t| t.kind == TicketKind::NewOrder)
        .map(|t| t.order_id)
        .collect();
    assert_eq!(announced, order_ids);
    assert!(tickets.iter().all(|t| t.total == Some(Price::from_cents(650))));
}

#[tokio::test]
async fn test_concurrent_add_dish_loses_no_updates() {
    let system = OrderSystem::new(SystemConfig::default());
    let soda = system
        .menu_client
        .add_dish(dish_params("Soda", 249, Some("Beverage")))
        .await
        .unwrap();
    let customer_id = customer(&system).await;
    let order = system
        .order_client
        .create_order(customer_id, &[], OrderType::Bulk)
        .await
        .unwrap();

    let mut tasks = Vec::new();
    for _ in 0..50 {
        let client = system.order_client.clone();
        let order_id = order.id();
        let dish_id = soda.id();
        tasks.push(tokio::spawn(async move {
            client.add_dish_to_order(order_id, dish_id).await
        }));
    }
    for task in tasks {
        assert!(task.await.unwrap().unwrap());
    }

    let stored = system.order_client.get(order.id()).await.unwrap().unwrap();
    assert_eq!(stored.dishes().len(), 50);
    assert_eq!(stored.calculate_total(), Ok(Price::from_cents(50 * 249)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failing_observer_does_not_block_healthy_one() {
    let system = OrderSystem::new(SystemConfig::default());
    let customer_id = customer(&system).await;
    let order = system
        .order_client
        .create_order(customer_id, &[], OrderType::Regular)
        .await
        .unwrap();

    let recorder = Arc::new(Recorder::default());
    let broken: SharedObserver = Arc::new(Broken);
    assert!(system
        .order_client
        .attach_observer(order.id(), broken)
        .await
        .unwrap());
    assert!(system
        .order_client
        .attach_observer(order.id(), recorder.clone())
        .await
        .unwrap());

    assert!(system
        .order_client
        .update_order_status(order.id(), OrderStatus::Processing)
        .await
        .unwrap());

    assert_eq!(recorder.seen(), vec![order.id()]);
    let stored = system.order_client.get(order.id()).await.unwrap().unwrap();
    assert_eq!(stored.status(), OrderStatus::Processing);
    assert_eq!(stored.observer_count(), 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_detached_observer_hears_nothing_more() {
    let system = OrderSystem::new(SystemConfig::default());
    let customer_id = customer(&system).await;
    let order = system
        .order_client
        .create_order(customer_id, &[], OrderType::Regular)
        .await
        .unwrap();

    let first = Arc::new(Recorder::default());
    let second = Arc::new(Recorder::default());
    let first_handle: SharedObserver = first.clone();
    for observer in [first_handle.clone(), second.clone() as SharedObserver] {
        system
            .order_client
            .attach_observer(order.id(), observer)
            .await
            .unwrap();
    }

    system.order_client.notify_observers(order.id()).await.unwrap();
    system
        .order_client
        .detach_observer(order.id(), first_handle)
        .await
        .unwrap();
    system.order_client.notify_observers(order.id()).await.unwrap();

    assert_eq!(first.seen().len(), 1);
    assert_eq!(second.seen().len(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dish_changes_refused_once_processing() {
    let system = OrderSystem::new(SystemConfig::default());
    let pizza = system
        .menu_client
        .add_dish(dish_params("Pizza", 1299, None))
        .await
        .unwrap();
    let customer_id = customer(&system).await;
    let order = system
        .order_client
        .create_order(customer_id, &[pizza.id()], OrderType::Express)
        .await
        .unwrap();

    system
        .order_client
        .update_order_status(order.id(), OrderStatus::Processing)
        .await
        .unwrap();

    assert!(!system
        .order_client
        .add_dish_to_order(order.id(), pizza.id())
        .await
        .unwrap());
    assert!(!system
        .order_client
        .remove_dish_from_order(order.id(), pizza.id())
        .await
        .unwrap());
    let stored = system.order_client.get(order.id()).await.unwrap().unwrap();
    assert_eq!(stored.dishes().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_orders_keep_their_dishes_after_menu_changes() {
    let system = OrderSystem::new(SystemConfig::default());
    let pizza = system
        .menu_client
        .add_dish(dish_params("Pizza", 1299, None))
        .await
        .unwrap();
    let customer_id = customer(&system).await;
    let order = system
        .order_client
        .create_order(customer_id, &[pizza.id(), DishId::new()], OrderType::Regular)
        .await
        .unwrap();
    assert_eq!(order.dishes().len(), 1);

    assert!(system.menu_client.remove_dish(pizza.id()).await.unwrap());
    assert!(system.menu_client.all_dishes().await.unwrap().is_empty());

    let stored = system.order_client.get(order.id()).await.unwrap().unwrap();
    assert_eq!(stored.dishes(), &[pizza.clone()]);
    assert!(!system
        .order_client
        .add_dish_to_order(order.id(), pizza.id())
        .await
        .unwrap());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_order_answers() {
    let system = OrderSystem::new(SystemConfig::default());
    let missing = OrderId::new();

    assert!(system.order_client.get(missing).await.unwrap().is_none());
    assert!(!system
        .order_client
        .update_order_status(missing, OrderStatus::Ready)
        .await
        .unwrap());
    assert!(!system.order_client.notify_observers(missing).await.unwrap());
    assert_eq!(
        system.order_client.calculate_order_total(missing).await.unwrap(),
        None
    );
    assert!(!system.order_client.delete_order(missing).await.unwrap());
    assert!(matches!(
        system.order_client.delete(missing).await,
        Err(OrderError::NotFound(_))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_put_order_stores_factory_built_order() {
    let system = OrderSystem::new(SystemConfig::default());
    let dishes = vec![Dish::new("Tray", Price::from_cents(5000))];
    let order = create_order(OrderType::Bulk, CustomerId::new(), &dishes);

    assert!(system.order_client.put_order(order.clone()).await.unwrap());

    let listed = system.order_client.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), order.id());
    assert_eq!(listed[0].observer_count(), 0);
    assert_eq!(listed[0].order_type(), OrderType::Bulk);

    assert!(system.order_client.delete_order(order.id()).await.unwrap());
    assert!(!system.order_client.delete_order(order.id()).await.unwrap());
    assert!(system.order_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stale_snapshot_cannot_overwrite_dish_added_since() {
    let system = OrderSystem::new(SystemConfig::default());
    let pizza = system
        .menu_client
        .add_dish(dish_params("Pizza", 1299, None))
        .await
        .unwrap();
    let salad = system
        .menu_client
        .add_dish(dish_params("Salad", 899, None))
        .await
        .unwrap();
    let order = system
        .order_client
        .create_order(CustomerId::new(), &[pizza.id()], OrderType::Regular)
        .await
        .unwrap();

    let mut snapshot = system.order_client.get(order.id()).await.unwrap().unwrap();
    assert!(system
        .order_client
        .add_dish_to_order(order.id(), salad.id())
        .await
        .unwrap());
    snapshot.update_status(OrderStatus::Processing);
    assert!(!system.order_client.put_order(snapshot).await.unwrap());

    let stored = system.order_client.get(order.id()).await.unwrap().unwrap();
    assert_eq!(stored.dishes(), &[pizza, salad]);
    assert_eq!(stored.status(), OrderStatus::Created);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_overflowing_total_leaves_order_actor_running() {
    let system = OrderSystem::new(SystemConfig::default());
    let huge = Dish::new("Gold leaf", Price::from_cents(u64::MAX));
    let order = create_order(OrderType::Regular, CustomerId::new(), &[huge.clone(), huge]);
    assert!(system.order_client.put_order(order.clone()).await.unwrap());

    assert_eq!(
        system.order_client.calculate_order_total(order.id()).await,
        Err(OrderError::Model(ModelError::PriceOverflow))
    );

    let stored = system.order_client.get(order.id()).await.unwrap().unwrap();
    assert_eq!(stored.dishes().len(), 2);
    assert!(system
        .order_client
        .update_order_status(order.id(), OrderStatus::Cancelled)
        .await
        .unwrap());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_menu_categories() {
    let system = OrderSystem::new(SystemConfig::default());
    for (name, cents, category) in [
        ("Garlic Bread", 599, "Appetizer"),
        ("Bruschetta", 799, "Appetizer"),
        ("Pizza", 1299, "Main Course"),
    ] {
        system
            .menu_client
            .add_dish(dish_params(name, cents, Some(category)))
            .await
            .unwrap();
    }

    let appetizers = system.menu_client.dishes_by_category("Appetizer").await.unwrap();
    let names: Vec<&str> = appetizers.iter().map(Dish::name).collect();
    assert_eq!(names, ["Garlic Bread", "Bruschetta"]);
    assert_eq!(
        system.menu_client.dishes_by_category("Main Course").await.unwrap().len(),
        1
    );
    assert!(system
        .menu_client
        .dishes_by_category("Dessert")
        .await
        .unwrap()
        .is_empty());
    assert_eq!(system.menu_client.menu().await.unwrap().len(), 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_order_type_is_rejected() {
    assert_eq!(
        "catering".parse::<OrderType>(),
        Err(ModelError::InvalidOrderType("catering".to_string()))
    );
    assert_eq!("bulk".parse::<OrderType>(), Ok(OrderType::Bulk));
}

#[tokio::test]
async fn test_sample_data_populates_system() {
    let system = OrderSystem::new(SystemConfig::default());

    let data = sample_data::populate(&system).await.unwrap();
    assert_eq!(system.menu_client.all_dishes().await.unwrap().len(), data.dishes.len());
    assert_eq!(system.customer_client.list().await.unwrap().len(), 2);
    assert_eq!(
        system.menu_client.dishes_by_category("Appetizer").await.unwrap().len(),
        2
    );

    let order_id = data.orders[0].id();
    assert_eq!(
        system.order_client.calculate_order_total(order_id).await.unwrap(),
        Some(Price::from_cents(1299 + 899 + 249))
    );

    let tickets = system.shutdown().await.unwrap();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].order_id, order_id);
}
