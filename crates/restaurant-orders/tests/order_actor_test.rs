use resource_actor::mock::MockClient;
use resource_actor::ActorClient;
use restaurant_orders::clients::{MenuClient, OrderClient};
use restaurant_orders::menu_actor::MenuActionResult;
use restaurant_orders::model::{
    CustomerId, Dish, Menu, MenuId, ObserverError, OrderId, OrderObserver, OrderStatus,
    OrderType, Price, SharedObserver,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Counter(AtomicUsize);

impl OrderObserver for Counter {
    fn update(&self, _order_id: OrderId) -> Result<(), ObserverError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Real Order actor with a mocked Menu actor.
///
/// Exercises the order actor's own logic (factory construction, default observers,
/// status-guarded dish changes) without a real menu behind it.
#[tokio::test]
async fn test_order_actor_with_mocked_menu() {
    let menu_id = MenuId::new();
    let mut menu_mock = MockClient::<Menu>::new();
    let pizza = Dish::new("Pizza", Price::from_cents(1299));
    let salad = Dish::new("Salad", Price::from_cents(899));

    menu_mock
        .expect_action(menu_id)
        .return_ok(MenuActionResult::ResolveDishes(vec![pizza.clone()]));
    menu_mock
        .expect_action(menu_id)
        .return_ok(MenuActionResult::GetDish(Some(salad.clone())));

    let menu_client = MenuClient::new(menu_mock.client(), menu_id);
    let (order_actor, generic_client) = restaurant_orders::order_actor::new(8);
    let order_client = OrderClient::new(generic_client, menu_client);

    let counter = Arc::new(Counter::default());
    let default_observers: Vec<SharedObserver> = vec![counter.clone()];
    let actor_handle = tokio::spawn(order_actor.run(default_observers));

    let customer_id = CustomerId::new();
    let order = order_client
        .create_order(customer_id, &[pizza.id()], OrderType::Express)
        .await
        .expect("Order creation failed");
    assert_eq!(order.dishes(), &[pizza.clone()]);
    assert_eq!(order.observer_count(), 1);
    assert_eq!(counter.0.load(Ordering::SeqCst), 1);

    assert!(order_client
        .add_dish_to_order(order.id(), salad.id())
        .await
        .unwrap());
    assert_eq!(
        order_client.calculate_order_total(order.id()).await.unwrap(),
        Some(Price::from_cents(2198))
    );

    assert!(order_client
        .update_order_status(order.id(), OrderStatus::Ready)
        .await
        .unwrap());
    assert_eq!(counter.0.load(Ordering::SeqCst), 2);

    assert!(!order_client
        .remove_dish_from_order(order.id(), pizza.id())
        .await
        .unwrap());

    let stored = order_client.get(order.id()).await.unwrap().unwrap();
    assert_eq!(stored.status(), OrderStatus::Ready);
    assert_eq!(stored.dishes().len(), 2);
    assert_eq!(stored.customer_id(), customer_id);

    menu_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_order_actor_lists_in_creation_order() {
    let menu_id = MenuId::new();
    let mut menu_mock = MockClient::<Menu>::new();
    for _ in 0..3 {
        menu_mock
            .expect_action(menu_id)
            .return_ok(MenuActionResult::ResolveDishes(Vec::new()));
    }

    let (order_actor, generic_client) = restaurant_orders::order_actor::new(8);
    let order_client = OrderClient::new(generic_client, MenuClient::new(menu_mock.client(), menu_id));
    let actor_handle = tokio::spawn(order_actor.run(Vec::new()));

    let mut created = Vec::new();
    for _ in 0..3 {
        let order = order_client
            .create_order(CustomerId::new(), &[], OrderType::Regular)
            .await
            .unwrap();
        created.push(order.id());
    }
    order_client.delete(created[1]).await.unwrap();

    let listed: Vec<OrderId> = order_client
        .list()
        .await
        .unwrap()
        .iter()
        .map(|o| o.id())
        .collect();
    assert_eq!(listed, vec![created[0], created[2]]);
    menu_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}
