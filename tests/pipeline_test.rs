use restaurant_console::menu::{Menu, MenuEntry};
use restaurant_console::order::{compute_signature, OrderAccumulator, OrderError, OrderItem};
use restaurant_console::pipeline::{MemorySink, OrderPipeline, Selection};
use rust_decimal::Decimal;
use std::sync::Arc;

fn sorted_metadata(items: &[OrderItem]) -> Vec<String> {
    let mut metadata: Vec<String> = items.iter().map(OrderItem::metadata).collect();
    metadata.sort();
    metadata
}

fn entry(menu: &Menu, key: &str) -> MenuEntry {
    menu.lookup(key).cloned().expect("key on default menu")
}

/// Many concurrent producers: nothing lost, nothing duplicated.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_producers_deliver_every_item_once() {
    let menu = Menu::default();
    let order = Arc::new(OrderAccumulator::new("1"));
    let sink = Arc::new(MemorySink::new());
    let mut pipeline = OrderPipeline::start(Arc::clone(&order), sink.clone());

    let mut expected = Vec::new();
    for i in 1..=50u32 {
        let selection = if i % 2 == 0 {
            Selection::food(entry(&menu, "burger"), i)
        } else {
            Selection::drink(entry(&menu, "pepsi"), i, i % 3)
        };
        expected.push(selection.clone().classify().unwrap());
        pipeline.submit(selection);
    }
    assert_eq!(pipeline.submitted(), 50);

    let report = pipeline.finish().await.expect("pipeline drains");
    assert!(report.is_clean());
    assert_eq!(report.submitted, 50);
    assert_eq!(report.received, 50);

    let snapshot = order.snapshot();
    assert_eq!(snapshot.items.len(), 50);
    assert_eq!(sorted_metadata(&snapshot.items), sorted_metadata(&expected));

    let expected_total: Decimal = expected.iter().map(OrderItem::total).sum();
    assert_eq!(snapshot.total, expected_total);
    assert_eq!(compute_signature(&snapshot.items), snapshot.signature);

    // The sink saw the same items, in the same arrival order.
    let received = sink.received_items();
    let arrival: Vec<String> = snapshot.items.iter().map(OrderItem::metadata).collect();
    assert_eq!(received, arrival);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_burger_and_pepsi_total() {
    let menu = Menu::default();
    let order = Arc::new(OrderAccumulator::new("1"));
    let mut pipeline = OrderPipeline::start(Arc::clone(&order), Arc::new(MemorySink::new()));

    pipeline.submit(Selection::food(entry(&menu, "burger"), 2));
    pipeline.submit(Selection::drink(entry(&menu, "pepsi"), 1, 0));
    pipeline.finish().await.unwrap();

    assert_eq!(order.total(), Decimal::new(1497, 2));
    assert_eq!(format!("{:.2}", order.total()), "14.97");

    // Arrival order is not fixed, so accept either signature.
    let burger = "Name: Burger, Price: 5.99, Quantity: 2";
    let pepsi = "Name: Pepsi, Price: 2.99, Quantity: 1, Refills: 0";
    let items = order.items();
    let signature = order.signature();
    assert_eq!(signature, compute_signature(&items));
    assert!(
        [format!("{burger} | {pepsi}"), format!("{pepsi} | {burger}")]
            .iter()
            .any(|joined| {
                use base64::Engine;
                base64::engine::general_purpose::STANDARD.encode(joined) == signature
            })
    );
}

#[tokio::test]
async fn test_empty_pipeline() {
    let order = Arc::new(OrderAccumulator::new("1"));
    let pipeline = OrderPipeline::start(Arc::clone(&order), Arc::new(MemorySink::new()));

    let report = pipeline.finish().await.unwrap();
    assert_eq!(report.received, 0);
    assert!(report.is_clean());
    assert!(order.is_empty());
    assert_eq!(order.signature(), "");
    assert_eq!(format!("{:.2}", order.total()), "0.00");
}

/// A producer that cannot classify its selection is reported, not fatal.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_faulty_producer_is_reported_and_others_complete() {
    let menu = Menu::default();
    let order = Arc::new(OrderAccumulator::new("1"));
    let sink = Arc::new(MemorySink::new());
    let mut pipeline = OrderPipeline::start(Arc::clone(&order), sink.clone());

    pipeline.submit(Selection::food(entry(&menu, "fries"), 1));
    pipeline.submit(Selection {
        entry: entry(&menu, "pizza"),
        quantity: 1,
        refills: Some(2),
    });
    pipeline.submit(Selection::food(entry(&menu, "pizza"), 0));
    pipeline.submit(Selection::drink(entry(&menu, "iced tea"), 3, 1));

    let report = pipeline.finish().await.unwrap();
    assert_eq!(report.submitted, 4);
    assert_eq!(report.received, 2);
    assert_eq!(report.faults.len(), 2);
    assert!(report
        .faults
        .iter()
        .any(|fault| matches!(fault, OrderError::InvalidItemType(_))));
    assert!(report
        .faults
        .contains(&OrderError::InvalidQuantity { name: "Pizza".into(), quantity: 0 }));

    assert_eq!(order.len(), 2);
    assert_eq!(sink.received_items().len(), 2);
    // 3.99 + 1.99 * 3
    assert_eq!(order.total(), Decimal::new(996, 2));
}
