//! End-to-end checkout flow tests against a mock order service.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use tamarind_checkout::flow::{NAVIGATE_DELAY, ROOT_PATH};
use tamarind_checkout::toast::{TOAST_AUTO_HIDE, ToastSeverity};
use tamarind_checkout::{CartStore, CheckoutFlow, FlowPhase, Navigator, OrdersClient};
use tamarind_integration_tests::{
    RecordingNavigator, RecordingStore, init_test_logging, pen_cart, stationery_cart,
};
use url::Url;

fn flow_against(
    server_url: &str,
    store: &Arc<RecordingStore>,
    navigator: &Arc<RecordingNavigator>,
) -> CheckoutFlow {
    let (items, total) = pen_cart();
    let client = OrdersClient::new(Url::parse(server_url).unwrap());
    let mut flow = CheckoutFlow::new(
        client,
        Arc::clone(store) as Arc<dyn CartStore>,
        Arc::clone(navigator) as Arc<dyn Navigator>,
        items,
        total,
    );
    flow.open();
    flow
}

#[tokio::test(start_paused = true)]
async fn successful_submit_places_order_clears_cart_and_navigates_once() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/orders/place")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "customerName": "A",
            "email": "a@b.com",
            "items": [{ "productId": 1, "quantity": 2 }],
        })))
        .with_status(200)
        .create_async()
        .await;

    let store = Arc::new(RecordingStore::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let mut flow = flow_against(&server.url(), &store, &navigator);

    flow.set_name("A");
    flow.set_email("a@b.com");
    flow.submit().await;

    mock.assert_async().await;
    assert_eq!(flow.phase(), FlowPhase::Succeeded);
    assert!(flow.buttons_enabled());

    let toast = flow.toast().unwrap();
    assert_eq!(toast.message, "Order placed successfully!");
    assert_eq!(toast.severity, ToastSeverity::Success);

    assert_eq!(store.removed_keys(), vec!["cart".to_string()]);

    // Navigation waits out the full delay.
    tokio::time::sleep(NAVIGATE_DELAY - Duration::from_millis(100)).await;
    assert!(navigator.paths().is_empty());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(navigator.paths(), vec![ROOT_PATH.to_string()]);

    // The toast auto-hides on its own clock; navigation stays at one.
    tokio::time::sleep(TOAST_AUTO_HIDE).await;
    assert!(flow.toast().is_none());
    assert_eq!(navigator.paths().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn rejected_submit_shows_failure_and_leaves_cart_alone() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/orders/place")
        .with_status(500)
        .create_async()
        .await;

    let store = Arc::new(RecordingStore::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let mut flow = flow_against(&server.url(), &store, &navigator);

    flow.set_name("A");
    flow.set_email("a@b.com");
    flow.submit().await;

    mock.assert_async().await;
    assert_eq!(flow.phase(), FlowPhase::Failed);
    assert!(flow.buttons_enabled());

    let toast = flow.toast().unwrap();
    assert_eq!(toast.message, "Failed to place order. Please try again.");
    assert_eq!(toast.severity, ToastSeverity::Danger);

    assert!(store.removed_keys().is_empty());
    tokio::time::sleep(NAVIGATE_DELAY + Duration::from_millis(500)).await;
    assert!(navigator.paths().is_empty());
}

#[tokio::test]
async fn connection_failure_is_just_another_failed_submit() {
    init_test_logging();
    let store = Arc::new(RecordingStore::default());
    let navigator = Arc::new(RecordingNavigator::default());
    // Nothing listens here; the connection is refused outright.
    let mut flow = flow_against("http://127.0.0.1:9", &store, &navigator);

    flow.set_name("A");
    flow.set_email("a@b.com");
    flow.submit().await;

    assert_eq!(flow.phase(), FlowPhase::Failed);
    assert_eq!(
        flow.toast().unwrap().severity,
        ToastSeverity::Danger
    );
    assert!(store.removed_keys().is_empty());
    assert!(navigator.paths().is_empty());
}

#[tokio::test]
async fn invalid_form_never_reaches_the_network() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/orders/place")
        .expect(0)
        .create_async()
        .await;

    let store = Arc::new(RecordingStore::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let mut flow = flow_against(&server.url(), &store, &navigator);

    flow.set_name("A");
    flow.set_email("not-an-email");
    flow.submit().await;

    mock.assert_async().await;
    assert_eq!(flow.phase(), FlowPhase::Idle);
    let errors = flow.form().visible_errors();
    assert!(errors.email.is_some());
    assert!(store.removed_keys().is_empty());
}

#[tokio::test]
async fn payload_snapshots_the_cart_in_order() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/orders/place")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "customerName": "Asha",
            "email": "asha@example.com",
            "items": [
                { "productId": 1, "quantity": 2 },
                { "productId": 5, "quantity": 1 },
            ],
        })))
        .with_status(201)
        .create_async()
        .await;

    let (items, total) = stationery_cart();
    let store = Arc::new(RecordingStore::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let client = OrdersClient::new(Url::parse(&server.url()).unwrap());
    let mut flow = CheckoutFlow::new(
        client,
        Arc::clone(&store) as Arc<dyn CartStore>,
        Arc::clone(&navigator) as Arc<dyn Navigator>,
        items,
        total,
    );
    flow.open();

    flow.set_name("Asha");
    flow.set_email("asha@example.com");
    flow.submit().await;

    mock.assert_async().await;
    assert_eq!(flow.phase(), FlowPhase::Succeeded);
}

#[tokio::test(start_paused = true)]
async fn resubmission_after_failure_recovers() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    let failure = server
        .mock("POST", "/api/orders/place")
        .with_status(502)
        .expect(1)
        .create_async()
        .await;

    let store = Arc::new(RecordingStore::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let mut flow = flow_against(&server.url(), &store, &navigator);

    flow.set_name("A");
    flow.set_email("a@b.com");
    flow.submit().await;
    assert_eq!(flow.phase(), FlowPhase::Failed);
    failure.assert_async().await;

    let success = server
        .mock("POST", "/api/orders/place")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    flow.submit().await;
    success.assert_async().await;
    assert_eq!(flow.phase(), FlowPhase::Succeeded);
    assert_eq!(store.removed_keys(), vec!["cart".to_string()]);

    tokio::time::sleep(NAVIGATE_DELAY + Duration::from_millis(100)).await;
    assert_eq!(navigator.paths(), vec![ROOT_PATH.to_string()]);
}
