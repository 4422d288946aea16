//! Orders client tests against a mock order service.

#![allow(clippy::unwrap_used)]

use tamarind_checkout::{OrderApiError, OrderPayload, OrdersClient};
use tamarind_core::Email;
use tamarind_integration_tests::{init_test_logging, pen_cart};
use url::Url;

fn payload() -> OrderPayload {
    let (items, _) = pen_cart();
    OrderPayload::new(
        "A".to_string(),
        Email::parse("a@b.com").unwrap(),
        &items,
    )
}

#[tokio::test]
async fn any_2xx_status_is_success() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/orders/place")
        .with_status(204)
        .create_async()
        .await;

    let client = OrdersClient::new(Url::parse(&server.url()).unwrap());
    client.place_order(&payload()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn response_body_is_ignored_on_success() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/orders/place")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("this is not json and nobody cares")
        .create_async()
        .await;

    let client = OrdersClient::new(Url::parse(&server.url()).unwrap());
    client.place_order(&payload()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn non_2xx_status_maps_to_status_error() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/orders/place")
        .with_status(404)
        .with_body("no such endpoint")
        .create_async()
        .await;

    let client = OrdersClient::new(Url::parse(&server.url()).unwrap());
    let err = client.place_order(&payload()).await.unwrap_err();
    assert!(matches!(
        err,
        OrderApiError::Status(status) if status.as_u16() == 404
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn connection_refused_maps_to_http_error() {
    init_test_logging();
    let client = OrdersClient::new(Url::parse("http://127.0.0.1:9").unwrap());
    let err = client.place_order(&payload()).await.unwrap_err();
    assert!(matches!(err, OrderApiError::Http(_)));
}

#[tokio::test]
async fn requests_carry_no_authorization_header() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/orders/place")
        .match_header("authorization", mockito::Matcher::Missing)
        .match_header("content-type", "application/json")
        .with_status(200)
        .create_async()
        .await;

    let client = OrdersClient::new(Url::parse(&server.url()).unwrap());
    client.place_order(&payload()).await.unwrap();
    mock.assert_async().await;
}
