use axum::extract::State;
use storefront_api::{
    routes::health::health_check,
    seed::demo_products,
    state::AppState,
    store::Catalog,
};

#[tokio::test]
async fn health_reports_catalog_size() {
    let state = AppState::new(Catalog::new(demo_products()));
    let response = health_check(State(state)).await;
    assert_eq!(response.0.message, "Storefront up");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
    assert_eq!(data.products, 7);
    assert_eq!(data.cart_lines, 0);
}

#[tokio::test]
async fn health_on_empty_catalog() {
    let state = AppState::new(Catalog::new(Vec::new()));
    let data = health_check(State(state)).await.0.data.expect("health data");
    assert_eq!(data.products, 0);
}
