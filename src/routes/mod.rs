use axum::Router;

use crate::state::AppState;

pub mod cart;
pub mod doc;
pub mod filters;
pub mod health;
pub mod products;
pub mod selection;
pub mod wishlist;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/filters", filters::router())
        .nest("/wishlist", wishlist::router())
        .nest("/cart", cart::router())
        .nest("/selection", selection::router())
}
