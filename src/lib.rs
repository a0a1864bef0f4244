//! In-memory storefront state: catalog, filter/sort view, wishlist, cart,
//! reviews and modal navigation, with a JSON HTTP surface for a view layer.

pub mod audit;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;
