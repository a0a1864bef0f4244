pub mod cart;
pub mod filters;
pub mod products;
pub mod reviews;
pub mod selection;
pub mod wishlist;
