pub mod cart;
pub mod catalog;
pub mod filter;
pub mod selection;
pub mod storefront;
pub mod wishlist;

pub use cart::{Cart, QuantityChange};
pub use catalog::{Catalog, Facets};
pub use selection::Selection;
pub use storefront::Storefront;
pub use wishlist::Wishlist;
