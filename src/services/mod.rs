pub mod cart_service;
pub mod filter_service;
pub mod product_service;
pub mod review_service;
pub mod selection_service;
pub mod wishlist_service;
