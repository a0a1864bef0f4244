use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{AddToCartRequest, CartMutation, CartSummary, LineQuery, UpdateQuantityRequest},
        filters::{SetMaxPriceRequest, SetSortRequest},
        products::{ProductDetail, ProductList, SearchQuery},
        reviews::ReviewRequest,
        selection::{OpenModalRequest, SelectionView},
        wishlist::{WishlistToggle, WishlistView},
    },
    models::{
        CartLine, Category, FilterCriteria, LineKey, Modal, PriceRange, Product, Review, Size,
        SortMode,
    },
    response::{ApiResponse, Meta},
    routes::{cart, filters, health, products, selection, wishlist},
    seed::SizeGuideRow,
    store::{Facets, QuantityChange},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::search_products,
        products::facets,
        products::size_guide,
        products::submit_review,
        filters::get_filters,
        filters::replace_filters,
        filters::clear_filters,
        filters::toggle_category,
        filters::toggle_size,
        filters::toggle_color,
        filters::set_sort,
        filters::set_max_price,
        wishlist::list_wishlist,
        wishlist::toggle_wishlist,
        cart::cart_summary,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        selection::get_selection,
        selection::open_modal,
        selection::close_modal
    ),
    components(
        schemas(
            Product,
            Review,
            Category,
            Size,
            SortMode,
            PriceRange,
            FilterCriteria,
            CartLine,
            LineKey,
            Modal,
            Facets,
            QuantityChange,
            SizeGuideRow,
            ProductList,
            ProductDetail,
            SearchQuery,
            ReviewRequest,
            SetSortRequest,
            SetMaxPriceRequest,
            AddToCartRequest,
            UpdateQuantityRequest,
            LineQuery,
            CartSummary,
            CartMutation,
            WishlistView,
            WishlistToggle,
            OpenModalRequest,
            SelectionView,
            Meta,
            ApiResponse<ProductList>,
            ApiResponse<ProductDetail>,
            ApiResponse<FilterCriteria>,
            ApiResponse<CartSummary>,
            ApiResponse<SelectionView>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog browsing endpoints"),
        (name = "Reviews", description = "Review submission"),
        (name = "Filters", description = "Filter and sort criteria"),
        (name = "Wishlist", description = "Wishlist endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Selection", description = "Open modal and focused product"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
