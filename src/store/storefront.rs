use chrono::{NaiveDate, Utc};

use crate::models::{
    Category, CriteriaError, FilterCriteria, LineKey, Modal, NewReview, Product, ProductId, Review,
    Size, SortMode,
};
use crate::store::{
    cart::{Cart, QuantityChange},
    catalog::{Catalog, Facets},
    filter,
    selection::Selection,
    wishlist::Wishlist,
};

/// All shopper-session state, mutated only through the methods below.
///
/// `visible` is the filtered and sorted view of the catalog. It is rebuilt after
/// every catalog or criteria change, so readers never see a stale derivation.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    criteria: FilterCriteria,
    visible: Vec<Product>,
    wishlist: Wishlist,
    cart: Cart,
    selection: Selection,
}

impl Storefront {
    pub fn new(catalog: Catalog) -> Self {
        let criteria = FilterCriteria::default();
        let visible = filter::apply(catalog.products(), &criteria);
        Self {
            catalog,
            criteria,
            visible,
            wishlist: Wishlist::new(),
            cart: Cart::new(),
            selection: Selection::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current filtered and sorted product list.
    pub fn visible_products(&self) -> &[Product] {
        &self.visible
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    pub fn facets(&self) -> Facets {
        self.catalog.facets()
    }

    pub fn search(&self, term: &str) -> Vec<Product> {
        filter::search(self.catalog.products(), term)
    }

    fn refresh(&mut self) {
        self.visible = filter::apply(self.catalog.products(), &self.criteria);
        tracing::debug!(
            visible = self.visible.len(),
            catalog = self.catalog.len(),
            sort = self.criteria.sort.as_str(),
            "derived product list refreshed"
        );
    }

    // criteria

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh();
    }

    pub fn clear_criteria(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    pub fn toggle_category(&mut self, category: Category) {
        self.criteria.toggle_category(category);
        self.refresh();
    }

    pub fn toggle_size(&mut self, size: Size) {
        self.criteria.toggle_size(size);
        self.refresh();
    }

    pub fn toggle_color(&mut self, color: &str) {
        self.criteria.toggle_color(color);
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.criteria.sort = sort;
        self.refresh();
    }

    pub fn set_max_price(&mut self, max: f64) -> Result<(), CriteriaError> {
        self.criteria.set_max_price(max)?;
        self.refresh();
        Ok(())
    }

    pub fn set_price_range(&mut self, min: f64, max: f64) -> Result<(), CriteriaError> {
        self.criteria.set_price_range(min, max)?;
        self.refresh();
        Ok(())
    }

    // wishlist

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn is_wishlisted(&self, product_id: ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    /// Returns whether `product_id` is wishlisted after the toggle.
    pub fn toggle_wishlist(&mut self, product_id: ProductId) -> bool {
        let added = self.wishlist.toggle(product_id);
        tracing::debug!(product_id, added, size = self.wishlist.len(), "wishlist toggled");
        added
    }

    pub fn wishlist_items(&self) -> Vec<Product> {
        self.catalog.wishlisted(&self.wishlist)
    }

    // cart

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds one unit of the catalog product `product_id`. Unknown ids are ignored.
    pub fn add_to_cart(&mut self, product_id: ProductId, size: Size, color: &str) -> Option<u32> {
        let product = self.catalog.get(product_id)?;
        let quantity = self.cart.add(product, size, color);
        tracing::debug!(product_id, size = size.as_str(), color, quantity, "cart line added");
        Some(quantity)
    }

    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> QuantityChange {
        let change = self.cart.update_quantity(product_id, quantity);
        tracing::debug!(product_id, quantity, ?change, "cart quantity updated");
        change
    }

    pub fn update_line_quantity(&mut self, key: &LineKey, quantity: u32) -> QuantityChange {
        let change = self.cart.update_line_quantity(key, quantity);
        tracing::debug!(product_id = key.product_id, quantity, ?change, "cart line quantity updated");
        change
    }

    pub fn remove_from_cart(&mut self, key: &LineKey) -> bool {
        let removed = self.cart.remove(key);
        tracing::debug!(product_id = key.product_id, removed, "cart line removed");
        removed
    }

    pub fn remove_product_from_cart(&mut self, product_id: ProductId) -> Option<LineKey> {
        self.cart.remove_product(product_id)
    }

    // reviews

    pub fn submit_review(&mut self, product_id: ProductId, review: NewReview) -> Option<Review> {
        self.submit_review_on(product_id, review, Utc::now().date_naive())
    }

    /// Records `review` dated `date` and closes the open modal.
    ///
    /// The focused product is resolved by id, so a detail view of the reviewed
    /// product shows the new review without further bookkeeping.
    pub fn submit_review_on(
        &mut self,
        product_id: ProductId,
        review: NewReview,
        date: NaiveDate,
    ) -> Option<Review> {
        let stored = self.catalog.submit_review(product_id, review, date);
        match &stored {
            Some(r) => {
                tracing::debug!(product_id, review_id = r.id, rating = r.rating, "review stored");
                self.refresh();
            }
            None => tracing::debug!(product_id, "review for unknown product dropped"),
        }
        self.selection.close();
        stored
    }

    // selection

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selection.product_id().and_then(|id| self.catalog.get(id))
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.selection.open(modal);
    }

    pub fn view_details(&mut self, product_id: ProductId) {
        self.selection.open_for(Modal::ProductDetail, product_id);
    }

    pub fn write_review(&mut self, product_id: ProductId) {
        self.selection.open_for(Modal::WriteReview, product_id);
    }

    pub fn close_modal(&mut self) {
        self.selection.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceRange;

    fn product(id: ProductId, price: f64, category: Category) -> Product {
        Product {
            id,
            name: format!("Item {id}"),
            category,
            price,
            original_price: None,
            image_url: String::new(),
            rating: 4.0,
            review_count: 2,
            sizes: vec![Size::M, Size::L],
            colors: vec!["red".into(), "blue".into()],
            description: String::new(),
            is_new: false,
            reviews: vec![],
        }
    }

    fn storefront() -> Storefront {
        Storefront::new(Catalog::new(vec![
            product(1, 20.0, Category::TShirts),
            product(2, 50.0, Category::Hoodies),
            product(5, 10.0, Category::Accessories),
        ]))
    }

    fn ids(products: &[Product]) -> Vec<ProductId> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn starts_with_full_catalog_newest_first() {
        let store = storefront();
        assert_eq!(ids(store.visible_products()), vec![5, 2, 1]);
        assert_ne!(
            store.visible_products().as_ptr(),
            store.catalog().products().as_ptr()
        );
    }

    #[test]
    fn criteria_changes_recompute_view() {
        let mut store = storefront();
        store.toggle_category(Category::TShirts);
        assert_eq!(ids(store.visible_products()), vec![1]);
        store.toggle_category(Category::Hoodies);
        store.set_sort(SortMode::PriceAsc);
        assert_eq!(ids(store.visible_products()), vec![1, 2]);
        store.set_max_price(30.0).unwrap();
        assert_eq!(ids(store.visible_products()), vec![1]);
        store.clear_criteria();
        assert_eq!(ids(store.visible_products()), vec![5, 2, 1]);
    }

    #[test]
    fn invalid_range_keeps_previous_criteria() {
        let mut store = storefront();
        store.set_price_range(15.0, 60.0).unwrap();
        assert!(store.set_price_range(60.0, 15.0).is_err());
        assert_eq!(store.criteria().price_range, PriceRange::new(15.0, 60.0).unwrap());
        assert_eq!(ids(store.visible_products()), vec![2, 1]);
    }

    #[test]
    fn scenario_add_to_empty_cart() {
        let mut store = storefront();
        assert_eq!(store.add_to_cart(5, Size::L, "blue"), Some(1));
        let lines = store.cart().lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].key(), LineKey::new(5, Size::L, "blue"));
        assert_eq!(lines[0].quantity, 1);
        assert_eq!(store.cart().subtotal(), 10.0);
    }

    #[test]
    fn cart_floor_then_remove_is_noop() {
        let mut store = storefront();
        store.add_to_cart(1, Size::M, "red");
        store.add_to_cart(1, Size::M, "red");
        assert_eq!(store.cart().item_count(), 2);
        assert_eq!(store.update_quantity(1, 0), QuantityChange::Removed);
        assert!(store.cart().is_empty());
        assert!(!store.remove_from_cart(&LineKey::new(1, Size::M, "red")));
    }

    #[test]
    fn add_unknown_product_is_ignored() {
        let mut store = storefront();
        assert_eq!(store.add_to_cart(404, Size::M, "red"), None);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn wishlist_accepts_unknown_ids_but_lists_only_catalog_products() {
        let mut store = storefront();
        assert!(store.toggle_wishlist(2));
        assert!(store.toggle_wishlist(404));
        assert!(store.is_wishlisted(404));
        assert_eq!(ids(&store.wishlist_items()), vec![2]);
        assert!(!store.toggle_wishlist(404));
        assert_eq!(store.wishlist().len(), 1);
    }

    #[test]
    fn review_refreshes_selected_product_and_closes_modal() {
        let mut store = storefront();
        store.view_details(2);
        store.write_review(2);
        assert_eq!(store.selection().modal(), Modal::WriteReview);

        let day = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        let review = NewReview::new("Jo", 5, "Warm and soft").unwrap();
        let stored = store.submit_review_on(2, review, day).unwrap();

        assert_eq!(stored.id, 3);
        assert_eq!(store.selection().modal(), Modal::None);
        let selected = store.selected_product().unwrap();
        assert_eq!(selected.review_count, 3);
        assert_eq!(selected.reviews[0].author, "Jo");
        assert_eq!(selected.rating, 4.0);
        let visible = store.visible_products().iter().find(|p| p.id == 2).unwrap();
        assert_eq!(visible.review_count, 3);
    }

    #[test]
    fn review_of_other_product_leaves_selection() {
        let mut store = storefront();
        store.view_details(1);
        store.open_modal(Modal::WriteReview);
        let review = NewReview::new("Jo", 3, "Ok").unwrap();
        store.submit_review(5, review);
        assert_eq!(store.selection().product_id(), Some(1));
        assert_eq!(store.selected_product().unwrap().review_count, 2);
        assert_eq!(store.selection().modal(), Modal::None);
    }

    #[test]
    fn cart_snapshot_does_not_see_new_reviews() {
        let mut store = storefront();
        store.add_to_cart(2, Size::M, "red");
        let review = NewReview::new("Jo", 4, "Nice").unwrap();
        store.submit_review(2, review);
        assert_eq!(store.cart().lines()[0].product.review_count, 2);
        assert_eq!(store.product(2).unwrap().review_count, 3);
    }
}
