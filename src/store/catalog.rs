use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Category, NewReview, Product, ProductId, Review, Size};
use crate::store::wishlist::Wishlist;

/// Distinct filter options present in the catalog, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct Facets {
    pub categories: Vec<Category>,
    pub sizes: Vec<Size>,
    pub colors: Vec<String>,
}

/// The canonical product list. Products are only ever changed by appending reviews.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Prepends a review to product `id` and bumps its review count.
    ///
    /// The new review id is the product's current review count plus one. The
    /// aggregate `rating` is left as it was. Returns `None` when no product has `id`.
    pub fn submit_review(&mut self, id: ProductId, review: NewReview, date: NaiveDate) -> Option<Review> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        let review = review.into_review(product.review_count + 1, date);
        product.reviews.insert(0, review.clone());
        product.review_count += 1;
        Some(review)
    }

    pub fn facets(&self) -> Facets {
        let mut facets = Facets::default();
        for product in &self.products {
            if !facets.categories.contains(&product.category) {
                facets.categories.push(product.category);
            }
            for size in &product.sizes {
                if !facets.sizes.contains(size) {
                    facets.sizes.push(*size);
                }
            }
            for color in &product.colors {
                if !facets.colors.contains(color) {
                    facets.colors.push(color.clone());
                }
            }
        }
        facets
    }

    /// Catalog products whose id is wishlisted, in catalog order.
    pub fn wishlisted(&self, wishlist: &Wishlist) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| wishlist.contains(p.id))
            .cloned()
            .collect()
    }
}
