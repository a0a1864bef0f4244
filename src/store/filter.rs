use std::cmp::Ordering;

use crate::models::{FilterCriteria, Product, SortMode};

/// Narrows and orders `products` by `criteria`.
///
/// Always returns a fresh vector, never a view into the catalog, so callers can
/// hold the result across later catalog mutations. The sort is stable: products
/// that compare equal keep their catalog order.
pub fn apply(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let mut visible: Vec<Product> = products
        .iter()
        .filter(|p| matches(p, criteria))
        .cloned()
        .collect();
    sort_products(&mut visible, criteria.sort);
    visible
}

/// True when `product` passes every filter in `criteria`.
pub fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    (criteria.categories.is_empty() || criteria.categories.contains(&product.category))
        && (criteria.sizes.is_empty() || product.has_any_size(&criteria.sizes))
        && (criteria.colors.is_empty() || product.has_any_color(&criteria.colors))
        && criteria.price_range.contains(product.price)
}

pub fn sort_products(products: &mut [Product], mode: SortMode) {
    match mode {
        SortMode::Newest => products.sort_by(|a, b| b.id.cmp(&a.id)),
        SortMode::PriceAsc => products.sort_by(|a, b| cmp_f64(a.price, b.price)),
        SortMode::PriceDesc => products.sort_by(|a, b| cmp_f64(b.price, a.price)),
        SortMode::Rating => products.sort_by(|a, b| cmp_f64(b.rating, a.rating)),
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Case-insensitive match of `term` against name, category label and description.
///
/// A blank term finds nothing. Surrounding whitespace is part of the term.
/// Results keep catalog order.
pub fn search(products: &[Product], term: &str) -> Vec<Product> {
    if term.trim().is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.category.as_str().to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
