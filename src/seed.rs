use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use tokio::fs;

use crate::models::{Category, Product, ProductId, Review, Size};
use crate::store::Catalog;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    #[error("product {id}: {reason}")]
    InvalidProduct { id: ProductId, reason: String },
}

/// Loads the catalog from a JSON array of products at `path`, or the built-in
/// demo catalog when no path is configured.
pub async fn load_catalog(path: Option<&Path>) -> Result<Catalog, SeedError> {
    let products = match path {
        Some(path) => {
            let raw = fs::read_to_string(path).await.map_err(|source| SeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let products = parse_products(&raw).map_err(|source| SeedError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), count = products.len(), "catalog loaded from file");
            products
        }
        None => {
            let products = demo_products();
            tracing::info!(count = products.len(), "using built-in demo catalog");
            products
        }
    };
    validate(&products)?;
    Ok(Catalog::new(products))
}

pub fn parse_products(raw: &str) -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Rejects seed data that would break catalog invariants.
pub fn validate(products: &[Product]) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for p in products {
        if !seen.insert(p.id) {
            return Err(SeedError::DuplicateId(p.id));
        }
        let invalid = |reason: &str| SeedError::InvalidProduct {
            id: p.id,
            reason: reason.to_string(),
        };
        if !p.price.is_finite() || p.price < 0.0 {
            return Err(invalid("price must be a non-negative number"));
        }
        if p.original_price.is_some_and(|o| !o.is_finite() || o < 0.0) {
            return Err(invalid("original price must be a non-negative number"));
        }
        if !(0.0..=5.0).contains(&p.rating) {
            return Err(invalid("rating must be between 0 and 5"));
        }
        if p.reviews.iter().any(|r| !(1..=5).contains(&r.rating)) {
            return Err(invalid("review ratings must be between 1 and 5"));
        }
    }
    Ok(())
}

/// Chest and waist measurements for one size, in inches.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, utoipa::ToSchema)]
pub struct SizeGuideRow {
    pub size: Size,
    pub chest: String,
    pub waist: String,
}

const SIZE_GUIDE: [(Size, &str, &str); 6] = [
    (Size::XS, "34-36\"", "28-30\""),
    (Size::S, "36-38\"", "30-32\""),
    (Size::M, "38-40\"", "32-34\""),
    (Size::L, "40-42\"", "34-36\""),
    (Size::XL, "42-44\"", "36-38\""),
    (Size::XXL, "44-46\"", "38-40\""),
];

pub fn size_guide() -> Vec<SizeGuideRow> {
    SIZE_GUIDE
        .iter()
        .map(|(size, chest, waist)| SizeGuideRow {
            size: *size,
            chest: chest.to_string(),
            waist: waist.to_string(),
        })
        .collect()
}

fn review(id: u32, author: &str, rating: u8, comment: &str, (y, m, d): (i32, u32, u32)) -> Review {
    Review {
        id,
        author: author.to_string(),
        rating,
        comment: comment.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}

fn colors(list: &[&str]) -> Vec<String> {
    list.iter().map(|c| c.to_string()).collect()
}

pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Essential Crew Tee".into(),
            category: Category::TShirts,
            price: 24.0,
            original_price: None,
            image_url: "https://images.example.com/products/essential-crew-tee.jpg".into(),
            rating: 4.5,
            review_count: 2,
            sizes: vec![Size::XS, Size::S, Size::M, Size::L, Size::XL],
            colors: colors(&["#FFFFFF", "#000000", "#1E3A8A"]),
            description: "Midweight combed cotton tee with a clean crew neck.".into(),
            is_new: false,
            reviews: vec![
                review(2, "Priya K.", 5, "Perfect everyday tee, holds its shape.", (2024, 3, 2)),
                review(1, "Marco D.", 4, "Runs a touch long but great fabric.", (2024, 2, 11)),
            ],
        },
        Product {
            id: 2,
            name: "Heavyweight Pullover Hoodie".into(),
            category: Category::Hoodies,
            price: 68.0,
            original_price: Some(85.0),
            image_url: "https://images.example.com/products/heavyweight-hoodie.jpg".into(),
            rating: 4.8,
            review_count: 1,
            sizes: vec![Size::S, Size::M, Size::L, Size::XL, Size::XXL],
            colors: colors(&["#000000", "#6B7280"]),
            description: "Brushed fleece hoodie with a double-lined hood.".into(),
            is_new: false,
            reviews: vec![review(1, "Jordan P.", 5, "Warmest hoodie I own.", (2024, 1, 20))],
        },
        Product {
            id: 3,
            name: "Oversized Graphic Tee".into(),
            category: Category::TShirts,
            price: 32.0,
            original_price: None,
            image_url: "https://images.example.com/products/oversized-graphic-tee.jpg".into(),
            rating: 4.2,
            review_count: 0,
            sizes: vec![Size::S, Size::M, Size::L],
            colors: colors(&["#FFFFFF", "#D97706"]),
            description: "Boxy fit tee with a screen-printed back graphic.".into(),
            is_new: false,
            reviews: vec![],
        },
        Product {
            id: 4,
            name: "Utility Chore Jacket".into(),
            category: Category::Jackets,
            price: 98.0,
            original_price: Some(120.0),
            image_url: "https://images.example.com/products/utility-chore-jacket.jpg".into(),
            rating: 4.6,
            review_count: 1,
            sizes: vec![Size::M, Size::L, Size::XL],
            colors: colors(&["#4B5320", "#1E3A8A"]),
            description: "Cotton canvas jacket with four patch pockets.".into(),
            is_new: false,
            reviews: vec![review(1, "Alex R.", 5, "Looks better with every wear.", (2024, 4, 8))],
        },
        Product {
            id: 5,
            name: "Relaxed Cargo Pants".into(),
            category: Category::Pants,
            price: 58.0,
            original_price: None,
            image_url: "https://images.example.com/products/relaxed-cargo-pants.jpg".into(),
            rating: 3.9,
            review_count: 0,
            sizes: vec![Size::XS, Size::S, Size::M, Size::L],
            colors: colors(&["#4B5320", "#000000"]),
            description: "Ripstop cargos with an adjustable drawcord hem.".into(),
            is_new: true,
            reviews: vec![],
        },
        Product {
            id: 6,
            name: "Ribbed Beanie".into(),
            category: Category::Accessories,
            price: 18.0,
            original_price: Some(22.0),
            image_url: "https://images.example.com/products/ribbed-beanie.jpg".into(),
            rating: 4.4,
            review_count: 0,
            sizes: vec![Size::M],
            colors: colors(&["#000000", "#D97706", "#6B7280"]),
            description: "Soft merino blend beanie with a fold-over cuff.".into(),
            is_new: true,
            reviews: vec![],
        },
        Product {
            id: 7,
            name: "Pocket Tee".into(),
            category: Category::TShirts,
            price: 28.0,
            original_price: None,
            image_url: "https://images.example.com/products/pocket-tee.jpg".into(),
            rating: 4.7,
            review_count: 0,
            sizes: vec![Size::S, Size::M, Size::L, Size::XL, Size::XXL],
            colors: colors(&["#FFFFFF", "#6B7280"]),
            description: "Slub jersey tee with a chest pocket.".into(),
            is_new: true,
            reviews: vec![],
        },
    ]
}
