use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Catalog identifier. Higher ids are newer products.
pub type ProductId = u32;

pub const DEFAULT_MIN_PRICE: f64 = 0.0;
pub const DEFAULT_MAX_PRICE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    #[serde(rename = "T-Shirts")]
    TShirts,
    Hoodies,
    Jackets,
    Pants,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::TShirts,
        Category::Hoodies,
        Category::Jackets,
        Category::Pants,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TShirts => "T-Shirts",
            Category::Hoodies => "Hoodies",
            Category::Jackets => "Jackets",
            Category::Pants => "Pants",
            Category::Accessories => "Accessories",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// Garment sizes, ordered smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum Size {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
}

impl Size {
    pub const ALL: [Size; 6] = [Size::XS, Size::S, Size::M, Size::L, Size::XL, Size::XXL];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::XS => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
            Size::XXL => "XXL",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: u32,
    pub author: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub image_url: String,
    /// Aggregate rating as seeded. Submitting a review does not recompute it.
    pub rating: f64,
    pub review_count: u32,
    pub sizes: Vec<Size>,
    pub colors: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub is_new: bool,
    /// Newest first.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    pub fn has_any_size(&self, sizes: &BTreeSet<Size>) -> bool {
        self.sizes.iter().any(|s| sizes.contains(s))
    }

    pub fn has_any_color(&self, colors: &BTreeSet<String>) -> bool {
        self.colors.iter().any(|c| colors.contains(c))
    }

    /// Whole-percent markdown from `original_price`, if the product is discounted.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price || original <= 0.0 {
            return None;
        }
        Some((((original - self.price) / original) * 100.0).round() as u32)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewValidationError {
    #[error("Please select a star rating.")]
    MissingRating,
    #[error("Rating must be between 1 and 5.")]
    RatingOutOfRange(u8),
    #[error("Please enter your name.")]
    MissingAuthor,
    #[error("Please write a comment.")]
    MissingComment,
}

/// A review that passed the form guards. Only constructible through [`NewReview::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    author: String,
    rating: u8,
    comment: String,
}

impl NewReview {
    pub fn new(
        author: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
    ) -> Result<Self, ReviewValidationError> {
        let author = author.into();
        let comment = comment.into();
        if rating == 0 {
            return Err(ReviewValidationError::MissingRating);
        }
        if rating > 5 {
            return Err(ReviewValidationError::RatingOutOfRange(rating));
        }
        if author.trim().is_empty() {
            return Err(ReviewValidationError::MissingAuthor);
        }
        if comment.trim().is_empty() {
            return Err(ReviewValidationError::MissingComment);
        }
        Ok(Self {
            author,
            rating,
            comment,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn into_review(self, id: u32, date: NaiveDate) -> Review {
        Review {
            id,
            author: self.author,
            rating: self.rating,
            comment: self.comment,
            date,
        }
    }
}

/// Sort order of the derived product list. Unknown names parse as [`SortMode::Newest`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::Rating => "rating",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "price-asc" => SortMode::PriceAsc,
            "price-desc" => SortMode::PriceDesc,
            "rating" => SortMode::Rating,
            _ => SortMode::Newest,
        }
    }
}

impl<'de> Deserialize<'de> for SortMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(SortMode::parse(&raw))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("price range minimum {min} exceeds maximum {max}")]
    InvertedRange { min: f64, max: f64 },
    #[error("price bounds must be non-negative numbers")]
    InvalidBound,
}

/// Inclusive price bounds, always `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "RawPriceRange")]
pub struct PriceRange {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawPriceRange {
    min: f64,
    max: f64,
}

impl TryFrom<RawPriceRange> for PriceRange {
    type Error = CriteriaError;

    fn try_from(raw: RawPriceRange) -> Result<Self, Self::Error> {
        PriceRange::new(raw.min, raw.max)
    }
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Result<Self, CriteriaError> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || max < 0.0 {
            return Err(CriteriaError::InvalidBound);
        }
        if min > max {
            return Err(CriteriaError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PRICE,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

/// Shopper-selected narrowing and ordering. Empty sets place no restriction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FilterCriteria {
    #[serde(default)]
    pub categories: BTreeSet<Category>,
    #[serde(default)]
    pub sizes: BTreeSet<Size>,
    #[serde(default)]
    pub colors: BTreeSet<String>,
    #[serde(default)]
    pub price_range: PriceRange,
    #[serde(default)]
    pub sort: SortMode,
}

impl FilterCriteria {
    pub fn toggle_category(&mut self, category: Category) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    pub fn toggle_size(&mut self, size: Size) {
        if !self.sizes.remove(&size) {
            self.sizes.insert(size);
        }
    }

    pub fn toggle_color(&mut self, color: &str) {
        if !self.colors.remove(color) {
            self.colors.insert(color.to_string());
        }
    }

    /// Moves the upper bound only, as the price slider does.
    pub fn set_max_price(&mut self, max: f64) -> Result<(), CriteriaError> {
        self.price_range = PriceRange::new(self.price_range.min(), max)?;
        Ok(())
    }

    pub fn set_price_range(&mut self, min: f64, max: f64) -> Result<(), CriteriaError> {
        self.price_range = PriceRange::new(min, max)?;
        Ok(())
    }
}

/// Deduplication key of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: Size,
    pub color: String,
}

impl LineKey {
    pub fn new(product_id: ProductId, size: Size, color: impl Into<String>) -> Self {
        Self {
            product_id,
            size,
            color: color.into(),
        }
    }
}

/// One (product, size, color) in the cart. `product` is a snapshot taken when the line was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    pub product: Product,
    pub size: Size,
    pub color: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product.id, self.size, self.color.clone())
    }

    pub fn matches(&self, key: &LineKey) -> bool {
        self.product.id == key.product_id && self.size == key.size && self.color == key.color
    }

    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum Modal {
    #[default]
    None,
    Search,
    Wishlist,
    Cart,
    ProductDetail,
    WriteReview,
    SizeGuide,
}

impl Modal {
    /// Modals that render a specific product.
    pub fn requires_product(&self) -> bool {
        matches!(self, Modal::ProductDetail | Modal::WriteReview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_mode_falls_back_to_newest() {
        assert_eq!(SortMode::parse("price-asc"), SortMode::PriceAsc);
        assert_eq!(SortMode::parse("RATING"), SortMode::Rating);
        assert_eq!(SortMode::parse("popularity"), SortMode::Newest);

        let parsed: SortMode = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(parsed, SortMode::Newest);
        assert_eq!(serde_json::to_string(&SortMode::PriceDesc).unwrap(), "\"price-desc\"");
    }

    #[test]
    fn price_range_rejects_inverted_bounds() {
        assert!(PriceRange::new(10.0, 5.0).is_err());
        assert!(PriceRange::new(-1.0, 5.0).is_err());
        assert!(PriceRange::new(f64::NAN, 5.0).is_err());
        let range = PriceRange::new(5.0, 5.0).unwrap();
        assert!(range.contains(5.0));
        assert!(!range.contains(5.01));

        let err = serde_json::from_str::<PriceRange>(r#"{"min": 50, "max": 10}"#);
        assert!(err.is_err());
    }

    #[test]
    fn slider_keeps_min_below_max() {
        let mut criteria = FilterCriteria::default();
        criteria.set_price_range(20.0, 80.0).unwrap();
        assert!(criteria.set_max_price(10.0).is_err());
        assert_eq!(criteria.price_range.max(), 80.0);
        criteria.set_max_price(40.0).unwrap();
        assert_eq!(criteria.price_range, PriceRange::new(20.0, 40.0).unwrap());
    }

    #[test]
    fn criteria_toggles_are_self_inverse() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_category(Category::Hoodies);
        criteria.toggle_size(Size::M);
        criteria.toggle_color("#000000");
        assert!(criteria.categories.contains(&Category::Hoodies));
        assert!(criteria.sizes.contains(&Size::M));
        assert!(criteria.colors.contains("#000000"));

        criteria.toggle_category(Category::Hoodies);
        criteria.toggle_size(Size::M);
        criteria.toggle_color("#000000");
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn new_review_guards() {
        assert_eq!(
            NewReview::new("Alex", 0, "Nice"),
            Err(ReviewValidationError::MissingRating)
        );
        assert_eq!(
            NewReview::new("Alex", 6, "Nice"),
            Err(ReviewValidationError::RatingOutOfRange(6))
        );
        assert_eq!(
            NewReview::new("   ", 4, "Nice"),
            Err(ReviewValidationError::MissingAuthor)
        );
        assert_eq!(
            NewReview::new("Alex", 4, "\n"),
            Err(ReviewValidationError::MissingComment)
        );
        assert!(NewReview::new("Alex", 5, "Nice").is_ok());
    }

    #[test]
    fn discount_only_when_marked_down() {
        let mut product = Product {
            id: 1,
            name: "Tee".into(),
            category: Category::TShirts,
            price: 30.0,
            original_price: Some(40.0),
            image_url: String::new(),
            rating: 4.0,
            review_count: 0,
            sizes: vec![],
            colors: vec![],
            description: String::new(),
            is_new: false,
            reviews: vec![],
        };
        assert_eq!(product.discount_percent(), Some(25));
        product.original_price = Some(20.0);
        assert_eq!(product.discount_percent(), None);
        product.original_price = None;
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn category_and_size_parse_labels() {
        assert_eq!(Category::parse("t-shirts"), Some(Category::TShirts));
        assert_eq!(Category::parse("Socks"), None);
        assert_eq!(Size::parse("xxl"), Some(Size::XXL));
        assert_eq!(serde_json::to_string(&Category::TShirts).unwrap(), "\"T-Shirts\"");
        assert_eq!(serde_json::to_string(&Modal::ProductDetail).unwrap(), "\"productDetail\"");
    }
}
