use storefront_api::{
    dto::{
        cart::{AddToCartRequest, LineQuery, UpdateQuantityRequest},
        reviews::ReviewRequest,
        selection::OpenModalRequest,
    },
    error::AppError,
    models::{Category, FilterCriteria, Modal, PriceRange, Size, SortMode},
    seed::{demo_products, load_catalog},
    services::{
        cart_service, filter_service, product_service, review_service, selection_service,
        wishlist_service,
    },
    state::AppState,
    store::{Catalog, QuantityChange},
};

async fn demo_state() -> anyhow::Result<AppState> {
    let catalog = load_catalog(None).await?;
    Ok(AppState::new(catalog))
}

fn visible_ids(list: &storefront_api::dto::products::ProductList) -> Vec<u32> {
    list.items.iter().map(|p| p.id).collect()
}

// Browse -> narrow -> add two variants -> adjust -> clear.
#[tokio::test]
async fn browse_filter_and_cart_flow() -> anyhow::Result<()> {
    let state = demo_state().await?;

    // Jacket at 98 is inside the default range; everything is listed newest first.
    let all = product_service::list_products(&state).await?;
    let all = all.data.unwrap();
    assert_eq!(visible_ids(&all), vec![7, 6, 5, 4, 3, 2, 1]);

    filter_service::toggle_category(&state, "t-shirts").await?;
    filter_service::set_sort(&state, SortMode::PriceAsc).await?;
    let tees = product_service::list_products(&state).await?;
    assert_eq!(tees.meta.as_ref().and_then(|m| m.total), Some(3));
    assert_eq!(visible_ids(&tees.data.unwrap()), vec![1, 7, 3]);

    filter_service::set_max_price(&state, 30.0).await?;
    let cheap = product_service::list_products(&state).await?;
    assert_eq!(visible_ids(&cheap.data.unwrap()), vec![1, 7]);

    for _ in 0..2 {
        cart_service::add_to_cart(
            &state,
            AddToCartRequest {
                product_id: 1,
                size: Size::M,
                color: "#000000".into(),
            },
        )
        .await?;
    }
    let summary = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            product_id: 1,
            size: Size::L,
            color: "#FFFFFF".into(),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(summary.line_count, 2);
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.subtotal, 72.0);

    // Exact-key update touches only the white L line.
    let updated = cart_service::update_quantity(
        &state,
        1,
        UpdateQuantityRequest {
            quantity: 4,
            size: Some(Size::L),
            color: Some("#FFFFFF".into()),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(updated.change, QuantityChange::Updated);
    assert_eq!(updated.cart.lines[0].quantity, 2);
    assert_eq!(updated.cart.lines[1].quantity, 4);

    // Product-only update falls on the first line; zero removes it.
    let removed = cart_service::update_quantity(
        &state,
        1,
        UpdateQuantityRequest {
            quantity: 0,
            size: None,
            color: None,
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(removed.change, QuantityChange::Removed);
    assert_eq!(removed.cart.line_count, 1);
    assert_eq!(removed.cart.lines[0].size, Size::L);

    let again = cart_service::remove_from_cart(
        &state,
        1,
        LineQuery {
            size: Some(Size::M),
            color: Some("#000000".into()),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(again.change, QuantityChange::Missing);
    assert_eq!(again.cart.item_count, 4);

    let cleared = filter_service::clear_criteria(&state).await?.data.unwrap();
    assert_eq!(cleared, FilterCriteria::default());
    let all = product_service::list_products(&state).await?;
    assert_eq!(all.meta.and_then(|m| m.total), Some(7));

    Ok(())
}

#[tokio::test]
async fn add_to_cart_rejects_unknown_product_and_unavailable_variant() -> anyhow::Result<()> {
    let state = demo_state().await?;

    let err = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            product_id: 999,
            size: Size::M,
            color: "#000000".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    // The beanie only comes in M.
    let err = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            product_id: 6,
            size: Size::XXL,
            color: "#000000".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let summary = cart_service::cart_summary(&state).await?.data.unwrap();
    assert_eq!(summary.line_count, 0);
    assert_eq!(summary.subtotal, 0.0);
    Ok(())
}

#[tokio::test]
async fn review_flow_updates_detail_view_but_not_rating() -> anyhow::Result<()> {
    let state = demo_state().await?;

    selection_service::open_modal(
        &state,
        OpenModalRequest {
            modal: Modal::WriteReview,
            product_id: Some(1),
        },
    )
    .await?;

    let err = review_service::submit_review(
        &state,
        1,
        ReviewRequest {
            author: "Casey".into(),
            rating: 0,
            comment: "Lovely".into(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Please select a star rating.");

    let review = review_service::submit_review(
        &state,
        1,
        ReviewRequest {
            author: "Casey".into(),
            rating: 3,
            comment: "Collar stretched after a month.".into(),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(review.id, 3);

    let selection = selection_service::get_selection(&state).await?.data.unwrap();
    assert_eq!(selection.modal, Modal::None);
    let product = selection.product.unwrap();
    assert_eq!(product.review_count, 3);
    assert_eq!(product.reviews[0].author, "Casey");
    assert_eq!(product.rating, 4.5);

    let err = review_service::submit_review(
        &state,
        404,
        ReviewRequest {
            author: "Casey".into(),
            rating: 5,
            comment: "?".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn wishlist_toggle_round_trip() -> anyhow::Result<()> {
    let state = demo_state().await?;

    let added = wishlist_service::toggle_wishlist(&state, 4).await?.data.unwrap();
    assert!(added.wishlisted);
    wishlist_service::toggle_wishlist(&state, 2).await?;
    wishlist_service::toggle_wishlist(&state, 77).await?;

    let view = wishlist_service::list_wishlist(&state).await?.data.unwrap();
    assert_eq!(view.ids, vec![4, 2, 77]);
    let items: Vec<_> = view.items.iter().map(|p| p.id).collect();
    assert_eq!(items, vec![2, 4]);

    let detail = product_service::get_product(&state, 4).await?.data.unwrap();
    assert!(detail.wishlisted);
    assert_eq!(detail.discount_percent, Some(18));

    let removed = wishlist_service::toggle_wishlist(&state, 4).await?.data.unwrap();
    assert!(!removed.wishlisted);
    assert_eq!(removed.count, 2);
    Ok(())
}

#[tokio::test]
async fn product_modal_needs_a_product() -> anyhow::Result<()> {
    let state = demo_state().await?;

    let err = selection_service::open_modal(
        &state,
        OpenModalRequest {
            modal: Modal::ProductDetail,
            product_id: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    selection_service::open_modal(
        &state,
        OpenModalRequest {
            modal: Modal::ProductDetail,
            product_id: Some(5),
        },
    )
    .await?;
    let view = selection_service::open_modal(
        &state,
        OpenModalRequest {
            modal: Modal::SizeGuide,
            product_id: None,
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(view.modal, Modal::SizeGuide);
    assert_eq!(view.product_id, Some(5));

    let closed = selection_service::close_modal(&state).await?.data.unwrap();
    assert_eq!(closed.modal, Modal::None);
    Ok(())
}

#[tokio::test]
async fn replacing_criteria_and_rejecting_bad_range() -> anyhow::Result<()> {
    let state = AppState::new(Catalog::new(demo_products()));

    let criteria = FilterCriteria {
        categories: [Category::Hoodies, Category::Jackets].into_iter().collect(),
        price_range: PriceRange::new(50.0, 100.0)?,
        sort: SortMode::Rating,
        ..FilterCriteria::default()
    };
    let resp = filter_service::replace_criteria(&state, criteria).await?;
    assert_eq!(resp.meta.and_then(|m| m.total), Some(2));
    let list = product_service::list_products(&state).await?.data.unwrap();
    assert_eq!(visible_ids(&list), vec![2, 4]);

    let err = filter_service::set_max_price(&state, 10.0).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidCriteria(_)));
    let current = filter_service::get_criteria(&state).await?.data.unwrap();
    assert_eq!(current.price_range.max(), 100.0);

    let err = filter_service::toggle_size(&state, "XXXL").await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    Ok(())
}

#[tokio::test]
async fn search_and_facets() -> anyhow::Result<()> {
    let state = demo_state().await?;

    let hits = product_service::search_products(&state, "TEE").await?.data.unwrap();
    assert_eq!(visible_ids(&hits), vec![1, 3, 7]);
    let none = product_service::search_products(&state, "  ").await?.data.unwrap();
    assert!(none.items.is_empty());

    let facets = product_service::facets(&state).await?.data.unwrap();
    assert_eq!(
        facets.categories,
        vec![
            Category::TShirts,
            Category::Hoodies,
            Category::Jackets,
            Category::Pants,
            Category::Accessories
        ]
    );
    assert_eq!(facets.sizes[0], Size::XS);
    assert!(facets.colors.contains(&"#4B5320".to_string()));

    let guide = product_service::size_guide_table().data.unwrap();
    assert_eq!(guide.len(), 6);
    Ok(())
}
