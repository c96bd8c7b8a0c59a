//! Catalog API handlers - category listing, product browsing, and reviews.

use crate::core::{catalog, review};
use crate::entities::{CategoryModel, ProductModel, ReviewModel};
use crate::errors::Result;
use crate::web::AppState;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

/// Routes for catalog browsing and review submission.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/categories", get(list_categories))
        .nest("/api/products", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        // Static segment takes priority over the {slug} route below
        .route("/{id}/reviews", post(create_review))
        .route("/{id}/{slug}", get(product_detail))
}

/// Query parameters accepted by the product listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Restrict to one category by slug
    category: Option<String>,
    /// Case-insensitive name search text
    query: Option<String>,
}

/// A product together with its reviews, for the detail page.
#[derive(Debug, Serialize)]
pub struct ProductDetail {
    product: ProductModel,
    reviews: Vec<ReviewModel>,
}

/// Body of a review submission.
#[derive(Debug, Deserialize)]
pub struct ReviewPayload {
    user_name: String,
    rating: i32,
    #[serde(default)]
    comment: String,
}

/// GET /api/categories - all categories, name order
async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<CategoryModel>>> {
    let categories = catalog::list_categories(&state.db).await?;
    Ok(Json(categories))
}

/// GET /api/products - available products, optionally filtered
async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ProductModel>>> {
    let filter = catalog::ProductFilter {
        category_slug: params.category,
        name_query: params.query,
    };
    let products = catalog::list_products(&state.db, &filter).await?;
    Ok(Json(products))
}

/// GET /api/products/{id}/{slug} - product detail page data
async fn product_detail(
    State(state): State<AppState>,
    Path((id, slug)): Path<(i64, String)>,
) -> Result<Json<ProductDetail>> {
    let product = catalog::get_product(&state.db, id, &slug).await?;
    let reviews = review::list_reviews_for_product(&state.db, product.id).await?;
    Ok(Json(ProductDetail { product, reviews }))
}

/// POST /api/products/{id}/reviews - append a review
async fn create_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReviewPayload>,
) -> Result<(StatusCode, Json<ReviewModel>)> {
    let created = review::create_review(
        &state.db,
        id,
        payload.user_name,
        payload.rating,
        payload.comment,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(created)))
}
