//! Review business logic - Handles product review submission and listing.
//!
//! Reviews are append-only: shoppers leave a name, a 1-5 star rating, and a
//! comment against a product, and the storefront lists them newest first on
//! the product detail page. There is no update or delete path.

use crate::{
    entities::{Product, Review, review},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Lowest accepted star rating.
pub const MIN_RATING: i32 = 1;
/// Highest accepted star rating.
pub const MAX_RATING: i32 = 5;

/// Creates a review for a product, performing input validation.
///
/// The reviewer name is trimmed before storage. The comment may be empty;
/// a rating with no text is still a valid review.
///
/// # Errors
/// Returns an error if:
/// - The rating is outside `1..=5`
/// - The reviewer name is empty or whitespace-only
/// - The product does not exist
/// - The database insert operation fails
pub async fn create_review(
    db: &DatabaseConnection,
    product_id: i64,
    user_name: String,
    rating: i32,
    comment: String,
) -> Result<review::Model> {
    // Validate inputs
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(Error::InvalidRating { rating });
    }

    if user_name.trim().is_empty() {
        return Err(Error::EmptyReviewerName);
    }

    Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    let review = review::ActiveModel {
        product_id: Set(product_id),
        user_name: Set(user_name.trim().to_string()),
        rating: Set(rating),
        comment: Set(comment),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    review.insert(db).await.map_err(Into::into)
}

/// Retrieves all reviews for a product, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_reviews_for_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Vec<review::Model>> {
    Review::find()
        .filter(review::Column::ProductId.eq(product_id))
        .order_by_desc(review::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}
