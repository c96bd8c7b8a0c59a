//! Catalog business logic - Handles category and product browsing.
//!
//! This module provides the read side of the storefront: category listings,
//! filtered product listings, and product detail lookups. It also owns catalog
//! seeding, which loads categories and products from config.toml into the
//! database so a fresh deployment starts with a browsable shop. All functions
//! are async and return Result types for proper error handling.

use crate::{
    config::catalog as catalog_config,
    entities::{Category, Product, category, product},
    errors::{Error, Result},
    money::Money,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Filter for product listings; both fields are optional and combine.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Restrict to one category, addressed by slug
    pub category_slug: Option<String>,
    /// Case-insensitive substring match on the product name
    pub name_query: Option<String>,
}

/// Retrieves all categories ordered alphabetically by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>> {
    Category::find()
        .order_by_asc(category::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a category by its unique slug.
///
/// # Errors
/// Returns [`Error::CategoryNotFound`] when no category carries the slug, or
/// an error if the database query fails.
pub async fn get_category_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<category::Model> {
    Category::find()
        .filter(category::Column::Slug.eq(slug))
        .one(db)
        .await?
        .ok_or_else(|| Error::CategoryNotFound {
            slug: slug.to_string(),
        })
}

/// Lists available products, optionally narrowed by category and name query.
///
/// Only products marked `available` are listed. A category slug that matches
/// no category is an error rather than an empty listing, so broken category
/// links surface as not-found instead of an empty shop page.
///
/// # Errors
/// Returns [`Error::CategoryNotFound`] for an unknown category slug, or an
/// error if the database query fails.
pub async fn list_products(
    db: &DatabaseConnection,
    filter: &ProductFilter,
) -> Result<Vec<product::Model>> {
    let mut query = Product::find().filter(product::Column::Available.eq(true));

    if let Some(slug) = &filter.category_slug {
        let category = get_category_by_slug(db, slug).await?;
        query = query.filter(product::Column::CategoryId.eq(category.id));
    }

    if let Some(text) = &filter.name_query {
        query = query.filter(product::Column::Name.contains(text));
    }

    query
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves one available product by id and slug together.
///
/// Product detail links carry both the id and the slug; requiring the pair to
/// match means a stale or tampered link misses instead of showing the wrong
/// product.
///
/// # Errors
/// Returns [`Error::ProductNotFound`] when no available product matches both,
/// or an error if the database query fails.
pub async fn get_product(
    db: &DatabaseConnection,
    id: i64,
    slug: &str,
) -> Result<product::Model> {
    Product::find()
        .filter(product::Column::Id.eq(id))
        .filter(product::Column::Slug.eq(slug))
        .filter(product::Column::Available.eq(true))
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id })
}

/// Retrieves one available product by id, for cart additions.
///
/// # Errors
/// Returns [`Error::ProductNotFound`] when the product is missing or not
/// available, or an error if the database query fails.
pub async fn get_product_by_id(db: &DatabaseConnection, id: i64) -> Result<product::Model> {
    Product::find_by_id(id)
        .filter(product::Column::Available.eq(true))
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id })
}

/// Seeds categories and products from the catalog configuration.
///
/// Categories are created when missing and left untouched when present.
/// Products are matched by slug: existing rows are refreshed from the
/// configuration (price, stock, description, image, category) and missing
/// rows are inserted as available. Running the seed repeatedly is safe.
///
/// # Errors
/// Returns an error if:
/// - A product references a category slug not present in the configuration
/// - A configured price is negative or not finite
/// - A database operation fails
pub async fn seed_catalog(db: &DatabaseConnection, config: &catalog_config::Config) -> Result<()> {
    info!(
        "Seeding catalog with {} categories and {} products.",
        config.categories.len(),
        config.products.len()
    );

    for entry in &config.categories {
        let existing = Category::find()
            .filter(category::Column::Slug.eq(entry.slug.as_str()))
            .one(db)
            .await?;
        if existing.is_none() {
            let model = category::ActiveModel {
                name: Set(entry.name.clone()),
                slug: Set(entry.slug.clone()),
                description: Set(entry.description.clone()),
                ..Default::default()
            };
            model.insert(db).await?;
        }
    }

    for entry in &config.products {
        let category = get_category_by_slug(db, &entry.category)
            .await
            .map_err(|_| Error::Config {
                message: format!(
                    "Product '{}' references unknown category '{}'",
                    entry.slug, entry.category
                ),
            })?;
        let price = Money::from_major_f64(entry.price)?;
        let now = chrono::Utc::now();

        let existing = Product::find()
            .filter(product::Column::Slug.eq(entry.slug.as_str()))
            .one(db)
            .await?;
        match existing {
            Some(found) => {
                let mut model: product::ActiveModel = found.into();
                model.category_id = Set(category.id);
                model.name = Set(entry.name.clone());
                model.description = Set(entry.description.clone());
                model.price = Set(price);
                model.stock = Set(entry.stock);
                model.available = Set(true);
                model.image = Set(entry.image.clone());
                model.updated_at = Set(now);
                model.update(db).await?;
            }
            None => {
                let model = product::ActiveModel {
                    category_id: Set(category.id),
                    name: Set(entry.name.clone()),
                    slug: Set(entry.slug.clone()),
                    description: Set(entry.description.clone()),
                    price: Set(price),
                    stock: Set(entry.stock),
                    available: Set(true),
                    image: Set(entry.image.clone()),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model.insert(db).await?;
            }
        }
    }

    info!("Finished seeding catalog.");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::catalog::{CategoryConfig, ProductConfig};
    use crate::test_utils::*;
    use sea_orm::ActiveModelTrait;

    fn sample_seed() -> catalog_config::Config {
        catalog_config::Config {
            categories: vec![
                CategoryConfig {
                    name: "Exterior".to_string(),
                    slug: "exterior".to_string(),
                    description: "Outer look".to_string(),
                },
                CategoryConfig {
                    name: "Lighting".to_string(),
                    slug: "lighting".to_string(),
                    description: "LED solutions".to_string(),
                },
            ],
            products: vec![
                ProductConfig {
                    category: "exterior".to_string(),
                    name: "Carbon Fiber Spoiler".to_string(),
                    slug: "carbon-fiber-spoiler".to_string(),
                    description: "Lightweight spoiler".to_string(),
                    price: 299.99,
                    stock: 10,
                    image: Some("products/aero.png".to_string()),
                },
                ProductConfig {
                    category: "lighting".to_string(),
                    name: "LED Ambient Lighting Kit".to_string(),
                    slug: "led-ambient-lighting".to_string(),
                    description: "App controlled LEDs".to_string(),
                    price: 49.99,
                    stock: 50,
                    image: None,
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_list_categories_ordered_by_name() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_category(&db, "Wheels & Tires", "wheels-tires").await?;
        create_test_category(&db, "Exterior", "exterior").await?;
        create_test_category(&db, "Lighting", "lighting").await?;

        let categories = list_categories(&db).await?;
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Exterior", "Lighting", "Wheels & Tires"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_category_by_slug_integration() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_test_category(&db, "Exterior", "exterior").await?;

        let found = get_category_by_slug(&db, "exterior").await?;
        assert_eq!(found.id, created.id);

        let missing = get_category_by_slug(&db, "no-such-category").await;
        assert!(matches!(missing, Err(Error::CategoryNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_list_products_excludes_unavailable() -> Result<()> {
        let db = setup_test_db().await?;
        let category = create_test_category(&db, "Exterior", "exterior").await?;
        create_test_product(&db, category.id, "Spoiler", "spoiler", 29_999, 10).await?;
        let hidden =
            create_test_product(&db, category.id, "Old Grille", "old-grille", 9_999, 0).await?;

        let mut model: product::ActiveModel = hidden.into();
        model.available = Set(false);
        model.update(&db).await?;

        let products = list_products(&db, &ProductFilter::default()).await?;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Spoiler");
        Ok(())
    }

    #[tokio::test]
    async fn test_list_products_by_category_and_query() -> Result<()> {
        let db = setup_test_db().await?;
        let exterior = create_test_category(&db, "Exterior", "exterior").await?;
        let lighting = create_test_category(&db, "Lighting", "lighting").await?;
        create_test_product(&db, exterior.id, "Carbon Spoiler", "carbon-spoiler", 29_999, 10)
            .await?;
        create_test_product(&db, exterior.id, "Matte Grille", "matte-grille", 14_500, 15).await?;
        create_test_product(&db, lighting.id, "LED Kit", "led-kit", 4_999, 50).await?;

        let by_category = list_products(
            &db,
            &ProductFilter {
                category_slug: Some("exterior".to_string()),
                name_query: None,
            },
        )
        .await?;
        assert_eq!(by_category.len(), 2);
        assert!(by_category.iter().all(|p| p.category_id == exterior.id));

        let by_query = list_products(
            &db,
            &ProductFilter {
                category_slug: None,
                name_query: Some("spoiler".to_string()),
            },
        )
        .await?;
        assert_eq!(by_query.len(), 1);
        assert_eq!(by_query[0].slug, "carbon-spoiler");

        let combined = list_products(
            &db,
            &ProductFilter {
                category_slug: Some("lighting".to_string()),
                name_query: Some("spoiler".to_string()),
            },
        )
        .await?;
        assert!(combined.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_list_products_unknown_category_fails() -> Result<()> {
        let db = setup_test_db().await?;

        let result = list_products(
            &db,
            &ProductFilter {
                category_slug: Some("ghost".to_string()),
                name_query: None,
            },
        )
        .await;
        assert!(matches!(result, Err(Error::CategoryNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_requires_matching_id_and_slug() -> Result<()> {
        let db = setup_test_db().await?;
        let category = create_test_category(&db, "Exterior", "exterior").await?;
        let spoiler =
            create_test_product(&db, category.id, "Spoiler", "spoiler", 29_999, 10).await?;

        let found = get_product(&db, spoiler.id, "spoiler").await?;
        assert_eq!(found.id, spoiler.id);

        let wrong_slug = get_product(&db, spoiler.id, "grille").await;
        assert!(matches!(wrong_slug, Err(Error::ProductNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_hides_unavailable() -> Result<()> {
        let db = setup_test_db().await?;
        let category = create_test_category(&db, "Exterior", "exterior").await?;
        let spoiler =
            create_test_product(&db, category.id, "Spoiler", "spoiler", 29_999, 10).await?;

        let mut model: product::ActiveModel = spoiler.clone().into();
        model.available = Set(false);
        model.update(&db).await?;

        let by_pair = get_product(&db, spoiler.id, "spoiler").await;
        assert!(matches!(by_pair, Err(Error::ProductNotFound { .. })));

        let by_id = get_product_by_id(&db, spoiler.id).await;
        assert!(matches!(by_id, Err(Error::ProductNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_catalog_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let seed = sample_seed();

        seed_catalog(&db, &seed).await?;
        seed_catalog(&db, &seed).await?;

        let categories = list_categories(&db).await?;
        assert_eq!(categories.len(), 2);

        let products = list_products(&db, &ProductFilter::default()).await?;
        assert_eq!(products.len(), 2);

        let spoiler = products
            .iter()
            .find(|p| p.slug == "carbon-fiber-spoiler")
            .unwrap();
        assert_eq!(spoiler.price, Money::from_minor(29_999));
        assert_eq!(spoiler.image.as_deref(), Some("products/aero.png"));
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_catalog_refreshes_existing_products() -> Result<()> {
        let db = setup_test_db().await?;
        let mut seed = sample_seed();
        seed_catalog(&db, &seed).await?;

        // Price and stock change in the configuration
        seed.products[0].price = 349.99;
        seed.products[0].stock = 7;
        seed_catalog(&db, &seed).await?;

        let products = list_products(&db, &ProductFilter::default()).await?;
        let spoiler = products
            .iter()
            .find(|p| p.slug == "carbon-fiber-spoiler")
            .unwrap();
        assert_eq!(spoiler.price, Money::from_minor(34_999));
        assert_eq!(spoiler.stock, 7);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_catalog_unknown_category_fails() -> Result<()> {
        let db = setup_test_db().await?;
        let mut seed = sample_seed();
        seed.products[0].category = "ghost".to_string();

        let result = seed_catalog(&db, &seed).await;
        assert!(matches!(result, Err(Error::Config { .. })));
        Ok(())
    }
}
