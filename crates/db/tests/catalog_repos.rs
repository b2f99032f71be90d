//! Integration tests for the read-mostly catalog and recipe repositories.

use apiflow_core::catalog::{ApiCategory, TRENDING_LIMIT, TRENDING_MIN_POPULARITY};
use apiflow_core::recipe::{Difficulty, POPULAR_LIMIT};
use apiflow_core::search::SearchTerm;
use apiflow_db::repositories::{ApiRepo, RecipeRepo};
use apiflow_db::{create_seeded_pool, DbPool};

fn pool() -> DbPool {
    create_seeded_pool().expect("embedded seed must load")
}

fn term(q: &str) -> SearchTerm {
    SearchTerm::parse(Some(q)).unwrap()
}

// ---------------------------------------------------------------------------
// APIs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn find_by_id_returns_requested_record() {
    let pool = pool();
    for api in ApiRepo::list_all(&pool).await {
        let found = ApiRepo::find_by_id(&pool, api.id).await.unwrap();
        assert_eq!(found.id, api.id);
    }
    assert!(ApiRepo::find_by_id(&pool, 9_999).await.is_none());
    assert!(ApiRepo::find_by_id(&pool, 0).await.is_none());
}

#[tokio::test]
async fn empty_search_returns_everything() {
    let pool = pool();
    let all = ApiRepo::list_all(&pool).await;
    let searched = ApiRepo::search(&pool, &SearchTerm::default(), None).await;
    assert_eq!(searched, all);
}

#[tokio::test]
async fn search_matches_name_description_and_category() {
    let pool = pool();

    let by_name = ApiRepo::search(&pool, &term("stripe"), None).await;
    assert!(by_name.iter().any(|a| a.name == "Stripe Payments"));

    let by_description = ApiRepo::search(&pool, &term("STOCK PHOTO"), None).await;
    assert!(!by_description.is_empty());
    assert!(by_description
        .iter()
        .all(|a| a.description.to_lowercase().contains("stock photo")));

    let by_category_text = ApiRepo::search(&pool, &term("analytics"), None).await;
    assert!(by_category_text
        .iter()
        .any(|a| a.category == ApiCategory::Analytics));
}

#[tokio::test]
async fn search_respects_category_filter() {
    let pool = pool();
    let social = ApiRepo::search(&pool, &SearchTerm::default(), Some(ApiCategory::Social)).await;
    assert!(!social.is_empty());
    assert!(social.iter().all(|a| a.category == ApiCategory::Social));
    assert_eq!(
        social,
        ApiRepo::list_by_category(&pool, ApiCategory::Social).await
    );

    let none = ApiRepo::search(&pool, &term("stripe"), Some(ApiCategory::Social)).await;
    assert!(none.is_empty());
}

#[tokio::test]
async fn trending_is_sorted_filtered_and_capped() {
    let pool = pool();
    let trending = ApiRepo::trending(&pool).await;

    assert!(!trending.is_empty());
    assert!(trending.len() <= TRENDING_LIMIT);
    assert!(trending
        .iter()
        .all(|a| a.popularity >= TRENDING_MIN_POPULARITY));
    assert!(trending
        .windows(2)
        .all(|pair| pair[0].popularity >= pair[1].popularity));

    // The seed has more than eight qualifying APIs, so the cap applies.
    let qualifying = ApiRepo::list_all(&pool)
        .await
        .into_iter()
        .filter(|a| a.popularity >= TRENDING_MIN_POPULARITY)
        .count();
    assert!(qualifying > TRENDING_LIMIT);
    assert_eq!(trending.len(), TRENDING_LIMIT);
}

// ---------------------------------------------------------------------------
// Recipes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn recipe_search_covers_tags() {
    let pool = pool();
    let results = RecipeRepo::search(&pool, &term("RETENTION")).await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Payment Failure Follow-up");

    let all = RecipeRepo::search(&pool, &SearchTerm::default()).await;
    assert_eq!(all, RecipeRepo::list_all(&pool).await);
}

#[tokio::test]
async fn recipe_filters_by_category_and_difficulty() {
    let pool = pool();

    let ecommerce = RecipeRepo::list_by_category(&pool, "e-commerce").await;
    assert_eq!(ecommerce.len(), 2);

    let advanced = RecipeRepo::list_by_difficulty(&pool, Difficulty::Advanced).await;
    assert!(!advanced.is_empty());
    assert!(advanced.iter().all(|r| r.difficulty == Difficulty::Advanced));

    let combined = RecipeRepo::filter(
        &pool,
        &term("email"),
        Some("E-commerce"),
        Some(Difficulty::Intermediate),
    )
    .await;
    assert!(combined
        .iter()
        .all(|r| r.category == "E-commerce" && r.difficulty == Difficulty::Intermediate));
    assert!(!combined.is_empty());
}

#[tokio::test]
async fn popular_is_sorted_by_uses_and_leaves_table_order() {
    let pool = pool();
    let before = RecipeRepo::list_all(&pool).await;

    let popular = RecipeRepo::popular(&pool).await;
    assert_eq!(popular.len(), POPULAR_LIMIT);
    assert!(popular.windows(2).all(|p| p[0].uses >= p[1].uses));

    assert_eq!(RecipeRepo::list_all(&pool).await, before);
}

#[tokio::test]
async fn increment_uses_adds_exactly_one() {
    let pool = pool();
    let before = RecipeRepo::find_by_id(&pool, 1).await.unwrap().uses;

    let updated = RecipeRepo::increment_uses(&pool, 1).await.unwrap();
    assert_eq!(updated.uses, before + 1);
    assert_eq!(RecipeRepo::find_by_id(&pool, 1).await.unwrap().uses, before + 1);

    assert!(RecipeRepo::increment_uses(&pool, 404).await.is_none());
}
