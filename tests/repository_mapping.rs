mod common;

use shorturl::StoreError;
use shorturl::domain::entities::NewMapping;
use shorturl::domain::repositories::MappingRepository;
use shorturl::infrastructure::persistence::PgMappingRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_insert_mapping(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let new_mapping = NewMapping {
        code: "a1b2c3".to_string(),
        long_url: "https://example.com".to_string(),
    };

    let mapping = repo.insert(new_mapping).await.unwrap();

    assert_eq!(mapping.code, "a1b2c3");
    assert_eq!(mapping.long_url, "https://example.com");
    assert!(mapping.id > 0);
}

#[sqlx::test]
async fn test_insert_duplicate_code_is_code_taken(pool: PgPool) {
    common::create_test_mapping(&pool, "a1b2c3", "https://first.com").await;
    let repo = PgMappingRepository::new(Arc::new(pool));

    let result = repo
        .insert(NewMapping {
            code: "a1b2c3".to_string(),
            long_url: "https://second.com".to_string(),
        })
        .await;

    assert!(matches!(result, Err(StoreError::CodeTaken)));
}

#[sqlx::test]
async fn test_find_by_code(pool: PgPool) {
    common::create_test_mapping(&pool, "abc123", "https://example.com").await;
    let repo = PgMappingRepository::new(Arc::new(pool));

    let mapping = repo.find_by_code("abc123").await.unwrap();

    assert!(mapping.is_some());
    assert_eq!(mapping.unwrap().long_url, "https://example.com");
}

#[sqlx::test]
async fn test_find_by_code_not_found(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let mapping = repo.find_by_code("zzzzzz").await.unwrap();

    assert!(mapping.is_none());
}

#[sqlx::test]
async fn test_find_by_long_url(pool: PgPool) {
    common::create_test_mapping(&pool, "xyz789", "https://unique-url.com").await;
    let repo = PgMappingRepository::new(Arc::new(pool));

    let mapping = repo.find_by_long_url("https://unique-url.com").await.unwrap();

    assert!(mapping.is_some());
    assert_eq!(mapping.unwrap().code, "xyz789");
}

#[sqlx::test]
async fn test_find_by_long_url_prefers_oldest_duplicate(pool: PgPool) {
    // Duplicate rows for one URL can exist after racing shortens; the lookup
    // must answer deterministically with the first inserted row.
    common::create_test_mapping(&pool, "000001", "https://raced.com").await;
    common::create_test_mapping(&pool, "000002", "https://raced.com").await;
    let repo = PgMappingRepository::new(Arc::new(pool));

    let mapping = repo.find_by_long_url("https://raced.com").await.unwrap();

    assert_eq!(mapping.unwrap().code, "000001");
}

#[sqlx::test]
async fn test_delete_by_code(pool: PgPool) {
    common::create_test_mapping(&pool, "dead00", "https://example.com").await;
    let repo = PgMappingRepository::new(Arc::new(pool));

    let removed = repo.delete_by_code("dead00").await.unwrap();
    assert_eq!(removed, 1);

    let removed_again = repo.delete_by_code("dead00").await.unwrap();
    assert_eq!(removed_again, 0);
}

#[sqlx::test]
async fn test_code_is_reusable_after_delete(pool: PgPool) {
    common::create_test_mapping(&pool, "a1b2c3", "https://old.com").await;
    let repo = PgMappingRepository::new(Arc::new(pool));

    repo.delete_by_code("a1b2c3").await.unwrap();

    // A freed code may be drawn again for an unrelated URL.
    let mapping = repo
        .insert(NewMapping {
            code: "a1b2c3".to_string(),
            long_url: "https://new.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(mapping.code, "a1b2c3");
    assert_eq!(mapping.long_url, "https://new.com");
}
