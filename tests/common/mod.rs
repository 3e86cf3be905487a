#![allow(dead_code)]

use shorturl::application::services::MappingService;
use shorturl::infrastructure::persistence::PgMappingRepository;
use shorturl::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool)));

    AppState {
        mapping_service: Arc::new(MappingService::new(repository)),
    }
}

pub async fn create_test_mapping(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO mappings (code, long_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings_for_url(pool: &PgPool, url: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM mappings WHERE long_url = $1")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_mappings_for_code(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM mappings WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
