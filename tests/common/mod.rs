#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use cms_catalog::db::{DbPool, establish_connection_pool};
use cms_catalog::domain::product_index::NewProductIndex;
use cms_catalog::domain::types::{ProductId, SyncStatus};
use cms_catalog::models::config::ServerConfig;
use cms_catalog::repository::{DieselRepository, ProductIndexWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// SQLite database in a temporary directory, removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    /// Creates a migrated database.
    pub fn new(filename: &str) -> Self {
        let test_db = Self::empty(filename);
        let mut conn = test_db.pool.get().expect("Failed to get connection");
        let conn: &mut SqliteConnection = &mut conn;
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");
        test_db
    }

    /// Creates a database without any tables.
    pub fn empty(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(filename);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("Failed to create pool");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

pub fn day(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, day)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid date")
}

pub fn product(id: &str, name: &str, description: &str) -> NewProductIndex {
    NewProductIndex::new(
        ProductId::new(id).expect("valid id"),
        name.to_string(),
        Some(description.to_string()),
        None,
        day(1),
    )
    .with_status(SyncStatus::Active)
}

/// Three active products ranked by priority, then popularity.
pub fn seed_ranking_scenario(repo: &DieselRepository) {
    let products = vec![
        product("p5-10", "Alpha", "").with_ranking(5, 10.0),
        product("p5-20", "Beta", "").with_ranking(5, 20.0),
        product("p3-100", "Gamma", "").with_ranking(3, 100.0),
    ];
    repo.create_indexed_products(&products)
        .expect("Failed to seed products");
}

pub fn server_config(max_page_limit: usize) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        max_page_limit,
    }
}
