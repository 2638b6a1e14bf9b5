#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;
use wall_catalog::db::{DbPool, establish_connection_pool};
use wall_catalog::domain::design::{DesignStatus, NewDesign};
use wall_catalog::domain::types::{DesignTitle, Price};
use wall_catalog::repository::DieselRepository;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Migrated SQLite database living in a temporary directory that is removed
/// when the value is dropped.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

/// Deterministic creation timestamp `minutes` after a fixed origin.
pub fn at(minutes: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid origin")
        + chrono::Duration::minutes(minutes)
}

/// Published design with the given title and price created at `at(minutes)`.
pub fn published(title: &str, price: f64, minutes: i64) -> NewDesign {
    NewDesign::new(
        DesignTitle::new(title).expect("title"),
        Price::new(price).expect("price"),
    )
    .status(DesignStatus::Published)
    .created_at(at(minutes))
}
