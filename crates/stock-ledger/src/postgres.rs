use async_trait::async_trait;
use common::ProductName;
use sqlx::PgPool;

use crate::{
    Result, StockStoreError,
    store::{StockLevel, StockStore, StockUpdate},
};

/// PostgreSQL-backed stock store.
///
/// Each operation checks a connection out of the pool and runs inside
/// its own transaction; the connection is released on every exit path
/// (a rejected update rolls back on drop). Unseen products are
/// materialized as zero-quantity rows on first reference.
///
/// The read-then-write inside `update_stock` takes no row lock, so
/// concurrent updates to the same product may still race; that matches
/// the in-memory backend's contract.
#[derive(Clone)]
pub struct PostgresStockStore {
    pool: PgPool,
}

impl PostgresStockStore {
    /// Creates a new PostgreSQL stock store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }
}

#[async_trait]
impl StockStore for PostgresStockStore {
    async fn check_stock(&self, name: &ProductName) -> Result<StockLevel> {
        let mut tx = self.pool.begin().await?;

        let quantity: Option<i64> =
            sqlx::query_scalar("SELECT quantity FROM products WHERE name = $1")
                .bind(name.as_str())
                .fetch_optional(&mut *tx)
                .await?;

        let quantity = match quantity {
            Some(quantity) => quantity,
            None => {
                // Auto-create the product at zero stock
                sqlx::query(
                    "INSERT INTO products (name, quantity) VALUES ($1, 0) \
                     ON CONFLICT (name) DO NOTHING",
                )
                .bind(name.as_str())
                .execute(&mut *tx)
                .await?;
                0
            }
        };

        tx.commit().await?;

        Ok(StockLevel {
            name: name.clone(),
            quantity,
        })
    }

    async fn update_stock(&self, name: &ProductName, delta: i64) -> Result<StockUpdate> {
        let mut tx = self.pool.begin().await?;

        let old: Option<i64> = sqlx::query_scalar("SELECT quantity FROM products WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(&mut *tx)
            .await?;
        let old = old.unwrap_or(0);

        let new = old + delta;
        if new < 0 {
            // Dropping the transaction rolls back; stored value unchanged.
            return Err(StockStoreError::NegativeStock { current: old });
        }

        sqlx::query(
            "INSERT INTO products (name, quantity) VALUES ($1, $2) \
             ON CONFLICT (name) DO UPDATE \
             SET quantity = EXCLUDED.quantity, last_updated = now()",
        )
        .bind(name.as_str())
        .bind(new)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        metrics::counter!("stock_updates_total").increment(1);

        Ok(StockUpdate {
            name: name.clone(),
            old,
            new,
        })
    }
}
