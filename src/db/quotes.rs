use crate::db::models::{Quote, QuoteDraft};
use crate::db::DbPool;
use async_trait::async_trait;
use sqlx::Row;

/// Persistence boundary for quotes.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Inserts a new quote; the store assigns the id.
    async fn create(&self, draft: &QuoteDraft) -> Result<Quote, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Quote>, sqlx::Error>;

    async fn find_all(&self) -> Result<Vec<Quote>, sqlx::Error>;

    /// Replaces every mutable field. Returns `None` without writing when the
    /// id does not exist.
    async fn update(&self, id: i64, draft: &QuoteDraft) -> Result<Option<Quote>, sqlx::Error>;

    /// Returns whether a row was removed. Deleting a missing id is not an error.
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;
}

#[derive(Clone)]
pub struct SqliteQuoteStore {
    pool: DbPool,
}

impl SqliteQuoteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuoteStore for SqliteQuoteStore {
    async fn create(&self, draft: &QuoteDraft) -> Result<Quote, sqlx::Error> {
        create_quote(&self.pool, draft).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Quote>, sqlx::Error> {
        get_quote_by_id(&self.pool, id).await
    }

    async fn find_all(&self) -> Result<Vec<Quote>, sqlx::Error> {
        list_quotes(&self.pool).await
    }

    async fn update(&self, id: i64, draft: &QuoteDraft) -> Result<Option<Quote>, sqlx::Error> {
        update_quote(&self.pool, id, draft).await
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        delete_quote(&self.pool, id).await
    }
}

pub async fn create_quote(pool: &DbPool, draft: &QuoteDraft) -> Result<Quote, sqlx::Error> {
    sqlx::query_as::<_, Quote>(
        r#"
        INSERT INTO quotes (annual_kilometers, postcode, registration_office, vehicle_type, calculated_premium)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(i64::from(draft.annual_kilometers))
    .bind(&draft.postcode)
    .bind(&draft.registration_office)
    .bind(draft.vehicle_type.as_str())
    .bind(draft.calculated_premium)
    .fetch_one(pool)
    .await
}

pub async fn get_quote_by_id(pool: &DbPool, id: i64) -> Result<Option<Quote>, sqlx::Error> {
    sqlx::query_as::<_, Quote>("SELECT * FROM quotes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_quotes(pool: &DbPool) -> Result<Vec<Quote>, sqlx::Error> {
    sqlx::query_as::<_, Quote>("SELECT * FROM quotes ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn update_quote(
    pool: &DbPool,
    id: i64,
    draft: &QuoteDraft,
) -> Result<Option<Quote>, sqlx::Error> {
    sqlx::query_as::<_, Quote>(
        r#"
        UPDATE quotes
        SET annual_kilometers = $1,
            postcode = $2,
            registration_office = $3,
            vehicle_type = $4,
            calculated_premium = $5
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(i64::from(draft.annual_kilometers))
    .bind(&draft.postcode)
    .bind(&draft.registration_office)
    .bind(draft.vehicle_type.as_str())
    .bind(draft.calculated_premium)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_quote(pool: &DbPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM quotes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count_quotes(pool: &DbPool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) as count FROM quotes")
        .fetch_one(pool)
        .await?;
    Ok(row.get("count"))
}
