use crate::db::models::{NewRegion, RegionRecord};
use crate::db::DbPool;
use sqlx::{Row, Sqlite, Transaction};

/// Removes all reference rows. Locations go with them via the cascade.
pub async fn clear_regions(tx: &mut Transaction<'_, Sqlite>) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM region_data").execute(&mut **tx).await?;
    Ok(result.rows_affected())
}

pub async fn insert_regions(
    tx: &mut Transaction<'_, Sqlite>,
    batch: &[NewRegion],
) -> Result<(), sqlx::Error> {
    for region in batch {
        let region_id: i64 = sqlx::query(
            r#"
            INSERT INTO region_data (region_code, region_name, country, city, postal_code)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&region.region_code)
        .bind(&region.region_name)
        .bind(&region.country)
        .bind(&region.city)
        .bind(&region.postal_code)
        .fetch_one(&mut **tx)
        .await?
        .get("id");

        sqlx::query("INSERT INTO region_location (region_id, latitude, longitude) VALUES ($1, $2, $3)")
            .bind(region_id)
            .bind(region.location.latitude)
            .bind(region.location.longitude)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

const SELECT_REGION: &str = r#"
    SELECT r.id, r.region_code, r.region_name, r.country, r.city, r.postal_code,
           l.latitude, l.longitude
    FROM region_data r
    JOIN region_location l ON l.region_id = r.id
"#;

pub async fn find_regions_by_postal_code(
    pool: &DbPool,
    postal_code: &str,
) -> Result<Vec<RegionRecord>, sqlx::Error> {
    sqlx::query_as::<_, RegionRecord>(&format!("{SELECT_REGION} WHERE r.postal_code = $1 ORDER BY r.id"))
        .bind(postal_code)
        .fetch_all(pool)
        .await
}

pub async fn list_regions(pool: &DbPool) -> Result<Vec<RegionRecord>, sqlx::Error> {
    sqlx::query_as::<_, RegionRecord>(&format!("{SELECT_REGION} ORDER BY r.id"))
        .fetch_all(pool)
        .await
}

pub async fn count_regions(pool: &DbPool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) as count FROM region_data")
        .fetch_one(pool)
        .await?;
    Ok(row.get("count"))
}

pub async fn count_locations(pool: &DbPool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) as count FROM region_location")
        .fetch_one(pool)
        .await?;
    Ok(row.get("count"))
}
