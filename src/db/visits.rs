//! Daily page-view counters and per-address visit markers.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::visit::{Day, IpView, RecordedVisit};

/// Count one request from `ip` on `today`.
///
/// Both writes are single-statement upserts inside one transaction, so
/// concurrent first requests of a day neither lose increments nor create
/// duplicate rows.
pub async fn record_visit(
    pool: &PgPool,
    ip: &str,
    today: NaiveDate,
) -> Result<RecordedVisit, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let views = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO days (id, views)
        VALUES ($1, 1)
        ON CONFLICT (id) DO UPDATE SET views = days.views + 1
        RETURNING views
        "#,
    )
    .bind(today)
    .fetch_one(&mut *tx)
    .await?;

    let inserted = sqlx::query(
        r#"
        INSERT INTO ip_views (ip, date_id)
        VALUES ($1, $2)
        ON CONFLICT (ip, date_id) DO NOTHING
        "#,
    )
    .bind(ip)
    .bind(today)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    tx.commit().await?;

    Ok(RecordedVisit {
        views,
        first_for_ip: inserted == 1,
    })
}

/// All counters, oldest date first.
pub async fn list_days(pool: &PgPool) -> Result<Vec<Day>, sqlx::Error> {
    sqlx::query_as::<_, Day>("SELECT id, views FROM days ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Distinct visitor addresses recorded for `date`.
pub async fn visitors_on(pool: &PgPool, date: NaiveDate) -> Result<Vec<IpView>, sqlx::Error> {
    sqlx::query_as::<_, IpView>(
        "SELECT id, ip, date_id FROM ip_views WHERE date_id = $1 ORDER BY id",
    )
    .bind(date)
    .fetch_all(pool)
    .await
}
