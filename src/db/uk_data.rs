//! Read access to the constituency dataset, plus the upsert used by the
//! dataset import.

use sqlx::PgPool;

use crate::models::uk_data::{UkData, UkDataRecord};

pub async fn list_all(pool: &PgPool) -> Result<Vec<UkData>, sqlx::Error> {
    sqlx::query_as::<_, UkData>(
        r#"
        SELECT id, constituency_name, region,
               c11_female, c11_fulltime_student, c11_retired, c11_house_owned,
               total_vote19, lab_vote19, con_vote19, ld_vote19
        FROM uk_data
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Insert a constituency, replacing the figures of an existing one with the
/// same name.
pub async fn upsert(pool: &PgPool, record: &UkDataRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO uk_data (constituency_name, region,
            c11_female, c11_fulltime_student, c11_retired, c11_house_owned,
            total_vote19, lab_vote19, con_vote19, ld_vote19)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ON CONFLICT (constituency_name) DO UPDATE SET
            region = EXCLUDED.region,
            c11_female = EXCLUDED.c11_female,
            c11_fulltime_student = EXCLUDED.c11_fulltime_student,
            c11_retired = EXCLUDED.c11_retired,
            c11_house_owned = EXCLUDED.c11_house_owned,
            total_vote19 = EXCLUDED.total_vote19,
            lab_vote19 = EXCLUDED.lab_vote19,
            con_vote19 = EXCLUDED.con_vote19,
            ld_vote19 = EXCLUDED.ld_vote19
        "#,
    )
    .bind(&record.constituency_name)
    .bind(&record.region)
    .bind(record.c11_female)
    .bind(record.c11_fulltime_student)
    .bind(record.c11_retired)
    .bind(record.c11_house_owned)
    .bind(record.total_vote19)
    .bind(record.lab_vote19)
    .bind(record.con_vote19)
    .bind(record.ld_vote19)
    .execute(pool)
    .await?;
    Ok(())
}
