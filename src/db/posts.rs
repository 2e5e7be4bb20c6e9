//! Blog post storage.

use sqlx::PgPool;

use crate::models::post::{BlogPost, NewPostForm};

/// All posts in insertion order.
pub async fn list_all(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        "SELECT id, title, content, user_id, date_posted FROM blog_posts ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// Persist a validated post.
pub async fn insert(
    pool: &PgPool,
    form: &NewPostForm,
    user_id: i32,
) -> Result<BlogPost, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        INSERT INTO blog_posts (title, content, user_id)
        VALUES ($1, $2, $3)
        RETURNING id, title, content, user_id, date_posted
        "#,
    )
    .bind(&form.title)
    .bind(&form.content)
    .bind(user_id)
    .fetch_one(pool)
    .await
}
