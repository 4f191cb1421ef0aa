use sqlx::PgPool;
use uuid::Uuid;

use super::types::*;

/// All presentations, most recently updated first.
pub async fn find_all(pool: &PgPool) -> Result<Vec<Presentation>, sqlx::Error> {
    sqlx::query_as::<_, Presentation>(
        "SELECT id, title, description, theme, created_at, updated_at \
         FROM presentations \
         ORDER BY updated_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Presentation>, sqlx::Error> {
    sqlx::query_as::<_, Presentation>(
        "SELECT id, title, description, theme, created_at, updated_at \
         FROM presentations \
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a presentation; the database assigns id and timestamps.
pub async fn create(pool: &PgPool, title: &str, theme: &str) -> Result<Presentation, sqlx::Error> {
    sqlx::query_as::<_, Presentation>(
        "INSERT INTO presentations (title, theme) VALUES ($1, $2) \
         RETURNING id, title, description, theme, created_at, updated_at",
    )
    .bind(title)
    .bind(theme)
    .fetch_one(pool)
    .await
}

/// Apply a partial update. Returns false when no row matched.
pub async fn update(pool: &PgPool, id: Uuid, patch: &PresentationPatch) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE presentations \
         SET title = COALESCE($2, title), \
             description = COALESCE($3, description), \
             theme = COALESCE($4, theme), \
             updated_at = $5 \
         WHERE id = $1",
    )
    .bind(id)
    .bind(patch.title.as_deref())
    .bind(patch.description.as_deref())
    .bind(patch.theme.as_deref())
    .bind(patch.updated_at)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
