use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use super::types::*;

const SLIDE_COLUMNS: &str = "id, presentation_id, order_index, title, content, layout, \
                             background_color, notes, created_at, updated_at";

/// Slides of a presentation in presentation order.
pub async fn find_for_presentation(pool: &PgPool, presentation_id: Uuid) -> Result<Vec<Slide>, sqlx::Error> {
    let sql = format!(
        "SELECT {SLIDE_COLUMNS} FROM slides \
         WHERE presentation_id = $1 \
         ORDER BY order_index, created_at"
    );
    sqlx::query_as::<_, Slide>(&sql)
        .bind(presentation_id)
        .fetch_all(pool)
        .await
}

pub async fn create(pool: &PgPool, new: &NewSlide) -> Result<Slide, sqlx::Error> {
    let sql = format!(
        "INSERT INTO slides (presentation_id, order_index, title, content, layout) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING {SLIDE_COLUMNS}"
    );
    sqlx::query_as::<_, Slide>(&sql)
        .bind(new.presentation_id)
        .bind(new.order_index)
        .bind(&new.title)
        .bind(Json(&new.content))
        .bind(&new.layout)
        .fetch_one(pool)
        .await
}

/// Apply a partial update. Returns false when no row matched.
pub async fn update(pool: &PgPool, id: Uuid, patch: &SlidePatch) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE slides \
         SET title = COALESCE($2, title), \
             content = COALESCE($3, content), \
             layout = COALESCE($4, layout), \
             notes = COALESCE($5, notes), \
             order_index = COALESCE($6, order_index), \
             updated_at = $7 \
         WHERE id = $1",
    )
    .bind(id)
    .bind(patch.title.as_deref())
    .bind(patch.content.as_ref().map(Json))
    .bind(patch.layout.as_deref())
    .bind(patch.notes.as_deref())
    .bind(patch.order_index)
    .bind(patch.updated_at)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a slide. Returns false when no row matched.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM slides WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
