use chrono::Utc;
use sqlx::SqliteConnection;

use crate::models::pet_action::{PetActionKind, PetActionRecord};

pub const DEFAULT_LIST_LIMIT: i64 = 50;
pub const MAX_LIST_LIMIT: i64 = 200;

pub async fn record(
    conn: &mut SqliteConnection,
    kind: PetActionKind,
    pet_id: i64,
    user_id: i64,
) -> Result<PetActionRecord, sqlx::Error> {
    sqlx::query_as::<_, PetActionRecord>(
        r#"
        INSERT INTO pet_actions (action_type, pet_id, user_id, created_at)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING *
        "#,
    )
    .bind(kind)
    .bind(pet_id)
    .bind(user_id)
    .bind(Utc::now())
    .fetch_one(conn)
    .await
}

/// Most recent first.
pub async fn list_for_pet(
    conn: &mut SqliteConnection,
    pet_id: i64,
    user_id: i64,
    limit: Option<i64>,
) -> Result<Vec<PetActionRecord>, sqlx::Error> {
    let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);

    sqlx::query_as::<_, PetActionRecord>(
        r#"
        SELECT * FROM pet_actions
        WHERE pet_id = ?1 AND user_id = ?2
        ORDER BY id DESC
        LIMIT ?3
        "#,
    )
    .bind(pet_id)
    .bind(user_id)
    .bind(limit)
    .fetch_all(conn)
    .await
}
