//! Pet persistence. Every function takes the connection (usually a
//! transaction) it should run on; callers own commit/rollback.

use chrono::Utc;
use sqlx::SqliteConnection;

use crate::models::pet::{Pet, PetLevels};
use crate::models::pet_action::PetActionKind;
use crate::services::pet_state;

pub async fn insert_pet(
    conn: &mut SqliteConnection,
    user_id: i64,
    name: &str,
    pet_type: &str,
) -> Result<Pet, sqlx::Error> {
    let levels = PetLevels::default();
    let now = Utc::now();

    sqlx::query_as::<_, Pet>(
        r#"
        INSERT INTO pets (user_id, name, pet_type, hunger_level, happiness_level, energy_level, status, last_interaction, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(pet_type)
    .bind(levels.hunger)
    .bind(levels.happiness)
    .bind(levels.energy)
    .bind(pet_state::classify(levels))
    .bind(now)
    .fetch_one(conn)
    .await
}

pub async fn list_for_user(conn: &mut SqliteConnection, user_id: i64) -> Result<Vec<Pet>, sqlx::Error> {
    sqlx::query_as::<_, Pet>("SELECT * FROM pets WHERE user_id = ?1 ORDER BY id ASC")
        .bind(user_id)
        .fetch_all(conn)
        .await
}

pub async fn find_by_id(conn: &mut SqliteConnection, pet_id: i64) -> Result<Option<Pet>, sqlx::Error> {
    sqlx::query_as::<_, Pet>("SELECT * FROM pets WHERE id = ?1")
        .bind(pet_id)
        .fetch_optional(conn)
        .await
}

pub async fn find_owned(
    conn: &mut SqliteConnection,
    pet_id: i64,
    user_id: i64,
) -> Result<Option<Pet>, sqlx::Error> {
    sqlx::query_as::<_, Pet>("SELECT * FROM pets WHERE id = ?1 AND user_id = ?2")
        .bind(pet_id)
        .bind(user_id)
        .fetch_optional(conn)
        .await
}

/// Persist new levels together with the status they imply and a fresh
/// `last_interaction`.
pub async fn save_levels(
    conn: &mut SqliteConnection,
    pet_id: i64,
    levels: PetLevels,
) -> Result<Pet, sqlx::Error> {
    sqlx::query_as::<_, Pet>(
        r#"
        UPDATE pets SET
            hunger_level = ?2,
            happiness_level = ?3,
            energy_level = ?4,
            status = ?5,
            last_interaction = ?6
        WHERE id = ?1
        RETURNING *
        "#,
    )
    .bind(pet_id)
    .bind(levels.hunger)
    .bind(levels.happiness)
    .bind(levels.energy)
    .bind(pet_state::classify(levels))
    .bind(Utc::now())
    .fetch_one(conn)
    .await
}

/// Claim the pet row for writing. Must run before any read in the
/// transaction so concurrent writers queue on the busy timeout.
async fn lock_owned(
    conn: &mut SqliteConnection,
    pet_id: i64,
    user_id: i64,
) -> Result<Option<Pet>, sqlx::Error> {
    sqlx::query_as::<_, Pet>(
        r#"
        UPDATE pets SET last_interaction = ?3
        WHERE id = ?1 AND user_id = ?2
        RETURNING *
        "#,
    )
    .bind(pet_id)
    .bind(user_id)
    .bind(Utc::now())
    .fetch_optional(conn)
    .await
}

/// Read-modify-write for a single action. `None` when the pet does not exist
/// or belongs to someone else.
pub async fn apply_action(
    conn: &mut SqliteConnection,
    pet_id: i64,
    user_id: i64,
    kind: PetActionKind,
) -> Result<Option<Pet>, sqlx::Error> {
    let Some(pet) = lock_owned(&mut *conn, pet_id, user_id).await? else {
        return Ok(None);
    };

    let next = pet_state::apply(kind, pet.levels());
    save_levels(conn, pet.id, next).await.map(Some)
}

pub async fn rename(
    conn: &mut SqliteConnection,
    pet_id: i64,
    user_id: i64,
    new_name: &str,
) -> Result<Option<Pet>, sqlx::Error> {
    let Some(pet) = lock_owned(&mut *conn, pet_id, user_id).await? else {
        return Ok(None);
    };

    sqlx::query_as::<_, Pet>(
        r#"
        UPDATE pets SET name = ?2, status = ?3, last_interaction = ?4
        WHERE id = ?1
        RETURNING *
        "#,
    )
    .bind(pet.id)
    .bind(new_name)
    .bind(pet_state::classify(pet.levels()))
    .bind(Utc::now())
    .fetch_one(conn)
    .await
    .map(Some)
}

pub async fn delete_owned(
    conn: &mut SqliteConnection,
    pet_id: i64,
    user_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM pets WHERE id = ?1 AND user_id = ?2")
        .bind(pet_id)
        .bind(user_id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn count_for_user(conn: &mut SqliteConnection, user_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pets WHERE user_id = ?1")
        .bind(user_id)
        .fetch_one(conn)
        .await
}
