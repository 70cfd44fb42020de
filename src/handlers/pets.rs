use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::auth::AuthUser;
use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::pet::{
    AdoptPetRequest, PetActionRequest, PetMutationResponse, PetStatusResponse, PetWithStatus,
    RenamePetRequest,
};
use crate::models::pet_action::{PetActionKind, PetActionQuery, PetActionRecord};
use crate::services::pet_state;
use crate::AppState;

fn pet_not_found() -> AppError {
    AppError::NotFound("Pet not found".into())
}

pub async fn list_pets(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<PetWithStatus>>> {
    let mut conn = state.db.acquire().await?;
    let pets = db::pets::list_for_user(&mut conn, auth_user.id).await?;
    let now = Utc::now();

    let result = pets
        .into_iter()
        .map(|mut pet| {
            pet.status = pet_state::classify(pet.levels());
            let seconds_since_interaction = (now - pet.last_interaction).num_seconds().max(0);
            PetWithStatus {
                pet,
                seconds_since_interaction,
            }
        })
        .collect();

    Ok(Json(result))
}

pub async fn adopt_pet(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(body): Json<AdoptPetRequest>,
) -> AppResult<Json<PetMutationResponse>> {
    body.validate()?;
    let name = body.name.as_deref().unwrap_or_default().trim();
    let pet_type = body.pet_type.as_deref().unwrap_or_default().trim();
    if name.is_empty() || pet_type.is_empty() {
        return Err(AppError::Validation("Pet name and type are required".into()));
    }

    let mut tx = state.db.begin().await?;
    let pet = db::pets::insert_pet(&mut tx, auth_user.id, name, pet_type).await?;
    tx.commit().await?;

    tracing::info!(pet_id = pet.id, user_id = auth_user.id, pet_type = %pet.pet_type, "Pet adopted");

    Ok(Json(PetMutationResponse {
        message: format!("Successfully adopted {} the {}", pet.name, pet.pet_type),
        pet,
    }))
}

async fn run_action(
    state: &AppState,
    auth_user: &AuthUser,
    pet_id: i64,
    kind: PetActionKind,
) -> AppResult<PetMutationResponse> {
    let mut tx = state.db.begin().await?;

    let pet = db::pets::apply_action(&mut tx, pet_id, auth_user.id, kind)
        .await?
        .ok_or_else(pet_not_found)?;
    db::actions::record(&mut tx, kind, pet.id, auth_user.id).await?;

    tx.commit().await?;

    tracing::info!(
        pet_id = pet.id,
        user_id = auth_user.id,
        action = %kind,
        hunger = pet.hunger_level,
        happiness = pet.happiness_level,
        energy = pet.energy_level,
        status = ?pet.status,
        "Pet action applied"
    );

    Ok(PetMutationResponse {
        message: pet_state::action_message(kind, &pet.name),
        pet,
    })
}

pub async fn perform_action(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(pet_id): Path<i64>,
    Json(body): Json<PetActionRequest>,
) -> AppResult<Json<PetMutationResponse>> {
    body.validate()?;
    let kind: PetActionKind = body.action_type.as_deref().unwrap_or_default().parse()?;

    run_action(&state, &auth_user, pet_id, kind).await.map(Json)
}

pub async fn nap(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(pet_id): Path<i64>,
) -> AppResult<Json<PetMutationResponse>> {
    run_action(&state, &auth_user, pet_id, PetActionKind::Nap)
        .await
        .map(Json)
}

/// Public: anyone holding a pet id may read its status.
pub async fn pet_status(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
) -> AppResult<Json<PetStatusResponse>> {
    let mut conn = state.db.acquire().await?;
    let pet = db::pets::find_by_id(&mut conn, pet_id)
        .await?
        .ok_or_else(pet_not_found)?;

    Ok(Json(PetStatusResponse {
        id: pet.id,
        status: pet_state::classify(pet.levels()),
    }))
}

pub async fn rename_pet(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(pet_id): Path<i64>,
    Json(body): Json<RenamePetRequest>,
) -> AppResult<Json<PetMutationResponse>> {
    body.validate()?;
    let new_name = body.new_name.as_deref().unwrap_or_default().trim();
    if new_name.is_empty() {
        return Err(AppError::Validation("New name is required".into()));
    }

    let mut tx = state.db.begin().await?;
    let pet = db::pets::rename(&mut tx, pet_id, auth_user.id, new_name)
        .await?
        .ok_or_else(pet_not_found)?;
    tx.commit().await?;

    tracing::info!(pet_id = pet.id, user_id = auth_user.id, "Pet renamed");

    Ok(Json(PetMutationResponse {
        message: format!("Successfully updated the pet's name to {}", pet.name),
        pet,
    }))
}

pub async fn delete_pet(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(pet_id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let mut conn = state.db.acquire().await?;
    if !db::pets::delete_owned(&mut conn, pet_id, auth_user.id).await? {
        return Err(pet_not_found());
    }

    tracing::info!(pet_id = pet_id, user_id = auth_user.id, "Pet deleted");

    Ok(Json(serde_json::json!({
        "message": "Pet deleted successfully",
        "deleted": true,
        "id": pet_id,
    })))
}

pub async fn list_actions(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(pet_id): Path<i64>,
    Query(query): Query<PetActionQuery>,
) -> AppResult<Json<Vec<PetActionRecord>>> {
    let mut conn = state.db.acquire().await?;
    db::pets::find_owned(&mut conn, pet_id, auth_user.id)
        .await?
        .ok_or_else(pet_not_found)?;

    let actions = db::actions::list_for_pet(&mut conn, pet_id, auth_user.id, query.limit).await?;
    Ok(Json(actions))
}
