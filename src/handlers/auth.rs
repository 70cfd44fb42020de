use axum::{extract::State, Json};
use chrono::{Duration, Utc};
use serde::Deserialize;
use sqlx::SqlitePool;
use validator::Validate;

use crate::auth::{
    jwt::{create_token_pair, hash_token, verify_token, TokenPair, TokenType},
    password::{hash_password, verify_password},
    AuthUser,
};
use crate::config::Config;
use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::user::{RefreshToken, User, UserProfile};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

async fn store_refresh_token(
    db: &SqlitePool,
    user_id: i64,
    raw_refresh_token: &str,
    ttl_secs: i64,
    parent_token_id: Option<i64>,
) -> AppResult<()> {
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO refresh_tokens (user_id, token_hash, expires_at, parent_token_id, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(user_id)
    .bind(hash_token(raw_refresh_token))
    .bind(now + Duration::seconds(ttl_secs))
    .bind(parent_token_id)
    .bind(now)
    .execute(db)
    .await?;

    Ok(())
}

/// Create a token pair AND persist the refresh token hash.
async fn issue_token_pair(
    db: &SqlitePool,
    user_id: i64,
    username: &str,
    config: &Config,
    parent_token_id: Option<i64>,
) -> AppResult<TokenPair> {
    let tokens = create_token_pair(user_id, username, config)?;
    store_refresh_token(
        db,
        user_id,
        &tokens.refresh_token,
        config.jwt_refresh_ttl_secs,
        parent_token_id,
    )
    .await?;
    Ok(tokens)
}

async fn revoke_all_user_tokens(db: &SqlitePool, user_id: i64) -> AppResult<()> {
    sqlx::query("UPDATE refresh_tokens SET revoked = 1 WHERE user_id = ?1 AND revoked = 0")
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn register(
    State(state): State<AppState>,
    Json(mut body): Json<RegisterRequest>,
) -> AppResult<Json<TokenPair>> {
    body.username = body.username.trim().to_string();
    body.validate()?;
    let username = body.username.as_str();

    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = ?1")
        .bind(username)
        .fetch_one(&state.db)
        .await?;

    if existing > 0 {
        return Err(AppError::Conflict(format!("User {} is already registered", username)));
    }

    let pwd_hash = hash_password(&body.password)?;

    let user_id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO users (username, password_hash, created_at)
        VALUES (?1, ?2, ?3)
        RETURNING id
        "#,
    )
    .bind(username)
    .bind(&pwd_hash)
    .bind(Utc::now())
    .fetch_one(&state.db)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(format!("User {} is already registered", username))
        }
        other => AppError::Database(other),
    })?;

    tracing::info!(user_id = user_id, username = %username, "User registered");

    let tokens = issue_token_pair(&state.db, user_id, username, &state.config, None).await?;
    Ok(Json(tokens))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<TokenPair>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?1")
        .bind(body.username.trim())
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(&body.password, &user.password_hash)? {
        tracing::debug!(user_id = user.id, "Login rejected: bad password");
        return Err(AppError::Unauthorized);
    }

    let tokens = issue_token_pair(&state.db, user.id, &user.username, &state.config, None).await?;
    Ok(Json(tokens))
}

pub async fn refresh(
    State(state): State<AppState>,
    Json(body): Json<RefreshRequest>,
) -> AppResult<Json<TokenPair>> {
    let token_data = verify_token(&body.refresh_token, &state.config)?;

    if token_data.claims.token_type != TokenType::Refresh {
        return Err(AppError::Unauthorized);
    }

    let stored = sqlx::query_as::<_, RefreshToken>(
        "SELECT id, user_id, expires_at, revoked FROM refresh_tokens WHERE token_hash = ?1",
    )
    .bind(hash_token(&body.refresh_token))
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::Unauthorized)?;

    // A revoked token coming back means it leaked: revoke the whole family.
    if stored.revoked {
        tracing::warn!(
            user_id = stored.user_id,
            token_id = stored.id,
            "Refresh token reuse detected, revoking all tokens for user"
        );
        revoke_all_user_tokens(&state.db, stored.user_id).await?;
        return Err(AppError::Unauthorized);
    }

    if stored.user_id != token_data.claims.sub || stored.expires_at <= Utc::now() {
        return Err(AppError::Unauthorized);
    }

    sqlx::query("UPDATE refresh_tokens SET revoked = 1 WHERE id = ?1")
        .bind(stored.id)
        .execute(&state.db)
        .await?;

    let tokens = issue_token_pair(
        &state.db,
        token_data.claims.sub,
        &token_data.claims.username,
        &state.config,
        Some(stored.id),
    )
    .await?;
    Ok(Json(tokens))
}

pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<serde_json::Value>> {
    revoke_all_user_tokens(&state.db, auth_user.id).await?;
    Ok(Json(serde_json::json!({ "message": "Logged out successfully" })))
}

pub async fn me(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<Json<UserProfile>> {
    let mut conn = state.db.acquire().await?;

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
        .bind(auth_user.id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    let pet_count = db::pets::count_for_user(&mut conn, user.id).await?;

    Ok(Json(UserProfile {
        id: user.id,
        username: user.username,
        pet_count,
        created_at: user.created_at,
    }))
}
