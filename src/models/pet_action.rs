use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PetActionKind {
    Feed,
    Play,
    Nap,
}

impl PetActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Play => "play",
            Self::Nap => "nap",
        }
    }
}

impl fmt::Display for PetActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown action type: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for PetActionKind {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feed" => Ok(Self::Feed),
            "play" => Ok(Self::Play),
            "nap" => Ok(Self::Nap),
            _ => Err(UnknownAction(s.to_string())),
        }
    }
}

/// One row of the append-only interaction log.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PetActionRecord {
    pub id: i64,
    pub action_type: PetActionKind,
    pub pet_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct PetActionQuery {
    pub limit: Option<i64>,
}
