use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pet {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub hunger_level: i32,
    pub happiness_level: i32,
    pub energy_level: i32,
    pub status: PetStatus,
    pub last_interaction: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Pet {
    pub fn levels(&self) -> PetLevels {
        PetLevels::new(self.hunger_level, self.happiness_level, self.energy_level)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
pub enum PetStatus {
    Sad,
    Average,
    Happy,
}

/// The three bounded stats of a pet. Every constructor clamps into `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetLevels {
    pub hunger: i32,
    pub happiness: i32,
    pub energy: i32,
}

impl PetLevels {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;

    pub fn new(hunger: i32, happiness: i32, energy: i32) -> Self {
        Self {
            hunger: hunger.clamp(Self::MIN, Self::MAX),
            happiness: happiness.clamp(Self::MIN, Self::MAX),
            energy: energy.clamp(Self::MIN, Self::MAX),
        }
    }
}

impl Default for PetLevels {
    fn default() -> Self {
        Self::new(50, 50, 50)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AdoptPetRequest {
    #[validate(required, length(min = 1, max = 64, message = "Name must be 1-64 characters"))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[validate(required, length(min = 1, max = 32, message = "Type must be 1-32 characters"))]
    pub pet_type: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RenamePetRequest {
    #[validate(required, length(min = 1, max = 64, message = "Name must be 1-64 characters"))]
    pub new_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PetActionRequest {
    #[validate(required)]
    pub action_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PetWithStatus {
    #[serde(flatten)]
    pub pet: Pet,
    pub seconds_since_interaction: i64,
}

#[derive(Debug, Serialize)]
pub struct PetStatusResponse {
    pub id: i64,
    pub status: PetStatus,
}

/// Body returned by every mutating pet endpoint.
#[derive(Debug, Serialize)]
pub struct PetMutationResponse {
    pub message: String,
    pub pet: Pet,
}
