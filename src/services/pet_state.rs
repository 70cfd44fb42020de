//! Pet state rules: how each action moves the three stats and how the stats
//! map onto a status label.
//!
//! Everything here is pure. Persisting the result (and refreshing
//! `last_interaction`) is the store's job, see `db::pets::save_levels`.

use std::ops::RangeInclusive;

use crate::models::pet::{PetLevels, PetStatus};
use crate::models::pet_action::PetActionKind;

/// Any stat strictly below this makes the pet sad.
pub const SAD_THRESHOLD: i32 = 30;
/// All three stats inside this band make the pet average.
pub const AVERAGE_BAND: RangeInclusive<i32> = 31..=50;

pub const FEED_HUNGER_GAIN: i32 = 10;
pub const PLAY_HAPPINESS_GAIN: i32 = 10;
pub const PLAY_HUNGER_COST: i32 = 15;
pub const PLAY_ENERGY_COST: i32 = 10;
pub const NAP_ENERGY_GAIN: i32 = 20;

/// Classify a pet from its three stats.
///
/// A stat of exactly 30 is neither sad nor inside the average band, so it
/// falls through to `Happy`, as does any mix that is not entirely inside the
/// band (e.g. 60/40/40).
pub fn classify_status(hunger: i32, happiness: i32, energy: i32) -> PetStatus {
    if hunger < SAD_THRESHOLD || happiness < SAD_THRESHOLD || energy < SAD_THRESHOLD {
        PetStatus::Sad
    } else if AVERAGE_BAND.contains(&hunger)
        && AVERAGE_BAND.contains(&happiness)
        && AVERAGE_BAND.contains(&energy)
    {
        PetStatus::Average
    } else {
        PetStatus::Happy
    }
}

pub fn classify(levels: PetLevels) -> PetStatus {
    classify_status(levels.hunger, levels.happiness, levels.energy)
}

pub fn apply_feed(levels: PetLevels) -> PetLevels {
    PetLevels::new(
        levels.hunger.saturating_add(FEED_HUNGER_GAIN),
        levels.happiness,
        levels.energy,
    )
}

pub fn apply_play(levels: PetLevels) -> PetLevels {
    PetLevels::new(
        levels.hunger.saturating_sub(PLAY_HUNGER_COST),
        levels.happiness.saturating_add(PLAY_HAPPINESS_GAIN),
        levels.energy.saturating_sub(PLAY_ENERGY_COST),
    )
}

pub fn apply_nap(levels: PetLevels) -> PetLevels {
    PetLevels::new(
        levels.hunger,
        levels.happiness,
        levels.energy.saturating_add(NAP_ENERGY_GAIN),
    )
}

pub fn apply(kind: PetActionKind, levels: PetLevels) -> PetLevels {
    match kind {
        PetActionKind::Feed => apply_feed(levels),
        PetActionKind::Play => apply_play(levels),
        PetActionKind::Nap => apply_nap(levels),
    }
}

/// User-facing confirmation for a completed action.
pub fn action_message(kind: PetActionKind, pet_name: &str) -> String {
    match kind {
        PetActionKind::Feed => format!("You fed {}", pet_name),
        PetActionKind::Play => format!("You played with {}", pet_name),
        PetActionKind::Nap => format!("{} took a nap and regained energy!", pet_name),
    }
}
