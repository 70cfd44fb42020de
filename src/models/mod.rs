pub mod pet;
pub mod pet_action;
pub mod user;
