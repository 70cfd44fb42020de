pub mod pet_state;
