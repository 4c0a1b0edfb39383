pub mod drone;
pub mod location;
pub mod schedule;
pub mod time_slot;
pub mod user;
