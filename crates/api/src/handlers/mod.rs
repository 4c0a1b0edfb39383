pub mod drone;
pub mod location;
pub mod schedule;
pub mod user;
