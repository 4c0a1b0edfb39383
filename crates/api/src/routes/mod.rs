pub mod drone;
pub mod health;
pub mod location;
pub mod user;
