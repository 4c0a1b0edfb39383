//! # DroneDock Core
//!
//! Shared domain types for the DroneDock drone-rental service: the error
//! taxonomy and the request/response models exchanged between the API and
//! database layers. This crate performs no IO.

pub mod errors;
pub mod models;
