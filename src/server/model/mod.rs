//! Domain models and operation-specific parameter types.

pub mod auth;
pub mod game;
pub mod list;
pub mod review;
pub mod user;
