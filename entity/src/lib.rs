//! SeaORM entities for users, games and reviews.

pub mod prelude;

pub mod game;
pub mod review;
pub mod user;
