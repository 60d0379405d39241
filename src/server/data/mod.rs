//! Data access layer.
//!
//! Repositories take a borrowed `DatabaseConnection`, return `Result<_, DbErr>`, and convert
//! entity models into domain models before returning. List queries go through `query`.

pub mod game;
pub mod query;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
