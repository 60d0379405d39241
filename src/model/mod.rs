pub mod api;
pub mod auth;
pub mod game;
pub mod review;
pub mod user;
