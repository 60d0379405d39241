mod game;
mod query;
mod user;
