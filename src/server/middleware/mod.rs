//! Request extractors for authentication, sessions and body validation.

pub mod auth;
pub mod session;
pub mod validation;

#[cfg(test)]
mod test;
