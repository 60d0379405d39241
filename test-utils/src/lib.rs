//! Reviewboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the reviewboard
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, either from individual entity schemas or from the full migration set.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for users, games and reviews with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::User;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(User)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```
//!
//! Use `with_migrations()` instead of `with_table()` when a test depends on constraints the
//! entity schema cannot express, such as the one-review-per-game index or the rating check.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
