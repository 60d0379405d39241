//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let game = factory::game::create_game(&db).await?;
//! let review = factory::review::create_review(&db, user.id, game.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .username("moderator")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod game;
pub mod helpers;
pub mod review;
pub mod user;

pub use game::create_game;
pub use review::create_review;
pub use user::create_user;
