//! # lingo-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `lingo-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lingo_db::pool::{create_pool, DatabaseConfig};
//! use lingo_db::repositories::PgFriendshipRepository;
//! use lingo_core::traits::FriendshipRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let friendships = PgFriendshipRepository::new(pool);
//!
//!     let count = friendships.count_friends(7.into()).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgActivityStatsRepository, PgFriendshipRepository, PgInvitationRepository,
    PgNotificationRepository, PgUserRepository,
};
