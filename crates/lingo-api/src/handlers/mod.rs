//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod friends;
pub mod health;
pub mod invitations;
pub mod notifications;
