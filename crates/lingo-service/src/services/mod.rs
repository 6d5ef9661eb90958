//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod friend;
pub mod invitation;
pub mod notification;

// Re-export all services for convenience
pub use context::{FriendSettings, ServiceContext};
pub use error::{ServiceError, ServiceResult};
pub use friend::FriendService;
pub use invitation::InvitationService;
pub use notification::NotificationService;
