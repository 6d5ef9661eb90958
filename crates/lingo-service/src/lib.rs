//! # lingo-service
//!
//! Application layer containing the invitation, friendship and notification
//! use cases, their DTOs and the service error type.

pub mod dto;
pub mod services;

#[cfg(test)]
mod testing;

pub use dto::{
    DeleteReadResponse, FriendResponse, HealthChecks, HealthResponse, InvitationCreatedResponse,
    InvitationPreviewResponse, InviterSummary, MarkReadRequest, MarkReadResponse,
    NotificationResponse, PokeRequest, ReadHistoryQuery, ReadinessResponse,
    RespondInvitationRequest, UnreadCountResponse,
};
pub use services::{
    FriendService, FriendSettings, InvitationService, NotificationService, ServiceContext,
    ServiceError, ServiceResult,
};
