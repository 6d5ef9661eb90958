//! Caller identity extractor
//!
//! The upstream authentication layer forwards the caller's handle in the
//! `x-user-handle` header. It is resolved to an internal user id here, before
//! any handler touches friendships or notifications.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderName, HeaderValue},
};
use axum_extra::{headers, headers::Header, TypedHeader};
use lingo_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Header carrying the authenticated caller's handle
pub const USER_HANDLE_HEADER: &str = "x-user-handle";

static X_USER_HANDLE: HeaderName = HeaderName::from_static(USER_HANDLE_HEADER);

/// Typed `x-user-handle` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XUserHandle(pub String);

impl Header for XUserHandle {
    fn name() -> &'static HeaderName {
        &X_USER_HANDLE
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        let handle = value
            .to_str()
            .map_err(|_| headers::Error::invalid())?
            .trim();

        if handle.is_empty() {
            return Err(headers::Error::invalid());
        }

        Ok(Self(handle.to_string()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(std::iter::once(value));
        }
    }
}

/// Caller resolved from the `x-user-handle` header
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Internal id of the caller
    pub user_id: UserId,
    /// Handle as supplied by the caller
    pub handle: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(XUserHandle(handle)) =
            TypedHeader::<XUserHandle>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    if rejection.is_missing() {
                        ApiError::MissingIdentity
                    } else {
                        ApiError::InvalidIdentity
                    }
                })?;

        let app_state = AppState::from_ref(state);
        let user_id = app_state
            .service_context()
            .resolve_handle(&handle)
            .await
            .inspect_err(|e| {
                tracing::debug!(handle = %handle, error = %e, "Caller handle not resolved");
            })?;

        Ok(CurrentUser { user_id, handle })
    }
}
