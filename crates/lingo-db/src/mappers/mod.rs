//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects,
//! plus the helpers repositories use to bind entity values.

mod friendship;
mod invitation;
mod notification;
mod user;

pub use notification::notification_ids_to_i64;
