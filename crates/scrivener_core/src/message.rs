//! Message types for provider requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A text message in a provider conversation.
///
/// # Examples
///
/// ```
/// use scrivener_core::{Message, Role};
///
/// let message = Message::user("Hello!");
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content(), "Hello!");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// The text of the message
    content: String,
}

impl Message {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}
