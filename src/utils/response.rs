use serde::Serialize;
use utoipa::ToSchema;

/// A payload that is either the value itself or a `{"message": ...}` object.
///
/// Several list operations report an empty result set as a structured
/// message rather than an empty array or a 404; which convention applies is
/// fixed per operation.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum OrMessage<T> {
    Value(T),
    Message { message: String },
}

impl<T> OrMessage<T> {
    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

impl<T: Serialize> OrMessage<Vec<T>> {
    /// Wrap a listing, substituting the given message when it is empty.
    pub fn listing(items: Vec<T>, empty_message: &str) -> Self {
        if items.is_empty() {
            Self::message(empty_message)
        } else {
            Self::Value(items)
        }
    }
}

/// Plain confirmation payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome of a bulk delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResult {
    pub deleted_count: u64,
}

/// Outcome of a mass update (vacuously successful on zero matches).
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateResult {
    pub modified_count: u64,
}
