use crate::catalog::ListId;
use thiserror::Error;

/// Errors raised when a record is mutated outside its fixed shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("'{key}' is not one of the {} options", list.name())]
    UnknownKey { list: ListId, key: String },

    #[error("no list entry at index {index} (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
