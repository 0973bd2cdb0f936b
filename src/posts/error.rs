#![allow(clippy::module_name_repetitions)]

use juniper::{graphql_value, FieldError, IntoFieldError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum PostError {
    WriteFailed(diesel::result::Error),
    NotFound { id: String },
    ReadFailed(diesel::result::Error),
}

impl PostError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::WriteFailed(_) => "WRITE_FAILED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::ReadFailed(_) => "READ_FAILED",
        }
    }
}

impl fmt::Display for PostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed(error) => write!(f, "failed to create post: {}", error),
            Self::NotFound { id } => write!(f, "post not found: {}", id),
            Self::ReadFailed(error) => write!(f, "failed to read post: {}", error),
        }
    }
}

impl Error for PostError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::WriteFailed(error) | Self::ReadFailed(error) => Some(error),
            Self::NotFound { .. } => None,
        }
    }
}

impl IntoFieldError for PostError {
    fn into_field_error(self) -> FieldError {
        let code = self.code();
        FieldError::new(self, graphql_value!({ "code": code }))
    }
}
