// SPDX-License-Identifier: Apache-2.0

use crate::ports::StoreError;
use weft_model::{CompositionError, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ComposeErrorCode {
    Validation,
    NotFound,
    Duplicate,
    DirectPurchase,
    Store,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeError {
    pub code: ComposeErrorCode,
    pub message: String,
}

impl ComposeError {
    #[must_use]
    pub fn new(code: ComposeErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ComposeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}
impl std::error::Error for ComposeError {}

impl From<CompositionError> for ComposeError {
    fn from(value: CompositionError) -> Self {
        let code = match value {
            CompositionError::DuplicateComponent(_) => ComposeErrorCode::Duplicate,
            CompositionError::NotFound(_) => ComposeErrorCode::NotFound,
            _ => ComposeErrorCode::Validation,
        };
        Self::new(code, value.to_string())
    }
}

impl From<ParseError> for ComposeError {
    fn from(value: ParseError) -> Self {
        Self::new(ComposeErrorCode::Validation, value.to_string())
    }
}

impl From<StoreError> for ComposeError {
    fn from(value: StoreError) -> Self {
        Self::new(ComposeErrorCode::Store, value.to_string())
    }
}
