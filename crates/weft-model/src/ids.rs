// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const ID_MAX_LEN: usize = 128;
pub const NAME_MAX_LEN: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    Trimmed(&'static str),
    TooLong(&'static str, usize),
    InvalidFormat(&'static str),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::Trimmed(name) => {
                write!(f, "{name} must not contain leading/trailing whitespace")
            }
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
            Self::InvalidFormat(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ParseError {}

pub fn parse_component_id(input: &str) -> Result<ComponentId, ParseError> {
    ComponentId::parse(input)
}

pub fn parse_item_id(input: &str) -> Result<ItemId, ParseError> {
    ItemId::parse(input)
}

/// Display names arrive from form input; trimming here is the only
/// normalization applied before storage.
pub fn parse_display_name(input: &str) -> Result<String, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty("display name"));
    }
    if trimmed.len() > NAME_MAX_LEN {
        return Err(ParseError::TooLong("display name", NAME_MAX_LEN));
    }
    Ok(trimmed.to_string())
}

/// Opaque catalog key for a selectable component (e.g. a yarn).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct ComponentId(String);

impl ComponentId {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("component_id"));
        }
        if input.trim() != input {
            return Err(ParseError::Trimmed("component_id"));
        }
        if input.len() > ID_MAX_LEN {
            return Err(ParseError::TooLong("component_id", ID_MAX_LEN));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ComponentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of an item record, allocated on create and stable across edits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct ItemId(String);

impl ItemId {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("item_id"));
        }
        if input.trim() != input {
            return Err(ParseError::Trimmed("item_id"));
        }
        if input.len() > ID_MAX_LEN {
            return Err(ParseError::TooLong("item_id", ID_MAX_LEN));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
