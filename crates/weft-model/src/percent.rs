// SPDX-License-Identifier: Apache-2.0

use crate::ids::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The nominal full allocation for a composition's ratio sum.
pub const RATIO_FULL: f64 = 100.0;

/// A percentage value as entered in a ratio or loss field.
///
/// Values above 100 are accepted: over-allocation is a reportable
/// condition surfaced to the UI, not a structural error, because data
/// entry routinely passes through transient over-limit states while
/// components are still being added. Non-finite and negative inputs are
/// rejected outright; deserialization routes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Percent(f64);

impl Percent {
    pub const ZERO: Self = Self(0.0);

    pub fn new(value: f64) -> Result<Self, ParseError> {
        if !value.is_finite() {
            return Err(ParseError::InvalidFormat(
                "percentage must be a finite number",
            ));
        }
        if value < 0.0 {
            return Err(ParseError::InvalidFormat(
                "percentage must not be negative",
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn exceeds_full(self) -> bool {
        self.0 > RATIO_FULL
    }

    /// Shortest exact decimal rendering, stable for a given bit pattern.
    /// Used as the signature token for this value.
    #[must_use]
    pub fn canonical_token(self) -> String {
        format!("{}", self.0)
    }
}

impl TryFrom<f64> for Percent {
    type Error = ParseError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percent> for f64 {
    fn from(value: Percent) -> Self {
        value.0
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
