//! Summary length value object

use serde::{Deserialize, Deserializer, Serialize};

/// Desired summary length in words (Value Object)
///
/// Always within `[SummaryLength::MIN, SummaryLength::MAX]`; out-of-range
/// inputs clamp to the nearest bound rather than failing, so the session
/// can never hold an invalid length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SummaryLength(u32);

impl SummaryLength {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;
    pub const DEFAULT: u32 = 10;

    /// Create a length, clamping out-of-range values into `[MIN, MAX]`
    pub fn new(words: u32) -> Self {
        Self(words.clamp(Self::MIN, Self::MAX))
    }

    /// The length in words
    pub fn words(&self) -> u32 {
        self.0
    }

    /// One word longer, saturating at [`SummaryLength::MAX`]
    pub fn increment(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// One word shorter, saturating at [`SummaryLength::MIN`]
    pub fn decrement(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

impl Default for SummaryLength {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for SummaryLength {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Clamp on deserialization too, so config files can never smuggle
        // an out-of-range length into the session
        let words = u32::deserialize(deserializer)?;
        Ok(Self::new(words))
    }
}
