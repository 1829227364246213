// src/core/types.rs
use crate::error::{ConversionError, ConversionResult};

/// The longest digit group the composer accepts.
pub const MAX_DIGITS: usize = 13;

/// A run of ASCII decimal digits converted as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGroup(String);

impl DigitGroup {
    /// Returns `None` when `s` is empty or holds anything but ASCII digits.
    /// Length is checked separately by [`DigitGroup::new`].
    pub fn parse(s: &str) -> Option<&str> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            Some(s)
        } else {
            None
        }
    }

    /// Validates an all-digit string against the 13-digit ceiling.
    pub fn new(digits: &str) -> ConversionResult<Self> {
        if DigitGroup::parse(digits).is_none() {
            return Err(ConversionError::InvalidDigit {
                key: digits.to_string(),
                width: digits.chars().count(),
            });
        }
        if digits.len() > MAX_DIGITS {
            return Err(ConversionError::Unsupported {
                digits: digits.to_string(),
                max: MAX_DIGITS,
            });
        }
        Ok(Self(digits.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Greek ordinal inflections recognised after a numeral ("23ος", "5η").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdinalSuffix {
    Os,
    Es,
    O,
    I,
    A,
    Oi,
}

impl OrdinalSuffix {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ος" => Some(Self::Os),
            "ες" => Some(Self::Es),
            "ο" => Some(Self::O),
            "η" => Some(Self::I),
            "α" => Some(Self::A),
            "οι" => Some(Self::Oi),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Os => "ος",
            Self::Es => "ες",
            Self::O => "ο",
            Self::I => "η",
            Self::A => "α",
            Self::Oi => "οι",
        }
    }

    /// The suffix with the stress mark moved onto it, used after stems
    /// that carry no accent of their own ("εικοστ" + "ός").
    pub fn stressed(self) -> &'static str {
        match self {
            Self::Os => "ός",
            Self::Es => "ές",
            Self::O => "ό",
            Self::I => "ή",
            Self::A => "ά",
            Self::Oi => "οί",
        }
    }
}

/// A numeral value paired with the ordinal ending it was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinalRequest {
    pub value: u64,
    pub suffix: OrdinalSuffix,
}

impl OrdinalRequest {
    /// Splits `<digits><suffix>`. Anything else (letters first, digits after
    /// the suffix, unknown endings) yields `None`.
    pub fn parse(token: &str) -> Option<Self> {
        let split = token.find(|c: char| !c.is_ascii_digit())?;
        let (digits, suffix) = token.split_at(split);
        if digits.is_empty() || suffix.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            value: digits.parse().ok()?,
            suffix: OrdinalSuffix::parse(suffix)?,
        })
    }
}
