//! Validated shared primitives for the triage engine.
//!
//! These types guarantee their invariants at construction so downstream code
//! never has to re-check patient demographics before using them in a summary
//! or hand-off payload.

/// Errors that can occur when creating validated demographic types.
#[derive(Debug, thiserror::Error)]
pub enum DemographicsError {
    /// The patient name was empty or contained only whitespace
    #[error("patient name cannot be empty")]
    EmptyName,
    /// The patient name exceeded the maximum supported length
    #[error("patient name exceeds maximum length of {max} characters")]
    NameTooLong { max: usize },
    /// The age was outside the plausible human range
    #[error("age {0} is outside the supported range 0-{max}", max = Age::MAX)]
    AgeOutOfRange(u16),
}

/// A patient name that is guaranteed non-empty.
///
/// Wraps a `String` and ensures it contains at least one non-whitespace
/// character. Input is trimmed of leading and trailing whitespace during
/// construction, and bounded in length so a name is always safe to embed in
/// a compact hand-off payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientName(String);

impl PatientName {
    /// Upper bound on the stored name length, applied after trimming.
    pub const MAX_LEN: usize = 120;

    /// Creates a new `PatientName` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the
    /// trimmed result is empty or longer than [`PatientName::MAX_LEN`], an
    /// error is returned.
    pub fn new(input: impl AsRef<str>) -> Result<Self, DemographicsError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DemographicsError::EmptyName);
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(DemographicsError::NameTooLong { max: Self::MAX_LEN });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PatientName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PatientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for PatientName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PatientName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PatientName::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A patient age in whole years, bounded to a plausible human range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(u16);

impl Age {
    /// Oldest age accepted at registration.
    pub const MAX: u16 = 130;

    /// Creates a new `Age`, rejecting values above [`Age::MAX`].
    pub fn new(years: u16) -> Result<Self, DemographicsError> {
        if years > Self::MAX {
            return Err(DemographicsError::AgeOutOfRange(years));
        }
        Ok(Self(years))
    }

    /// Returns the age in whole years.
    pub fn years(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for Age {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Age {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let years = u16::deserialize(deserializer)?;
        Age::new(years).map_err(serde::de::Error::custom)
    }
}
