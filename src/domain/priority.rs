//! Task priority levels.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TodoError;

/// Priority of a task, stored as the integer 1, 2 or 3.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    #[default]
    Low = 1,
    Medium = 2,
    High = 3,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = TodoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            _ => Err(TodoError::InvalidArgument(format!(
                "Priority must be 1, 2 or 3 (got {value})"
            ))),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority as u8
    }
}

impl Priority {
    /// Accepts `1|2|3` or `low|medium|med|high`, case-insensitive.
    pub fn from_str_loose(s: &str) -> Result<Self, TodoError> {
        match s.trim().to_lowercase().as_str() {
            "1" | "low" => Ok(Self::Low),
            "2" | "medium" | "med" => Ok(Self::Medium),
            "3" | "high" => Ok(Self::High),
            _ => Err(TodoError::InvalidArgument(format!(
                "Unknown priority: {s} (expected 1-3 or low/medium/high)"
            ))),
        }
    }

    pub fn level(self) -> u8 {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_low() {
        assert_eq!(Priority::default(), Priority::Low);
    }

    #[test]
    fn ordering_follows_level() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert_eq!(Priority::High.level(), 3);
    }

    #[test]
    fn display() {
        assert_eq!(Priority::Low.to_string(), "Low");
        assert_eq!(Priority::Medium.to_string(), "Medium");
        assert_eq!(Priority::High.to_string(), "High");
    }

    #[test]
    fn from_str_loose_variants() {
        assert_eq!(Priority::from_str_loose("1").unwrap(), Priority::Low);
        assert_eq!(Priority::from_str_loose("Med").unwrap(), Priority::Medium);
        assert_eq!(Priority::from_str_loose(" HIGH ").unwrap(), Priority::High);
        assert!(Priority::from_str_loose("0").is_err());
        assert!(Priority::from_str_loose("4").is_err());
        assert!(Priority::from_str_loose("urgent").is_err());
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert!(Priority::try_from(0).is_err());
        assert!(Priority::try_from(4).is_err());
        assert_eq!(Priority::try_from(2).unwrap(), Priority::Medium);
    }

    #[test]
    fn serde_as_integer() {
        let json = serde_json::to_string(&Priority::Medium).unwrap();
        assert_eq!(json, "2");
        let parsed: Priority = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, Priority::High);
        assert!(serde_json::from_str::<Priority>("7").is_err());
    }
}
