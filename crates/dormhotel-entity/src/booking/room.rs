//! Room type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bookable room categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "room_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// Single occupancy room.
    Single,
    /// Double occupancy room.
    Double,
    /// Suite.
    Suite,
}

impl RoomType {
    /// Return the room type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Suite => "suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = dormhotel_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "suite" => Ok(Self::Suite),
            _ => Err(dormhotel_core::AppError::validation(format!(
                "Invalid room type: '{s}'. Expected one of: single, double, suite"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_exact() {
        assert_eq!("suite".parse::<RoomType>().unwrap(), RoomType::Suite);
        assert!("penthouse".parse::<RoomType>().is_err());
        assert!("Single".parse::<RoomType>().is_err());
    }
}
