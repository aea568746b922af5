//! Relationship classification for potential diners.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// How a person relates to the list owner.
///
/// The five variants mirror the person form's picker. Stored data with
/// an unrecognized value is normalized to `Other` at the adapter layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    Friend,
    Family,
    Colleague,
    Partner,
    Other,
}

impl Relationship {
    /// All variants in picker order.
    pub const ALL: [Relationship; 5] = [
        Relationship::Friend,
        Relationship::Family,
        Relationship::Colleague,
        Relationship::Partner,
        Relationship::Other,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Relationship::Friend => "Friend",
            Relationship::Family => "Family",
            Relationship::Colleague => "Colleague",
            Relationship::Partner => "Partner",
            Relationship::Other => "Other",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Relationship {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Friend" => Ok(Relationship::Friend),
            "Family" => Ok(Relationship::Family),
            "Colleague" => Ok(Relationship::Colleague),
            "Partner" => Ok(Relationship::Partner),
            "Other" => Ok(Relationship::Other),
            other => Err(ValidationError::invalid_format(
                "relationship",
                format!("unknown relationship '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_picker_value() {
        for relationship in Relationship::ALL {
            let parsed: Relationship = relationship.label().parse().unwrap();
            assert_eq!(parsed, relationship);
        }
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let parsed: Relationship = " Family ".parse().unwrap();
        assert_eq!(parsed, Relationship::Family);
    }

    #[test]
    fn parse_rejects_unknown_value() {
        let result: Result<Relationship, _> = "Acquaintance".parse();
        assert!(result.is_err());
    }

    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&Relationship::Colleague).unwrap();
        assert_eq!(json, "\"Colleague\"");
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(format!("{}", Relationship::Partner), "Partner");
    }
}
