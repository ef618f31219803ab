use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored student row, identifier included.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub details: StudentDetails,
}

/// Everything about a student apart from the identifier. This is what clients send on create and
/// update, and every field here takes part in duplicate detection.
///
/// Optional text fields are empty strings when absent, and optional numbers are zero.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentDetails {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub dob: String,
    pub mother_tongue: String,
    pub nationality: String,
    pub father_name: String,
    pub mother_name: String,
    pub contact_number: i64,
    pub father_occupation: String,
    pub mother_occupation: String,
    pub family_income: i64,
}

impl StudentDetails {
    pub const fn with_id(self, id: i64) -> Student {
        Student { id, details: self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Accepts the full names as well as the single-letter codes older clients send.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Male" | "M" => Some(Self::Male),
            "Female" | "F" => Some(Self::Female),
            "Other" | "O" => Some(Self::Other),
            _ => None,
        }
    }
}
