use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Experience level chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Beginner,
    Intermediate,
    Advanced,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [
        Intensity::Beginner,
        Intensity::Intermediate,
        Intensity::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Beginner => "beginner",
            Intensity::Intermediate => "intermediate",
            Intensity::Advanced => "advanced",
        }
    }

    /// Capitalized form used in plan titles.
    pub fn label(self) -> &'static str {
        match self {
            Intensity::Beginner => "Beginner",
            Intensity::Intermediate => "Intermediate",
            Intensity::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown intensity `{0}`")]
pub struct UnknownIntensity(pub String);

impl FromStr for Intensity {
    type Err = UnknownIntensity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intensity::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| UnknownIntensity(s.to_string()))
    }
}

/// Row shape of the `users` table.
#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub age: i32,
    pub goals: Vec<String>,
    pub intensity: String,
    pub created_at: OffsetDateTime,
}

/// User record as exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub age: i32,
    pub goals: Vec<String>,
    pub intensity: Intensity,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl TryFrom<UserRow> for User {
    type Error = UnknownIntensity;

    fn try_from(r: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: r.id,
            age: r.age,
            goals: r.goals,
            intensity: r.intensity.parse()?,
            created_at: r.created_at,
        })
    }
}

/// Validated attributes for a user that is about to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub age: i32,
    pub goals: Vec<String>,
    pub intensity: Intensity,
}
