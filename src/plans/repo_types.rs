use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use time::OffsetDateTime;
use uuid::Uuid;

/// One exercise line of a plan. Which fields are set depends on the exercise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    /// Free-text note, e.g. what a circuit is made of.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises: Option<String>,
}

/// Row shape of the `fitness_plans` table.
#[derive(Debug, FromRow)]
pub struct FitnessPlanRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub exercises: Json<Vec<ExerciseEntry>>,
    pub duration: String,
    pub frequency: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub exercises: Vec<ExerciseEntry>,
    pub duration: String,
    pub frequency: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<FitnessPlanRow> for FitnessPlan {
    fn from(r: FitnessPlanRow) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            title: r.title,
            description: r.description,
            exercises: r.exercises.0,
            duration: r.duration,
            frequency: r.frequency,
            created_at: r.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let entry = ExerciseEntry {
            name: "Plank".into(),
            sets: Some(3),
            duration: Some("30s".into()),
            rest: Some("45s".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&entry).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(!obj.contains_key("reps"));
        assert!(!obj.contains_key("exercises"));
    }

    #[test]
    fn entry_reads_back_from_stored_json() {
        let raw = r#"{"name":"Walking","duration":"30 minutes","intensity":"brisk pace"}"#;
        let entry: ExerciseEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.name, "Walking");
        assert_eq!(entry.intensity.as_deref(), Some("brisk pace"));
        assert_eq!(entry.sets, None);
    }
}
