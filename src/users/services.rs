use crate::error::FieldError;
use crate::users::dto::CreateUserRequest;
use crate::users::repo_types::{Intensity, NewUser};

pub const MIN_AGE: i64 = 13;
pub const MAX_AGE: i64 = 100;

const REQUIRED: &str = "Required";

/// Integer value of `n`, accepting floats with no fractional part (`30.0`).
fn whole_number(n: &serde_json::Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

/// Checks every field and reports all failures at once.
///
/// Goals are only required to be a non-empty list of strings. Values the plan
/// generator has no content for are accepted as-is.
pub fn validate_new_user(req: CreateUserRequest) -> Result<NewUser, Vec<FieldError>> {
    let mut errors = Vec::new();

    let age = match req.age {
        None => {
            errors.push(FieldError::new("age", REQUIRED));
            None
        }
        Some(n) => match whole_number(&n) {
            None => {
                errors.push(FieldError::new("age", "Expected integer"));
                None
            }
            Some(a) if a < MIN_AGE => {
                errors.push(FieldError::new(
                    "age",
                    format!("Number must be greater than or equal to {MIN_AGE}"),
                ));
                None
            }
            Some(a) if a > MAX_AGE => {
                errors.push(FieldError::new(
                    "age",
                    format!("Number must be less than or equal to {MAX_AGE}"),
                ));
                None
            }
            // in range, so it fits
            Some(a) => Some(a as i32),
        },
    };

    let goals = match req.goals {
        None => {
            errors.push(FieldError::new("goals", REQUIRED));
            None
        }
        Some(g) if g.is_empty() => {
            errors.push(FieldError::new(
                "goals",
                "Array must contain at least 1 element(s)",
            ));
            None
        }
        Some(g) => Some(g),
    };

    let intensity = match req.intensity {
        None => {
            errors.push(FieldError::new("intensity", REQUIRED));
            None
        }
        Some(s) => match s.parse::<Intensity>() {
            Ok(i) => Some(i),
            Err(_) => {
                errors.push(FieldError::new(
                    "intensity",
                    format!(
                        "Invalid enum value. Expected 'beginner' | 'intermediate' | 'advanced', received '{s}'"
                    ),
                ));
                None
            }
        },
    };

    match (age, goals, intensity) {
        (Some(age), Some(goals), Some(intensity)) if errors.is_empty() => Ok(NewUser {
            age,
            goals,
            intensity,
        }),
        _ => Err(errors),
    }
}
