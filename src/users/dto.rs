use serde::Deserialize;

/// Request body for `POST /api/users`.
///
/// Every field is optional at the serde level so that a missing field is
/// reported alongside the other validation failures instead of aborting
/// deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub age: Option<serde_json::Number>,
    pub goals: Option<Vec<String>>,
    pub intensity: Option<String>,
}
