use serde::{Deserialize, Serialize};

use crate::plans::repo_types::FitnessPlan;
use crate::users::repo_types::User;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanRequest {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Plan detail response: the plan's fields plus the owning user.
#[derive(Debug, Serialize)]
pub struct PlanWithUser {
    #[serde(flatten)]
    pub plan: FitnessPlan,
    pub user: User,
}
