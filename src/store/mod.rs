//! Persistence for users and their generated plans.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::plans::repo_types::FitnessPlan;
use crate::plans::services::PlanDraft;
use crate::users::repo_types::{NewUser, User};

#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn create_user(&self, new: NewUser) -> anyhow::Result<User>;
    async fn find_user(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    async fn create_plan(&self, user_id: Uuid, draft: PlanDraft) -> anyhow::Result<FitnessPlan>;
    /// Plans belonging to `user_id`, newest first.
    async fn list_plans_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<FitnessPlan>>;
    /// A plan together with the user it was generated for.
    async fn find_plan(&self, id: Uuid) -> anyhow::Result<Option<(FitnessPlan, User)>>;
    async fn close(&self);
}
