use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{info, warn};
use uuid::Uuid;

use crate::plans::repo_types::FitnessPlan;
use crate::plans::services::PlanDraft;
use crate::store::PlanStore;
use crate::users::repo_types::{NewUser, User};

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("connect to database")?;
        info!(max_connections, "connected to postgres");
        Ok(Self { db })
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db)
            .await
            .context("run migrations")?;
        Ok(())
    }
}

#[async_trait]
impl PlanStore for PgStore {
    async fn create_user(&self, new: NewUser) -> anyhow::Result<User> {
        User::create(&self.db, &new).await
    }

    async fn find_user(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        User::find_by_id(&self.db, id).await
    }

    async fn create_plan(&self, user_id: Uuid, draft: PlanDraft) -> anyhow::Result<FitnessPlan> {
        FitnessPlan::create(&self.db, user_id, &draft).await
    }

    async fn list_plans_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<FitnessPlan>> {
        FitnessPlan::list_by_user(&self.db, user_id).await
    }

    async fn find_plan(&self, id: Uuid) -> anyhow::Result<Option<(FitnessPlan, User)>> {
        let Some(plan) = FitnessPlan::find_by_id(&self.db, id).await? else {
            return Ok(None);
        };
        match User::find_by_id(&self.db, plan.user_id).await? {
            Some(user) => Ok(Some((plan, user))),
            None => {
                // FK makes this unreachable unless rows were removed by hand.
                warn!(plan_id = %id, user_id = %plan.user_id, "plan without user");
                Ok(None)
            }
        }
    }

    async fn close(&self) {
        self.db.close().await;
    }
}
