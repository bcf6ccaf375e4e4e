use anyhow::Context;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::plans::repo_types::{FitnessPlan, FitnessPlanRow};
use crate::plans::services::PlanDraft;

impl FitnessPlan {
    pub async fn create(db: &PgPool, user_id: Uuid, draft: &PlanDraft) -> anyhow::Result<FitnessPlan> {
        let row = sqlx::query_as::<_, FitnessPlanRow>(
            r#"
            INSERT INTO fitness_plans (id, user_id, title, description, exercises, duration, frequency)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, title, description, exercises, duration, frequency, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(Json(&draft.exercises))
        .bind(&draft.duration)
        .bind(&draft.frequency)
        .fetch_one(db)
        .await
        .context("insert fitness plan")?;
        Ok(row.into())
    }

    /// All plans of a user, newest first.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<FitnessPlan>> {
        let rows = sqlx::query_as::<_, FitnessPlanRow>(
            r#"
            SELECT id, user_id, title, description, exercises, duration, frequency, created_at
            FROM fitness_plans
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("select fitness plans by user")?;
        Ok(rows.into_iter().map(FitnessPlan::from).collect())
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<FitnessPlan>> {
        let row = sqlx::query_as::<_, FitnessPlanRow>(
            r#"
            SELECT id, user_id, title, description, exercises, duration, frequency, created_at
            FROM fitness_plans
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("select fitness plan")?;
        Ok(row.map(FitnessPlan::from))
    }
}
