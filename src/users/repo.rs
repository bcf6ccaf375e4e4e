use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::users::repo_types::{NewUser, User, UserRow};

impl User {
    /// Insert a validated user.
    pub async fn create(db: &PgPool, new: &NewUser) -> anyhow::Result<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, age, goals, intensity)
            VALUES ($1, $2, $3, $4)
            RETURNING id, age, goals, intensity, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.age)
        .bind(&new.goals)
        .bind(new.intensity.as_str())
        .fetch_one(db)
        .await
        .context("insert user")?;
        Ok(User::try_from(row)?)
    }

    /// Find a user by id.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, age, goals, intensity, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("select user")?;
        Ok(row.map(User::try_from).transpose()?)
    }
}
