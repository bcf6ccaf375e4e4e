use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::plans::repo_types::FitnessPlan;
use crate::plans::services::PlanDraft;
use crate::store::PlanStore;
use crate::users::repo_types::{NewUser, User};

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    // insertion order
    plans: Vec<FitnessPlan>,
}

/// Process-local store; contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlanStore for MemoryStore {
    async fn create_user(&self, new: NewUser) -> anyhow::Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            age: new.age,
            goals: new.goals,
            intensity: new.intensity,
            created_at: OffsetDateTime::now_utc(),
        };
        self.inner.write().await.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn create_plan(&self, user_id: Uuid, draft: PlanDraft) -> anyhow::Result<FitnessPlan> {
        let mut inner = self.inner.write().await;
        if !inner.users.contains_key(&user_id) {
            anyhow::bail!("user {user_id} does not exist");
        }
        let plan = FitnessPlan {
            id: Uuid::new_v4(),
            user_id,
            title: draft.title,
            description: draft.description,
            exercises: draft.exercises,
            duration: draft.duration,
            frequency: draft.frequency,
            created_at: OffsetDateTime::now_utc(),
        };
        inner.plans.push(plan.clone());
        Ok(plan)
    }

    async fn list_plans_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<FitnessPlan>> {
        let inner = self.inner.read().await;
        let mut plans: Vec<FitnessPlan> = inner
            .plans
            .iter()
            .rev()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        // Stable, so plans sharing a timestamp stay newest-inserted first.
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(plans)
    }

    async fn find_plan(&self, id: Uuid) -> anyhow::Result<Option<(FitnessPlan, User)>> {
        let inner = self.inner.read().await;
        Ok(inner.plans.iter().find(|p| p.id == id).and_then(|plan| {
            inner
                .users
                .get(&plan.user_id)
                .map(|user| (plan.clone(), user.clone()))
        }))
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repo_types::Intensity;

    fn new_user() -> NewUser {
        NewUser {
            age: 33,
            goals: vec!["weight loss".into()],
            intensity: Intensity::Advanced,
        }
    }

    fn draft(title: &str) -> PlanDraft {
        PlanDraft {
            title: title.into(),
            description: "d".into(),
            exercises: Vec::new(),
            duration: "8 weeks".into(),
            frequency: "5x per week".into(),
        }
    }

    #[tokio::test]
    async fn created_user_can_be_found() {
        let store = MemoryStore::new();
        let user = store.create_user(new_user()).await.unwrap();
        assert_eq!(store.find_user(user.id).await.unwrap(), Some(user));
        assert_eq!(store.find_user(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn plans_are_listed_newest_first_per_user() {
        let store = MemoryStore::new();
        let alice = store.create_user(new_user()).await.unwrap();
        let bob = store.create_user(new_user()).await.unwrap();

        let first = store.create_plan(alice.id, draft("first")).await.unwrap();
        store.create_plan(bob.id, draft("other")).await.unwrap();
        let second = store.create_plan(alice.id, draft("second")).await.unwrap();

        let titles: Vec<String> = store
            .list_plans_for_user(alice.id)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec![second.title, first.title]);
        assert!(store.list_plans_for_user(Uuid::new_v4()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn plan_lookup_includes_user() {
        let store = MemoryStore::new();
        let user = store.create_user(new_user()).await.unwrap();
        let plan = store.create_plan(user.id, draft("p")).await.unwrap();

        let (found, owner) = store.find_plan(plan.id).await.unwrap().unwrap();
        assert_eq!(found, plan);
        assert_eq!(owner, user);
        assert!(store.find_plan(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn plan_for_missing_user_is_rejected() {
        let store = MemoryStore::new();
        let err = store.create_plan(Uuid::new_v4(), draft("x")).await.unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
