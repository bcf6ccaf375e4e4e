use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::plans::catalog::{exercises_for, Goal};
use crate::plans::repo_types::{ExerciseEntry, FitnessPlan};
use crate::store::PlanStore;
use crate::users::repo_types::Intensity;

/// Generated plan content, not yet persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDraft {
    pub title: String,
    pub description: String,
    pub exercises: Vec<ExerciseEntry>,
    pub duration: String,
    pub frequency: String,
}

/// Builds a plan from the user's attributes.
///
/// Known goals contribute in [`Goal::PRIORITY`] order whatever order `goals`
/// lists them in. Any other goal string is ignored: it adds neither exercises
/// nor a title fragment.
pub fn generate(age: i32, goals: &[String], intensity: Intensity) -> PlanDraft {
    let mut exercises = Vec::new();
    let mut title = String::new();

    for goal in Goal::PRIORITY {
        if goals.iter().any(|g| g == goal.key()) {
            exercises.extend_from_slice(exercises_for(goal, intensity));
            title.push_str(goal.title_fragment());
            title.push(' ');
        }
    }

    let (duration, frequency, description) = match intensity {
        Intensity::Beginner => (
            if age > 50 { "6 weeks" } else { "4 weeks" },
            "3x per week",
            "A beginner-friendly plan focusing on building foundational fitness and proper form.",
        ),
        Intensity::Intermediate => (
            "6 weeks",
            "4x per week",
            "An intermediate plan designed to challenge your current fitness level and promote progression.",
        ),
        Intensity::Advanced => (
            "8 weeks",
            "5x per week",
            "An advanced plan for experienced individuals looking to push their limits and achieve peak performance.",
        ),
    };

    PlanDraft {
        title: format!("{} - {} Plan", title.trim(), intensity.label()),
        description: description.to_string(),
        exercises,
        duration: duration.to_string(),
        frequency: frequency.to_string(),
    }
}

/// Looks up the user, generates a plan for them and stores it.
pub async fn create_plan_for_user(
    store: &dyn PlanStore,
    user_id: Uuid,
) -> Result<FitnessPlan, ApiError> {
    let user = store
        .find_user(user_id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;

    let draft = generate(user.age, &user.goals, user.intensity);
    debug!(
        %user_id,
        title = %draft.title,
        exercises = draft.exercises.len(),
        "plan generated"
    );

    let plan = store.create_plan(user.id, draft).await?;
    info!(%user_id, plan_id = %plan.id, "fitness plan created");
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::users::repo_types::NewUser;

    fn goals(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn generate_is_deterministic() {
        let all = goals(&["weight loss", "strength & conditioning", "general health"]);
        for intensity in Intensity::ALL {
            assert_eq!(generate(35, &all, intensity), generate(35, &all, intensity));
        }
    }

    #[test]
    fn exercises_follow_priority_order_not_input_order() {
        let forward = goals(&["strength & conditioning", "general health", "weight loss"]);
        let reversed = goals(&["weight loss", "general health", "strength & conditioning"]);

        for intensity in Intensity::ALL {
            let a = generate(28, &forward, intensity);
            let b = generate(28, &reversed, intensity);
            assert_eq!(a, b);

            let expected: Vec<ExerciseEntry> = Goal::PRIORITY
                .iter()
                .flat_map(|g| exercises_for(*g, intensity).iter().cloned())
                .collect();
            assert_eq!(a.exercises, expected);
        }
    }

    #[test]
    fn exercise_count_is_sum_of_selected_goals() {
        let selected = goals(&["general health", "strength & conditioning"]);
        let plan = generate(40, &selected, Intensity::Advanced);
        let expected = exercises_for(Goal::StrengthConditioning, Intensity::Advanced).len()
            + exercises_for(Goal::GeneralHealth, Intensity::Advanced).len();
        assert_eq!(plan.exercises.len(), expected);
        assert_eq!(plan.title, "Strength & Conditioning General Health - Advanced Plan");
    }

    #[test]
    fn beginner_duration_depends_on_age() {
        let g = goals(&["general health"]);
        assert_eq!(generate(60, &g, Intensity::Beginner).duration, "6 weeks");
        assert_eq!(generate(30, &g, Intensity::Beginner).duration, "4 weeks");
        assert_eq!(generate(50, &g, Intensity::Beginner).duration, "4 weeks");
        assert_eq!(generate(51, &g, Intensity::Beginner).frequency, "3x per week");
    }

    #[test]
    fn age_does_not_affect_other_intensities() {
        let g = goals(&["general health"]);
        let young = generate(20, &g, Intensity::Intermediate);
        let old = generate(80, &g, Intensity::Intermediate);
        assert_eq!(young.duration, "6 weeks");
        assert_eq!(old.duration, "6 weeks");
        assert_eq!(young.frequency, "4x per week");

        let advanced = generate(80, &g, Intensity::Advanced);
        assert_eq!(advanced.duration, "8 weeks");
        assert_eq!(advanced.frequency, "5x per week");
    }

    #[test]
    fn advanced_weight_loss_plan() {
        let plan = generate(30, &goals(&["weight loss"]), Intensity::Advanced);
        assert!(plan.title.ends_with("Weight Loss - Advanced Plan"));
        assert_eq!(plan.title, "Weight Loss - Advanced Plan");
        let names: Vec<&str> = plan.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["HIIT Running", "Burpee Variations", "Tabata Protocol", "Circuit Training"]
        );
        assert_eq!(
            plan.exercises[3],
            ExerciseEntry {
                name: "Circuit Training".into(),
                sets: Some(5),
                exercises: Some("Full body compound movements".into()),
                ..Default::default()
            }
        );
        assert_eq!(plan.exercises[0].intensity.as_deref(), Some("intervals"));
        assert!(plan.description.starts_with("An advanced plan"));
    }

    #[test]
    fn unhandled_goal_yields_empty_plan() {
        let plan = generate(25, &goals(&["endurance"]), Intensity::Beginner);
        assert!(plan.exercises.is_empty());
        assert_eq!(plan.title, " - Beginner Plan");
        assert_eq!(plan.duration, "4 weeks");
    }

    #[test]
    fn unhandled_goals_are_ignored_alongside_known_ones() {
        let plan = generate(
            25,
            &goals(&["flexibility", "weight loss", "muscle building"]),
            Intensity::Intermediate,
        );
        assert_eq!(plan.title, "Weight Loss - Intermediate Plan");
        assert_eq!(plan.exercises.len(), 5);
    }

    #[test]
    fn goal_match_is_case_sensitive() {
        let plan = generate(25, &goals(&["Weight Loss"]), Intensity::Advanced);
        assert!(plan.exercises.is_empty());
        assert_eq!(plan.title, " - Advanced Plan");
    }

    #[tokio::test]
    async fn create_plan_for_unknown_user_is_not_found() {
        let store = MemoryStore::new();
        let err = create_plan_for_user(&store, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound("User not found")));
    }

    #[tokio::test]
    async fn create_plan_for_user_persists_generated_plan() {
        let store = MemoryStore::new();
        let user = store
            .create_user(NewUser {
                age: 61,
                goals: goals(&["general health"]),
                intensity: Intensity::Beginner,
            })
            .await
            .unwrap();

        let plan = create_plan_for_user(&store, user.id).await.unwrap();
        assert_eq!(plan.user_id, user.id);
        assert_eq!(plan.duration, "6 weeks");
        assert_eq!(plan.title, "General Health - Beginner Plan");

        let stored = store.list_plans_for_user(user.id).await.unwrap();
        assert_eq!(stored, vec![plan]);
    }
}
