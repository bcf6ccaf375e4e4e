//! Static exercise table: goal → intensity → exercises.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::plans::repo_types::ExerciseEntry;
use crate::users::repo_types::Intensity;

/// Goals the generator knows how to build content for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    StrengthConditioning,
    GeneralHealth,
    WeightLoss,
}

impl Goal {
    /// Order in which goals contribute exercises and title fragments.
    pub const PRIORITY: [Goal; 3] = [
        Goal::StrengthConditioning,
        Goal::GeneralHealth,
        Goal::WeightLoss,
    ];

    /// Key as submitted by clients.
    pub fn key(self) -> &'static str {
        match self {
            Goal::StrengthConditioning => "strength & conditioning",
            Goal::GeneralHealth => "general health",
            Goal::WeightLoss => "weight loss",
        }
    }

    pub fn title_fragment(self) -> &'static str {
        match self {
            Goal::StrengthConditioning => "Strength & Conditioning",
            Goal::GeneralHealth => "General Health",
            Goal::WeightLoss => "Weight Loss",
        }
    }
}

type Catalog = HashMap<Goal, HashMap<Intensity, Vec<ExerciseEntry>>>;

lazy_static! {
    static ref CATALOG: Catalog = build_catalog();
}

/// Exercises for a goal at an intensity; empty when the table has no entry.
pub fn exercises_for(goal: Goal, intensity: Intensity) -> &'static [ExerciseEntry] {
    CATALOG
        .get(&goal)
        .and_then(|by_intensity| by_intensity.get(&intensity))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn ex(name: &str) -> ExerciseEntry {
    ExerciseEntry {
        name: name.to_string(),
        ..Default::default()
    }
}

impl ExerciseEntry {
    fn sets(mut self, n: u32) -> Self {
        self.sets = Some(n);
        self
    }
    fn reps(mut self, v: &str) -> Self {
        self.reps = Some(v.to_string());
        self
    }
    fn duration(mut self, v: &str) -> Self {
        self.duration = Some(v.to_string());
        self
    }
    fn rest(mut self, v: &str) -> Self {
        self.rest = Some(v.to_string());
        self
    }
    fn intensity(mut self, v: &str) -> Self {
        self.intensity = Some(v.to_string());
        self
    }
    fn note(mut self, v: &str) -> Self {
        self.exercises = Some(v.to_string());
        self
    }
}

fn build_catalog() -> Catalog {
    use Intensity::*;

    let strength = HashMap::from([
        (
            Beginner,
            vec![
                ex("Push-ups").sets(3).reps("8-12").rest("60s"),
                ex("Bodyweight Squats").sets(3).reps("12-15").rest("60s"),
                ex("Plank").sets(3).duration("30s").rest("45s"),
                ex("Modified Burpees").sets(2).reps("5-8").rest("90s"),
            ],
        ),
        (
            Intermediate,
            vec![
                ex("Push-ups").sets(4).reps("12-16").rest("45s"),
                ex("Jump Squats").sets(4).reps("10-15").rest("60s"),
                ex("Mountain Climbers").sets(3).reps("20").rest("45s"),
                ex("Burpees").sets(3).reps("8-12").rest("90s"),
                ex("Lunges").sets(3).reps("12 each leg").rest("60s"),
            ],
        ),
        (
            Advanced,
            vec![
                ex("Diamond Push-ups").sets(4).reps("10-15").rest("30s"),
                ex("Pistol Squats").sets(4).reps("6-10 each leg").rest("60s"),
                ex("Burpee Box Jumps").sets(4).reps("8-12").rest("90s"),
                ex("Handstand Push-ups").sets(3).reps("5-8").rest("120s"),
                ex("Single-leg Deadlifts").sets(3).reps("10 each leg").rest("60s"),
            ],
        ),
    ]);

    let general_health = HashMap::from([
        (
            Beginner,
            vec![
                ex("Walking").duration("20-30 minutes").intensity("moderate"),
                ex("Bodyweight Squats").sets(2).reps("8-12").rest("60s"),
                ex("Wall Push-ups").sets(2).reps("8-12").rest("60s"),
                ex("Standing Marches").sets(2).reps("20 each leg").rest("45s"),
            ],
        ),
        (
            Intermediate,
            vec![
                ex("Brisk Walking/Light Jogging").duration("25-35 minutes"),
                ex("Push-ups").sets(3).reps("10-15").rest("45s"),
                ex("Squats").sets(3).reps("12-18").rest("45s"),
                ex("Plank").sets(3).duration("45s").rest("60s"),
                ex("Step-ups").sets(2).reps("10 each leg").rest("60s"),
            ],
        ),
        (
            Advanced,
            vec![
                ex("Running")
                    .duration("30-45 minutes")
                    .intensity("moderate to high"),
                ex("Circuit Training")
                    .sets(4)
                    .note("Mixed compound movements")
                    .rest("30s between exercises"),
                ex("HIIT Cardio")
                    .duration("20 minutes")
                    .rest("High intensity intervals"),
            ],
        ),
    ]);

    let weight_loss = HashMap::from([
        (
            Beginner,
            vec![
                ex("Walking").duration("30 minutes").intensity("brisk pace"),
                ex("Bodyweight Squats").sets(3).reps("10-15").rest("45s"),
                ex("Modified Push-ups").sets(2).reps("8-12").rest("60s"),
                ex("Marching in Place")
                    .duration("5 minutes")
                    .intensity("moderate"),
            ],
        ),
        (
            Intermediate,
            vec![
                ex("Jogging/Running").duration("25-30 minutes"),
                ex("Jump Squats").sets(3).reps("12-16").rest("45s"),
                ex("Burpees").sets(3).reps("6-10").rest("90s"),
                ex("High Knees").sets(3).duration("30s").rest("30s"),
                ex("Mountain Climbers").sets(3).reps("20").rest("45s"),
            ],
        ),
        (
            Advanced,
            vec![
                ex("HIIT Running").duration("30 minutes").intensity("intervals"),
                ex("Burpee Variations").sets(4).reps("10-15").rest("60s"),
                ex("Tabata Protocol")
                    .duration("20 minutes")
                    .intensity("maximum effort"),
                ex("Circuit Training")
                    .sets(5)
                    .note("Full body compound movements"),
            ],
        ),
    ]);

    HashMap::from([
        (Goal::StrengthConditioning, strength),
        (Goal::GeneralHealth, general_health),
        (Goal::WeightLoss, weight_loss),
    ])
}
