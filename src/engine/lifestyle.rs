// ABOUTME: Lifestyle tip and weekly goal selectors
// ABOUTME: Constant tip list plus goal-shaped weekly targets embedding the calorie budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

//! Lifestyle tips and weekly goals

use crate::models::{Goal, Profile, WeeklyGoals};

/// Fixed ordered list of ten lifestyle and wellness tips
///
/// Accepts the profile for signature symmetry with the other selectors;
/// content is currently profile-independent.
#[must_use]
pub fn generate_lifestyle_tips(_profile: &Profile) -> Vec<String> {
    [
        "Prioritize 7-9 hours of quality sleep each night",
        "Stay hydrated: drink at least 8 glasses of water daily",
        "Practice stress management techniques (meditation, deep breathing)",
        "Limit screen time, especially before bed",
        "Meal prep on weekends to stay on track during busy weekdays",
        "Find an accountability partner or join a fitness community",
        "Take progress photos and measurements monthly",
        "Celebrate small victories along your journey",
        "Be patient and consistent - sustainable change takes time",
        "Listen to your body and rest when needed",
    ]
    .map(str::to_owned)
    .to_vec()
}

/// Achievable weekly goals shaped by the user goal
///
/// Weight-focused goals populate the `weight` field; everything else
/// populates `fitness`. The calorie budget is embedded in the nutrition
/// target.
#[must_use]
pub fn generate_weekly_goals(goal: Goal, daily_calories: f64) -> WeeklyGoals {
    match goal {
        Goal::LoseWeight => WeeklyGoals {
            weight: Some("Aim for 0.5-1 kg weight loss".to_owned()),
            fitness: None,
            exercise: "Complete 4-5 workout sessions".to_owned(),
            nutrition: format!("Stay within {daily_calories} calories daily"),
            hydration: "Drink 2-3 liters of water daily".to_owned(),
            sleep: "Get 7-9 hours of sleep each night".to_owned(),
            tracking: "Log meals and workouts daily".to_owned(),
        },
        Goal::GainMuscle => WeeklyGoals {
            weight: Some("Aim for 0.25-0.5 kg muscle gain".to_owned()),
            fitness: None,
            exercise: "Complete all scheduled strength training sessions".to_owned(),
            nutrition: format!("Consume {daily_calories} calories with focus on protein"),
            hydration: "Drink 3-4 liters of water daily".to_owned(),
            sleep: "Get 8-9 hours of sleep for recovery".to_owned(),
            tracking: "Track workout progress and weights lifted".to_owned(),
        },
        Goal::Maintain | Goal::ImproveFitness => WeeklyGoals {
            weight: None,
            fitness: Some("Improve endurance or strength by 5%".to_owned()),
            exercise: "Complete 4-5 diverse workout sessions".to_owned(),
            nutrition: format!("Maintain balanced diet around {daily_calories} calories"),
            hydration: "Drink 2-3 liters of water daily".to_owned(),
            sleep: "Maintain consistent sleep schedule".to_owned(),
            tracking: "Monitor energy levels and performance".to_owned(),
        },
    }
}
