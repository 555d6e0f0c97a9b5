// ABOUTME: Weekly workout plan selector with fixed templates keyed by goal
// ABOUTME: Produces exactly 7 ordered day entries, Monday through Sunday
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

//! Workout plan templates
//!
//! Three fixed weekly templates keyed by goal. The only parameterized cell
//! is the cardio-day duration in the weight-loss template, which scales
//! down for low-activity users. No randomness: same inputs, same schedule.

use crate::models::{ActivityLevel, Goal, WorkoutDay};

fn entry(day: &str, workout_type: &str, activity: &str, duration: String, intensity: &str) -> WorkoutDay {
    WorkoutDay {
        day: day.to_owned(),
        workout_type: workout_type.to_owned(),
        activity: activity.to_owned(),
        duration,
        intensity: intensity.to_owned(),
    }
}

/// Generate the 7-day workout schedule for a goal and activity level
#[must_use]
pub fn generate_workout_plan(goal: Goal, activity_level: ActivityLevel) -> Vec<WorkoutDay> {
    let cardio_minutes = if matches!(
        activity_level,
        ActivityLevel::Sedentary | ActivityLevel::LightlyActive
    ) {
        30
    } else {
        45
    };

    match goal {
        Goal::LoseWeight => vec![
            entry(
                "Monday",
                "Cardio",
                "Brisk walking or jogging",
                format!("{cardio_minutes} min"),
                "Moderate",
            ),
            entry(
                "Tuesday",
                "Strength",
                "Upper body strength training",
                "30 min".to_owned(),
                "Moderate",
            ),
            entry(
                "Wednesday",
                "Cardio",
                "Cycling or swimming",
                format!("{cardio_minutes} min"),
                "Moderate-High",
            ),
            entry(
                "Thursday",
                "Strength",
                "Lower body strength training",
                "30 min".to_owned(),
                "Moderate",
            ),
            entry("Friday", "Cardio", "HIIT workout", "20-25 min".to_owned(), "High"),
            entry(
                "Saturday",
                "Active Recovery",
                "Yoga or light stretching",
                "30 min".to_owned(),
                "Low",
            ),
            entry("Sunday", "Rest", "Rest or gentle walk", "Optional".to_owned(), "Low"),
        ],
        Goal::GainMuscle => vec![
            entry("Monday", "Strength", "Chest and triceps", "45-60 min".to_owned(), "High"),
            entry("Tuesday", "Strength", "Back and biceps", "45-60 min".to_owned(), "High"),
            entry(
                "Wednesday",
                "Cardio",
                "Light cardio",
                "20 min".to_owned(),
                "Low-Moderate",
            ),
            entry("Thursday", "Strength", "Legs and core", "45-60 min".to_owned(), "High"),
            entry("Friday", "Strength", "Shoulders and abs", "45-60 min".to_owned(), "High"),
            entry(
                "Saturday",
                "Active Recovery",
                "Stretching or yoga",
                "30 min".to_owned(),
                "Low",
            ),
            entry("Sunday", "Rest", "Complete rest", "N/A".to_owned(), "N/A"),
        ],
        Goal::Maintain | Goal::ImproveFitness => vec![
            entry("Monday", "Cardio", "Running or cycling", "30 min".to_owned(), "Moderate"),
            entry("Tuesday", "Strength", "Full body workout", "40 min".to_owned(), "Moderate"),
            entry(
                "Wednesday",
                "Flexibility",
                "Yoga or Pilates",
                "45 min".to_owned(),
                "Low-Moderate",
            ),
            entry(
                "Thursday",
                "Cardio",
                "Swimming or elliptical",
                "30 min".to_owned(),
                "Moderate",
            ),
            entry(
                "Friday",
                "Strength",
                "Circuit training",
                "40 min".to_owned(),
                "Moderate-High",
            ),
            entry(
                "Saturday",
                "Recreation",
                "Sports or hiking",
                "60 min".to_owned(),
                "Variable",
            ),
            entry("Sunday", "Rest", "Light walk or rest", "Optional".to_owned(), "Low"),
        ],
    }
}
