// ABOUTME: Assessment engine module: metric calculators, rule selectors, and the plan assembler
// ABOUTME: evaluate() runs the straight-line pipeline from validated profile to personalized plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

//! # Assessment Engine
//!
//! A pipeline of pure calculators feeding a plan assembler:
//!
//! 1. **Metric calculators**: BMI, BMI category, Mifflin-St Jeor BMR,
//!    activity-adjusted daily calories, macro grams, ideal weight range,
//!    water requirement.
//! 2. **Rule selectors**: health risks, recommendations, workout schedule,
//!    meal plan, lifestyle tips, weekly goals.
//! 3. **Plan assembler**: [`evaluate`] composes everything into one
//!    [`Plan`].
//!
//! The engine is synchronous, allocation-only, and deterministic: there is
//! no I/O, no shared state, and no randomness, so identical profiles always
//! produce identical plans.

pub mod calculators;
pub mod constants;
pub mod lifestyle;
pub mod meals;
pub mod recommendations;
pub mod risks;
pub mod workouts;

use tracing::debug;

use crate::errors::AppResult;
use crate::models::{Assessment, Plan, Profile};

/// Evaluate a validated profile into a complete personalized plan
///
/// Control flow is a straight-line pipeline: metrics in dependency order
/// (bmi -> category -> bmr -> daily calories -> macros), the independent
/// ideal-weight and water metrics, then risk and recommendation selection,
/// then the plan contents. All-or-nothing: no partial plan is ever
/// returned.
///
/// # Errors
///
/// The pipeline itself is total for validated input; the `Result` exists so
/// any future fallible step surfaces as an internal error instead of a
/// panic.
pub fn evaluate(profile: &Profile) -> AppResult<Plan> {
    let bmi = calculators::calculate_bmi(profile.weight, profile.height);
    let bmi_category = calculators::bmi_category(bmi);
    let bmr = calculators::calculate_bmr(profile.weight, profile.height, profile.age, profile.gender);
    let daily_calories =
        calculators::calculate_daily_calories(bmr, profile.activity_level, profile.goal);
    let macros = calculators::calculate_macros(daily_calories, profile.goal);

    let ideal_weight_range = calculators::calculate_ideal_weight(profile.height, profile.gender);
    let water_liters = calculators::calculate_water_intake(profile.weight);

    let health_risks =
        risks::assess_health_risks(bmi, profile.age, profile.medical_conditions.as_deref());
    let recommendations = recommendations::generate_recommendations(profile, bmi);

    debug!(
        bmi,
        ?bmi_category,
        bmr,
        daily_calories,
        risk_count = health_risks.len(),
        "Assessment metrics computed"
    );

    let assessment = Assessment {
        bmi,
        bmi_category,
        bmr,
        daily_calories,
        protein_grams: macros.protein,
        carbs_grams: macros.carbs,
        fats_grams: macros.fats,
        water_liters,
        ideal_weight_range,
        health_risks,
        recommendations,
    };

    Ok(Plan {
        workout_plan: workouts::generate_workout_plan(profile.goal, profile.activity_level),
        meal_suggestions: meals::generate_meal_suggestions(
            daily_calories,
            profile.dietary_preference,
        ),
        lifestyle_tips: lifestyle::generate_lifestyle_tips(profile),
        weekly_goals: lifestyle::generate_weekly_goals(profile.goal, daily_calories),
        user_info: profile.clone(),
        assessment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, BmiCategory, Gender, Goal};

    fn profile() -> Profile {
        Profile {
            name: "Alex".into(),
            age: 30,
            gender: Gender::Male,
            height: 175.0,
            weight: 70.0,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::LoseWeight,
            dietary_preference: None,
            medical_conditions: None,
        }
    }

    #[test]
    fn test_pipeline_reference_values() {
        let plan = evaluate(&profile()).unwrap();
        assert!((plan.assessment.bmi - 22.86).abs() < f64::EPSILON);
        assert_eq!(plan.assessment.bmi_category, BmiCategory::NormalWeight);
        assert!((plan.assessment.bmr - 1648.75).abs() < f64::EPSILON);
        // round(1648.75 * 1.2, 2) - 500
        assert!((plan.assessment.daily_calories - 1478.5).abs() < f64::EPSILON);
        assert!((plan.assessment.water_liters - 2.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_plan_shape_invariants() {
        let plan = evaluate(&profile()).unwrap();
        assert_eq!(plan.workout_plan.len(), 7);
        assert_eq!(plan.meal_suggestions.len(), 4);
        assert_eq!(plan.lifestyle_tips.len(), 10);
        assert!(!plan.assessment.health_risks.is_empty());
        assert!(plan.assessment.recommendations.len() <= 12);
    }

    #[test]
    fn test_profile_preserved_in_output() {
        let p = profile();
        let plan = evaluate(&p).unwrap();
        assert_eq!(plan.user_info, p);
    }

    #[test]
    fn test_meal_budget_follows_daily_calories() {
        let plan = evaluate(&profile()).unwrap();
        // breakfast is 25% of 1478.5
        assert_eq!(plan.meal_suggestions[0].calories, 370);
    }
}
