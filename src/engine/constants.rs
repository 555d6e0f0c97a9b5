// ABOUTME: Physiological constants and rule tables used by the assessment engine
// ABOUTME: BMI thresholds, BMR coefficients, activity factors, macro splits, and meal ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

//! Physiological constants based on established formulas
//!
//! Rule tables live here as data rather than branch chains so the engine
//! stays auditable and enum-exhaustive properties are easy to test.

use crate::models::{ActivityLevel, Goal};

/// WHO BMI classification thresholds
///
/// Reference: WHO Technical Report Series 894, Obesity: preventing and
/// managing the global epidemic (2000)
pub mod bmi {
    /// Below this value is underweight; at or above is normal weight
    pub const UNDERWEIGHT_MAX: f64 = 18.5;
    /// At or above this value is overweight
    pub const OVERWEIGHT_MIN: f64 = 25.0;
    /// At or above this value is obese
    pub const OBESE_MIN: f64 = 30.0;

    /// Upper bound of the normal band used for the ideal weight range
    pub const IDEAL_RANGE_MAX: f64 = 24.9;
}

/// Mifflin-St Jeor BMR coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. *American Journal of Clinical Nutrition*,
/// 51(2), 241-247. <https://doi.org/10.1093/ajcn/51.2.241>
pub mod bmr {
    pub const WEIGHT_COEF: f64 = 10.0;
    pub const HEIGHT_COEF: f64 = 6.25;
    pub const AGE_COEF: f64 = 5.0;
    pub const MALE_CONSTANT: f64 = 5.0;
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// TDEE activity factors
///
/// Reference: McArdle et al. (2010), Exercise Physiology
pub mod activity {
    use super::ActivityLevel;

    /// Multiplier applied when the lookup missed; matches the sedentary
    /// factor so an unknown level never inflates the calorie budget
    pub const DEFAULT_MULTIPLIER: f64 = 1.2;

    /// Activity level to TDEE multiplier table
    pub const MULTIPLIERS: [(ActivityLevel, f64); 5] = [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::LightlyActive, 1.375),
        (ActivityLevel::ModeratelyActive, 1.55),
        (ActivityLevel::VeryActive, 1.725),
        (ActivityLevel::ExtraActive, 1.9),
    ];
}

/// Goal-based daily calorie adjustments
pub mod calories {
    /// Deficit for ~0.5 kg/week weight loss
    pub const LOSE_WEIGHT_ADJUSTMENT: f64 = -500.0;
    /// Surplus for lean muscle gain
    pub const GAIN_MUSCLE_ADJUSTMENT: f64 = 300.0;
}

/// Macronutrient calorie splits and energy densities
pub mod macros {
    use super::Goal;

    /// Energy density of protein and carbohydrate (kcal/g)
    pub const KCAL_PER_GRAM_PROTEIN_CARBS: f64 = 4.0;
    /// Energy density of fat (kcal/g)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

    /// (protein, carbs, fats) fraction of daily calories per goal
    #[must_use]
    pub const fn split_for(goal: Goal) -> (f64, f64, f64) {
        match goal {
            Goal::LoseWeight => (0.35, 0.35, 0.30),
            Goal::GainMuscle => (0.30, 0.45, 0.25),
            Goal::Maintain | Goal::ImproveFitness => (0.25, 0.50, 0.25),
        }
    }
}

/// Daily water intake factor
pub mod hydration {
    /// Liters of water per kilogram of body weight (33 ml/kg)
    pub const LITERS_PER_KG: f64 = 0.033;
}

/// Meal calorie distribution across the day
pub mod meals {
    pub const BREAKFAST_FRACTION: f64 = 0.25;
    pub const LUNCH_FRACTION: f64 = 0.35;
    pub const DINNER_FRACTION: f64 = 0.30;
    pub const SNACKS_FRACTION: f64 = 0.10;
}

/// Rule thresholds for risk and recommendation selection
pub mod rules {
    /// Age above which excess weight earns a metabolic-slowdown risk
    pub const METABOLIC_RISK_AGE: u32 = 40;
    /// Age above which fall-prevention recommendations apply
    pub const SENIOR_RECOMMENDATION_AGE: u32 = 50;
    /// Maximum number of recommendations surfaced per assessment
    pub const MAX_RECOMMENDATIONS: usize = 12;
}
