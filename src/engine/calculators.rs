// ABOUTME: Pure metric calculators: BMI, BMR, TDEE, macros, ideal weight, water intake
// ABOUTME: Total for validated input, side-effect free, deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

//! Metric calculators
//!
//! Every function here is a pure numeric function of validated profile
//! fields. Callers are expected to reject non-positive height/weight and
//! out-of-range ages before invoking these; see `Profile::validate`.

use super::constants::{activity, bmi, bmr, calories, hydration, macros};
use crate::models::{ActivityLevel, BmiCategory, Gender, Goal, IdealWeightRange, MacroSplit};

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate Body Mass Index: weight (kg) / height (m) squared
///
/// Precondition: both inputs are strictly positive.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

/// Classify a BMI value against the WHO thresholds
///
/// Boundaries go to the higher category: 18.5 is normal weight, 25.0 is
/// overweight, 30.0 is obese.
#[must_use]
pub fn bmi_category(bmi_value: f64) -> BmiCategory {
    if bmi_value < bmi::UNDERWEIGHT_MAX {
        BmiCategory::Underweight
    } else if bmi_value < bmi::OVERWEIGHT_MIN {
        BmiCategory::NormalWeight
    } else if bmi_value < bmi::OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age)
/// + gender constant (+5 male, -161 female).
///
/// Gender "other" uses the female constant. That collapse comes from the
/// original product behavior and is preserved deliberately; see DESIGN.md.
#[must_use]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let gender_constant = match gender {
        Gender::Male => bmr::MALE_CONSTANT,
        Gender::Female | Gender::Other => bmr::FEMALE_CONSTANT,
    };

    round2(
        bmr::WEIGHT_COEF * weight_kg + bmr::HEIGHT_COEF * height_cm
            - bmr::AGE_COEF * f64::from(age)
            + gender_constant,
    )
}

/// Look up the TDEE multiplier for an activity level
///
/// Table-driven with a sedentary fallback, mirroring the defaulting
/// behavior of the original calorie calculation.
#[must_use]
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    activity::MULTIPLIERS
        .iter()
        .find(|(candidate, _)| *candidate == level)
        .map_or(activity::DEFAULT_MULTIPLIER, |(_, factor)| *factor)
}

/// Calculate the daily calorie target from BMR, activity level, and goal
///
/// TDEE = BMR x activity factor, then a fixed adjustment: -500 kcal for
/// weight loss, +300 kcal for muscle gain, unchanged otherwise.
#[must_use]
pub fn calculate_daily_calories(bmr_value: f64, level: ActivityLevel, goal: Goal) -> f64 {
    let tdee = bmr_value * activity_multiplier(level);

    let adjustment = match goal {
        Goal::LoseWeight => calories::LOSE_WEIGHT_ADJUSTMENT,
        Goal::GainMuscle => calories::GAIN_MUSCLE_ADJUSTMENT,
        Goal::Maintain | Goal::ImproveFitness => 0.0,
    };

    round2(tdee + adjustment)
}

/// Distribute daily calories across macronutrients for the given goal
#[must_use]
pub fn calculate_macros(daily_calories: f64, goal: Goal) -> MacroSplit {
    let (protein_pct, carbs_pct, fats_pct) = macros::split_for(goal);

    MacroSplit {
        protein: round2(daily_calories * protein_pct / macros::KCAL_PER_GRAM_PROTEIN_CARBS),
        carbs: round2(daily_calories * carbs_pct / macros::KCAL_PER_GRAM_PROTEIN_CARBS),
        fats: round2(daily_calories * fats_pct / macros::KCAL_PER_GRAM_FAT),
    }
}

/// Ideal weight range from the normal BMI band (18.5-24.9)
///
/// Gender is accepted for signature parity with the other calculators but
/// does not currently affect the result.
#[must_use]
pub fn calculate_ideal_weight(height_cm: f64, _gender: Gender) -> IdealWeightRange {
    let height_m = height_cm / 100.0;
    let min_kg = round1(bmi::UNDERWEIGHT_MAX * height_m * height_m);
    let max_kg = round1(bmi::IDEAL_RANGE_MAX * height_m * height_m);

    IdealWeightRange {
        min_kg,
        max_kg,
        range: format!("{min_kg:.1}-{max_kg:.1} kg"),
    }
}

/// Daily water intake target: 33 ml per kg of body weight
#[must_use]
pub fn calculate_water_intake(weight_kg: f64) -> f64 {
    round1(weight_kg * hydration::LITERS_PER_KG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_reference_value() {
        assert!((calculate_bmi(70.0, 175.0) - 22.86).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmi_category_reference() {
        assert_eq!(bmi_category(22.86), BmiCategory::NormalWeight);
    }

    #[test]
    fn test_bmi_category_boundaries_round_up() {
        assert_eq!(bmi_category(18.49), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::NormalWeight);
        assert_eq!(bmi_category(24.99), BmiCategory::NormalWeight);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.99), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmr_mifflin_st_jeor_male() {
        // 700 + 1093.75 - 150 + 5
        assert!((calculate_bmr(70.0, 175.0, 30, Gender::Male) - 1648.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmr_female_offset() {
        // Male and female differ by exactly 166 kcal
        let male = calculate_bmr(70.0, 175.0, 30, Gender::Male);
        let female = calculate_bmr(70.0, 175.0, 30, Gender::Female);
        assert!((male - female - 166.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmr_other_uses_female_constant() {
        let female = calculate_bmr(70.0, 175.0, 30, Gender::Female);
        let other = calculate_bmr(70.0, 175.0, 30, Gender::Other);
        assert!((female - other).abs() < f64::EPSILON);
    }

    #[test]
    fn test_daily_calories_sedentary_weight_loss() {
        // round(1673.75 * 1.2, 2) - 500 = 1508.5
        let calories = calculate_daily_calories(1673.75, ActivityLevel::Sedentary, Goal::LoseWeight);
        assert!((calories - 1508.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_daily_calories_surplus_for_muscle_gain() {
        let maintain =
            calculate_daily_calories(1673.75, ActivityLevel::ModeratelyActive, Goal::Maintain);
        let gain =
            calculate_daily_calories(1673.75, ActivityLevel::ModeratelyActive, Goal::GainMuscle);
        assert!((gain - maintain - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_activity_multiplier_table() {
        assert!((activity_multiplier(ActivityLevel::Sedentary) - 1.2).abs() < f64::EPSILON);
        assert!((activity_multiplier(ActivityLevel::LightlyActive) - 1.375).abs() < f64::EPSILON);
        assert!(
            (activity_multiplier(ActivityLevel::ModeratelyActive) - 1.55).abs() < f64::EPSILON
        );
        assert!((activity_multiplier(ActivityLevel::VeryActive) - 1.725).abs() < f64::EPSILON);
        assert!((activity_multiplier(ActivityLevel::ExtraActive) - 1.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_macros_maintain_reference() {
        let split = calculate_macros(2000.0, Goal::Maintain);
        assert!((split.protein - 125.0).abs() < f64::EPSILON);
        assert!((split.carbs - 250.0).abs() < f64::EPSILON);
        assert!((split.fats - 55.56).abs() < f64::EPSILON);
    }

    #[test]
    fn test_macros_goal_splits_cover_calories() {
        for goal in [Goal::LoseWeight, Goal::GainMuscle, Goal::Maintain] {
            let split = calculate_macros(2000.0, goal);
            let kcal = split.protein * 4.0 + split.carbs * 4.0 + split.fats * 9.0;
            // Splits sum to 100%, so reconstructed calories match within rounding
            assert!((kcal - 2000.0).abs() < 0.5, "goal {goal:?}: {kcal}");
        }
    }

    #[test]
    fn test_ideal_weight_range() {
        let range = calculate_ideal_weight(175.0, Gender::Male);
        assert!((range.min_kg - 56.7).abs() < f64::EPSILON);
        assert!((range.max_kg - 76.3).abs() < f64::EPSILON);
        assert_eq!(range.range, "56.7-76.3 kg");
    }

    #[test]
    fn test_ideal_weight_ignores_gender() {
        let male = calculate_ideal_weight(160.0, Gender::Male);
        let female = calculate_ideal_weight(160.0, Gender::Female);
        assert_eq!(male, female);
    }

    #[test]
    fn test_water_intake() {
        assert!((calculate_water_intake(70.0) - 2.3).abs() < f64::EPSILON);
        assert!((calculate_water_intake(100.0) - 3.3).abs() < f64::EPSILON);
    }
}
