// ABOUTME: Core data models for the PulsePlan assessment API
// ABOUTME: Defines Profile, Assessment, Plan and the enums describing user goals and lifestyle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

//! # Data Models
//!
//! Immutable value types exchanged with the assessment engine. A `Profile`
//! is constructed once per request from external input and read-only
//! thereafter; everything else is derived by the engine and never mutated
//! after assembly.
//!
//! ## Design Principles
//!
//! - **Serializable**: every model round-trips through JSON unchanged
//! - **Type Safe**: enum fields reject unrecognized values at the wire
//! - **Behavior-free**: all computation lives in the `engine` module

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Biological gender used by the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise or a physical job
    ExtraActive,
}

/// User goal driving calorie adjustment, macros, and plan templates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    Maintain,
    GainMuscle,
    ImproveFitness,
}

/// Dietary preference for meal suggestions
///
/// Keto and paleo are recognized on the wire but share the default meal
/// templates; no preference-specific content exists for them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DietaryPreference {
    None,
    Vegetarian,
    Vegan,
    Keto,
    Paleo,
}

/// Validated user profile submitted for assessment
///
/// Wire field names match the public API: `height` is centimeters and
/// `weight` is kilograms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Display name, non-empty
    pub name: String,
    /// Age in years, 1-120
    pub age: u32,
    /// Biological gender
    pub gender: Gender,
    /// Height in centimeters, strictly positive
    pub height: f64,
    /// Weight in kilograms, strictly positive
    pub weight: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// User goal
    pub goal: Goal,
    /// Optional dietary preference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_preference: Option<DietaryPreference>,
    /// Optional ordered list of free-text medical conditions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_conditions: Option<Vec<String>>,
}

impl Profile {
    /// Validate the numeric field constraints
    ///
    /// Enum fields are already enforced by serde at deserialization; this
    /// covers the range constraints the wire format cannot express. The
    /// engine assumes a validated profile.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first violated constraint
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if !(1..=120).contains(&self.age) {
            return Err(AppError::out_of_range("Age must be between 1 and 120"));
        }
        if self.height <= 0.0 {
            return Err(AppError::out_of_range("Height must be greater than 0 cm"));
        }
        if self.weight <= 0.0 {
            return Err(AppError::out_of_range("Weight must be greater than 0 kg"));
        }
        Ok(())
    }
}

/// WHO BMI classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
}

impl Display for BmiCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let label = match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        };
        write!(f, "{label}")
    }
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Ideal weight range derived from the normal BMI band
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdealWeightRange {
    pub min_kg: f64,
    pub max_kg: f64,
    /// Display string, e.g. "56.7-76.3 kg"
    pub range: String,
}

/// Complete health assessment: computed metrics plus risk and
/// recommendation lists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assessment {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub daily_calories: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fats_grams: f64,
    pub water_liters: f64,
    pub ideal_weight_range: IdealWeightRange,
    /// Ordered, never empty (falls back to a "no risks" sentinel)
    pub health_risks: Vec<String>,
    /// Ordered, at most 12 entries
    pub recommendations: Vec<String>,
}

/// One day of the weekly workout schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutDay {
    pub day: String,
    #[serde(rename = "type")]
    pub workout_type: String,
    pub activity: String,
    pub duration: String,
    pub intensity: String,
}

/// One meal slot with a calorie budget and candidate suggestions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealSuggestion {
    pub meal: String,
    pub calories: u32,
    pub suggestions: Vec<String>,
}

/// Weekly goals keyed by goal category
///
/// The key set is intentionally non-uniform: weight-focused goals populate
/// `weight`, everything else populates `fitness`. Absent fields are omitted
/// from the serialized output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyGoals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness: Option<String>,
    pub exercise: String,
    pub nutrition: String,
    pub hydration: String,
    pub sleep: String,
    pub tracking: String,
}

/// The complete personalized plan returned for one evaluation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub user_info: Profile,
    pub assessment: Assessment,
    /// Exactly 7 entries, Monday first
    pub workout_plan: Vec<WorkoutDay>,
    /// Exactly 4 entries: Breakfast, Lunch, Dinner, Snacks
    pub meal_suggestions: Vec<MealSuggestion>,
    /// Fixed ordered list of 10 tips
    pub lifestyle_tips: Vec<String>,
    pub weekly_goals: WeeklyGoals,
}
