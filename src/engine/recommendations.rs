// ABOUTME: Recommendation selector concatenating rule groups in a fixed order
// ABOUTME: BMI, goal, activity, age, then general-health groups, truncated to 12 entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

//! Personalized recommendations
//!
//! Rule groups are concatenated in a fixed order and the result truncated
//! to the first 12 entries. The cap is positional, not a ranking: items
//! past the cap are dropped regardless of importance, so the group order
//! here is user-visible and must not be reordered.

use super::constants::{bmi, rules};
use crate::models::{ActivityLevel, Goal, Profile};

/// Generate the ordered recommendation list for a profile
#[must_use]
pub fn generate_recommendations(profile: &Profile, bmi_value: f64) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    // Group 1: BMI
    if bmi_value < bmi::UNDERWEIGHT_MAX {
        recommendations.extend(
            [
                "Focus on nutrient-dense, calorie-rich foods",
                "Incorporate strength training to build muscle mass",
                "Eat 5-6 smaller meals throughout the day",
                "Consider protein shakes as supplements",
            ]
            .map(str::to_owned),
        );
    } else if bmi_value >= bmi::OVERWEIGHT_MIN {
        recommendations.extend(
            [
                "Create a sustainable calorie deficit through balanced eating",
                "Increase physical activity gradually",
                "Focus on whole foods and reduce processed foods",
                "Practice portion control and mindful eating",
            ]
            .map(str::to_owned),
        );
    }

    // Group 2: goal
    match profile.goal {
        Goal::LoseWeight => recommendations.extend(
            [
                "Aim for 0.5-1 kg weight loss per week for sustainable results",
                "Combine cardio exercises with strength training",
                "Stay hydrated - drink water before meals",
                "Get 7-9 hours of quality sleep per night",
            ]
            .map(str::to_owned),
        ),
        Goal::GainMuscle => recommendations.extend(
            [
                "Prioritize progressive overload in strength training",
                "Ensure adequate protein intake (1.6-2.2g per kg body weight)",
                "Allow proper recovery time between workouts",
                "Consider creatine supplementation (consult a professional)",
            ]
            .map(str::to_owned),
        ),
        Goal::ImproveFitness => recommendations.extend(
            [
                "Include a mix of cardio, strength, and flexibility training",
                "Set specific, measurable fitness goals",
                "Track your progress weekly",
                "Gradually increase workout intensity",
            ]
            .map(str::to_owned),
        ),
        Goal::Maintain => {}
    }

    // Group 3: activity level
    if profile.activity_level == ActivityLevel::Sedentary {
        recommendations.push("Start with 10-15 minute walks daily and gradually increase".to_owned());
        recommendations.push("Take regular breaks from sitting every hour".to_owned());
    }

    // Group 4: age
    if profile.age > rules::SENIOR_RECOMMENDATION_AGE {
        recommendations.extend(
            [
                "Include balance and flexibility exercises to prevent falls",
                "Focus on bone-strengthening activities",
                "Consider vitamin D and calcium supplementation (consult doctor)",
            ]
            .map(str::to_owned),
        );
    }

    // Group 5: general health, always last
    recommendations.extend(
        [
            "Regular health check-ups and blood work annually",
            "Manage stress through meditation or yoga",
            "Limit alcohol consumption and avoid smoking",
            "Build a support system for accountability",
        ]
        .map(str::to_owned),
    );

    recommendations.truncate(rules::MAX_RECOMMENDATIONS);
    recommendations
}
