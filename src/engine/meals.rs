// ABOUTME: Meal suggestion selector splitting daily calories across four meal slots
// ABOUTME: Static suggestion tables keyed by dietary preference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

//! Meal suggestions
//!
//! Daily calories split 25/35/30/10 across Breakfast/Lunch/Dinner/Snacks,
//! each slot carrying three fixed candidate suggestions from one of three
//! static tables. Keto and paleo share the default table; no
//! preference-specific content exists for them.

use super::constants::meals;
use crate::models::{DietaryPreference, MealSuggestion};

const VEGETARIAN: [(&str, [&str; 3]); 4] = [
    (
        "Breakfast",
        [
            "1 cup (80g) oatmeal with 1/2 cup berries, 1/4 cup mixed nuts, and 1 tbsp honey",
            "1 cup (240g) Greek yogurt with 1/3 cup granola and 1/2 cup mixed fruit",
            "2 slices whole grain toast with 1/2 avocado and 2 scrambled eggs",
        ],
    ),
    (
        "Lunch",
        [
            "1 cup (185g) cooked quinoa with 1.5 cups roasted vegetables and 3/4 cup chickpeas",
            "2 cups lentil soup with 2 slices whole grain bread and large mixed salad",
            "1.5 cups mixed vegetable stir-fry with 150g tofu and 1 cup brown rice",
        ],
    ),
    (
        "Dinner",
        [
            "2 large grilled portobello mushrooms with 1 medium sweet potato and 2 cups greens",
            "1.5 cups vegetable curry with 100g paneer and 3/4 cup cooked quinoa",
            "2 cups pasta primavera with 2 tbsp olive oil and 2 tbsp parmesan",
        ],
    ),
    (
        "Snacks",
        [
            "1/4 cup (60g) hummus with 1 cup vegetable sticks (carrots, celery, peppers)",
            "1/4 cup mixed nuts and 2 tbsp dried fruit",
            "1 medium apple sliced with 2 tbsp almond butter",
        ],
    ),
];

const VEGAN: [(&str, [&str; 3]); 4] = [
    (
        "Breakfast",
        [
            "1 smoothie bowl with 1 scoop protein powder, 1 cup mixed fruits, and 2 tbsp seeds",
            "1 cup (80g) overnight oats with 1 cup plant milk, 1 tbsp chia seeds, and 1/2 cup berries",
            "2 slices whole grain toast with 2 tbsp peanut butter and 1 sliced banana",
        ],
    ),
    (
        "Lunch",
        [
            "Buddha bowl: 3/4 cup quinoa, 3/4 cup chickpeas, 1.5 cups veggies, 2 tbsp tahini dressing",
            "Burrito bowl: 3/4 cup black beans, 1 medium sweet potato, 1/2 cup rice, salsa & guacamole",
            "2 cups lentil vegetable soup with 10-12 whole grain crackers",
        ],
    ),
    (
        "Dinner",
        [
            "150g tofu stir-fry with 2 cups mixed vegetables and 1 cup brown rice",
            "2 cups vegan chili with 1 piece (100g) cornbread",
            "2 cups pasta (150g dry) with 1 cup marinara sauce and 2 tbsp nutritional yeast",
        ],
    ),
    (
        "Snacks",
        [
            "1/2 cup (80g) roasted chickpeas",
            "2-3 energy balls made with 3-4 dates and 1/4 cup nuts",
            "1 oz (28g) vegetable chips with 1/4 cup guacamole",
        ],
    ),
];

const DEFAULT: [(&str, [&str; 3]); 4] = [
    (
        "Breakfast",
        [
            "3 scrambled eggs with 1 cup spinach and 2 slices whole grain toast",
            "Protein smoothie: 1 scoop protein powder, 1 banana, 1/2 cup berries, 1/3 cup oats",
            "1 cup (240g) Greek yogurt with 1/3 cup granola, 1/4 cup nuts, and 1 tbsp honey",
        ],
    ),
    (
        "Lunch",
        [
            "150g grilled chicken with 3 cups mixed greens salad and 2 tbsp vinaigrette",
            "Large wrap: 120g turkey, 1/2 avocado, 1 cup vegetables, whole wheat tortilla",
            "150g baked salmon with 3/4 cup quinoa and 1.5 cups roasted vegetables",
        ],
    ),
    (
        "Dinner",
        [
            "150g lean beef or chicken with 1 medium sweet potato and 1.5 cups steamed broccoli",
            "150g baked fish with 1 cup brown rice and 1 cup asparagus",
            "5-6 turkey meatballs (150g) with 1.5 cups whole wheat pasta and 1 cup vegetables",
        ],
    ),
    (
        "Snacks",
        [
            "1 protein bar (30g protein) or 1 scoop protein shake",
            "1 cup (225g) cottage cheese with 1/2 cup mixed fruit",
            "2 hard-boiled eggs with 1 cup cherry tomatoes",
        ],
    ),
];

fn slot_fractions() -> [f64; 4] {
    [
        meals::BREAKFAST_FRACTION,
        meals::LUNCH_FRACTION,
        meals::DINNER_FRACTION,
        meals::SNACKS_FRACTION,
    ]
}

/// Generate the four daily meal suggestions for a calorie target and
/// dietary preference
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // calorie budgets are small positive numbers
pub fn generate_meal_suggestions(
    daily_calories: f64,
    dietary_preference: Option<DietaryPreference>,
) -> Vec<MealSuggestion> {
    let template = match dietary_preference {
        Some(DietaryPreference::Vegetarian) => &VEGETARIAN,
        Some(DietaryPreference::Vegan) => &VEGAN,
        // keto/paleo/none share the default table
        Some(DietaryPreference::Keto | DietaryPreference::Paleo | DietaryPreference::None)
        | None => &DEFAULT,
    };

    template
        .iter()
        .zip(slot_fractions())
        .map(|((meal, suggestions), fraction)| MealSuggestion {
            meal: (*meal).to_owned(),
            calories: (daily_calories * fraction).round() as u32,
            suggestions: suggestions.iter().map(|s| (*s).to_owned()).collect(),
        })
        .collect()
}
