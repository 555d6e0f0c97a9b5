// ABOUTME: Health risk selector mapping BMI, age, and medical history to risk statements
// ABOUTME: Ordered rule evaluation with a "no significant risks" fallback sentinel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

//! Health risk selection
//!
//! Risks accumulate in a fixed evaluation order: the single matching BMI
//! bracket, then the age/weight combination, then existing medical
//! conditions. The output order reflects evaluation order, not severity.

use super::constants::{bmi, rules};

/// Sentinel returned when no rule fires
pub const NO_RISKS_SENTINEL: &str = "No significant health risks identified";

/// Identify potential health risks for the given metrics
///
/// Never returns an empty list.
#[must_use]
pub fn assess_health_risks(
    bmi_value: f64,
    age: u32,
    medical_conditions: Option<&[String]>,
) -> Vec<String> {
    let mut risks = Vec::new();

    if bmi_value < bmi::UNDERWEIGHT_MAX {
        risks.push(
            "Increased risk of nutritional deficiencies and weakened immune system".to_owned(),
        );
        risks.push("Potential bone density issues".to_owned());
    } else if bmi_value >= bmi::OBESE_MIN {
        risks.push("High risk of cardiovascular disease".to_owned());
        risks.push("Significantly increased risk of type 2 diabetes".to_owned());
        risks.push("Risk of sleep apnea and joint problems".to_owned());
        risks.push("Increased risk of certain cancers".to_owned());
    } else if bmi_value >= bmi::OVERWEIGHT_MIN {
        risks.push("Moderate risk of cardiovascular disease".to_owned());
        risks.push("Increased risk of type 2 diabetes".to_owned());
    }

    if age > rules::METABOLIC_RISK_AGE && bmi_value >= bmi::OVERWEIGHT_MIN {
        risks.push("Age-related metabolic slowdown combined with excess weight".to_owned());
    }

    if let Some(conditions) = medical_conditions {
        if !conditions.is_empty() {
            risks.push(format!(
                "Existing conditions require medical supervision: {}",
                conditions.join(", ")
            ));
        }
    }

    if risks.is_empty() {
        risks.push(NO_RISKS_SENTINEL.to_owned());
    }

    risks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_profile_gets_sentinel() {
        let risks = assess_health_risks(22.0, 30, None);
        assert_eq!(risks, vec![NO_RISKS_SENTINEL.to_owned()]);
    }

    #[test]
    fn test_underweight_risks() {
        let risks = assess_health_risks(17.0, 25, None);
        assert_eq!(risks.len(), 2);
        assert!(risks[0].contains("nutritional deficiencies"));
    }

    #[test]
    fn test_obese_bracket_supersedes_overweight() {
        let risks = assess_health_risks(31.0, 30, None);
        assert_eq!(risks.len(), 4);
        assert!(risks[0].starts_with("High risk"));
        assert!(!risks.iter().any(|r| r.starts_with("Moderate risk")));
    }

    #[test]
    fn test_age_risk_is_additive() {
        let young = assess_health_risks(27.0, 40, None);
        let older = assess_health_risks(27.0, 41, None);
        assert_eq!(older.len(), young.len() + 1);
        assert!(older.last().unwrap().contains("metabolic slowdown"));
    }

    #[test]
    fn test_age_risk_requires_excess_weight() {
        let risks = assess_health_risks(22.0, 60, None);
        assert_eq!(risks, vec![NO_RISKS_SENTINEL.to_owned()]);
    }

    #[test]
    fn test_medical_conditions_joined() {
        let conditions = vec!["diabetes".to_owned(), "hypertension".to_owned()];
        let risks = assess_health_risks(22.0, 30, Some(&conditions));
        assert_eq!(risks.len(), 1);
        assert!(risks[0].ends_with("diabetes, hypertension"));
    }

    #[test]
    fn test_empty_condition_list_does_not_fire() {
        let conditions: Vec<String> = Vec::new();
        let risks = assess_health_risks(22.0, 30, Some(&conditions));
        assert_eq!(risks, vec![NO_RISKS_SENTINEL.to_owned()]);
    }

    #[test]
    fn test_evaluation_order_is_stable() {
        let conditions = vec!["asthma".to_owned()];
        let risks = assess_health_risks(26.0, 45, Some(&conditions));
        assert_eq!(risks.len(), 4);
        assert!(risks[0].starts_with("Moderate risk"));
        assert!(risks[2].contains("metabolic slowdown"));
        assert!(risks[3].contains("asthma"));
    }
}
