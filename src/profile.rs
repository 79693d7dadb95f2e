//! User profile model: biometric and preference fields for one
//! plan-generation request.
//!
//! A profile is built fresh from each form submission and dropped once the
//! response is rendered. Enum variants serialize to their human-readable
//! form labels so JSON payloads, prompts, and the form agree on spelling.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Form bounds for the numeric inputs.
pub const AGE_RANGE: (u32, u32) = (10, 100);
pub const WEIGHT_RANGE: (f64, f64) = (30.0, 200.0);
pub const HEIGHT_RANGE: (f64, f64) = (100.0, 250.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietaryPreference {
    Keto,
    Vegetarian,
    #[serde(rename = "Low Carb")]
    LowCarb,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CuisinePreference {
    Indian,
    Mediterranean,
    Continental,
    Asian,
    #[serde(rename = "No Preference")]
    NoPreference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessGoal {
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    Endurance,
    Flexibility,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

impl std::fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keto => write!(f, "Keto"),
            Self::Vegetarian => write!(f, "Vegetarian"),
            Self::LowCarb => write!(f, "Low Carb"),
            Self::Balanced => write!(f, "Balanced"),
        }
    }
}

impl std::fmt::Display for CuisinePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Indian => write!(f, "Indian"),
            Self::Mediterranean => write!(f, "Mediterranean"),
            Self::Continental => write!(f, "Continental"),
            Self::Asian => write!(f, "Asian"),
            Self::NoPreference => write!(f, "No Preference"),
        }
    }
}

impl std::fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WeightLoss => write!(f, "Weight Loss"),
            Self::MuscleGain => write!(f, "Muscle Gain"),
            Self::Endurance => write!(f, "Endurance"),
            Self::Flexibility => write!(f, "Flexibility"),
        }
    }
}

/// One user's biometric and preference data.
///
/// `age`, `weight` and `height` default to zero when absent from the
/// payload so a missing field surfaces as a validation warning rather
/// than a deserialization failure, matching the form's behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub age: u32,
    /// Weight in kilograms.
    #[serde(default, rename = "weight")]
    pub weight_kg: f64,
    /// Height in centimeters.
    #[serde(default, rename = "height")]
    pub height_cm: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub dietary_preference: DietaryPreference,
    pub cuisine_preference: CuisinePreference,
    pub fitness_goal: FitnessGoal,
    #[serde(default = "default_allergies")]
    pub allergies: String,
}

fn default_name() -> String {
    "John Doe".to_string()
}

fn default_allergies() -> String {
    "None".to_string()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: default_name(),
            age: 25,
            weight_kg: 70.0,
            height_cm: 170.0,
            gender: Gender::Male,
            activity_level: ActivityLevel::Low,
            dietary_preference: DietaryPreference::Keto,
            cuisine_preference: CuisinePreference::Indian,
            fitness_goal: FitnessGoal::WeightLoss,
            allergies: default_allergies(),
        }
    }
}

impl Profile {
    /// Body Mass Index, weight_kg / height_m², rounded to two decimals.
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        (self.weight_kg / (height_m * height_m) * 100.0).round() / 100.0
    }

    /// Check the profile before any model call is issued.
    ///
    /// Zero/missing required fields are reported together; range checks
    /// only run once all required fields are present.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.age == 0 {
            missing.push("age");
        }
        if self.weight_kg == 0.0 {
            missing.push("weight");
        }
        if self.height_cm == 0.0 {
            missing.push("height");
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        if self.age < AGE_RANGE.0 || self.age > AGE_RANGE.1 {
            return Err(ValidationError::OutOfRange {
                field: "age",
                value: f64::from(self.age),
                min: f64::from(AGE_RANGE.0),
                max: f64::from(AGE_RANGE.1),
            });
        }
        if self.weight_kg < WEIGHT_RANGE.0 || self.weight_kg > WEIGHT_RANGE.1 {
            return Err(ValidationError::OutOfRange {
                field: "weight",
                value: self.weight_kg,
                min: WEIGHT_RANGE.0,
                max: WEIGHT_RANGE.1,
            });
        }
        if self.height_cm < HEIGHT_RANGE.0 || self.height_cm > HEIGHT_RANGE.1 {
            return Err(ValidationError::OutOfRange {
                field: "height",
                value: self.height_cm,
                min: HEIGHT_RANGE.0,
                max: HEIGHT_RANGE.1,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_rounds_to_two_decimals() {
        let profile = Profile {
            weight_kg: 70.0,
            height_cm: 170.0,
            ..Default::default()
        };
        assert_eq!(profile.bmi(), 24.22);

        let profile = Profile {
            weight_kg: 60.0,
            height_cm: 165.0,
            ..Default::default()
        };
        assert_eq!(profile.bmi(), 22.04);
    }

    #[test]
    fn default_profile_is_valid() {
        assert!(Profile::default().validate().is_ok());
    }

    #[test]
    fn zero_fields_reported_together() {
        let profile = Profile {
            age: 0,
            weight_kg: 0.0,
            height_cm: 0.0,
            ..Default::default()
        };
        assert_eq!(
            profile.validate(),
            Err(ValidationError::MissingFields(vec![
                "age", "weight", "height"
            ]))
        );
    }

    #[test]
    fn zero_age_alone_is_rejected() {
        let profile = Profile {
            age: 0,
            ..Default::default()
        };
        assert_eq!(
            profile.validate(),
            Err(ValidationError::MissingFields(vec!["age"]))
        );
    }

    #[test]
    fn out_of_range_weight_rejected() {
        let profile = Profile {
            weight_kg: 250.0,
            ..Default::default()
        };
        match profile.validate() {
            Err(ValidationError::OutOfRange { field, .. }) => assert_eq!(field, "weight"),
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn enums_use_form_labels() {
        assert_eq!(
            serde_json::to_string(&FitnessGoal::WeightLoss).unwrap(),
            "\"Weight Loss\""
        );
        assert_eq!(
            serde_json::to_string(&DietaryPreference::LowCarb).unwrap(),
            "\"Low Carb\""
        );
        assert_eq!(
            serde_json::to_string(&CuisinePreference::NoPreference).unwrap(),
            "\"No Preference\""
        );
        assert_eq!(FitnessGoal::WeightLoss.to_string(), "Weight Loss");
        assert_eq!(CuisinePreference::NoPreference.to_string(), "No Preference");
    }

    #[test]
    fn profile_deserializes_with_defaults() {
        let json = r#"{
            "gender": "Female",
            "activity_level": "Moderate",
            "dietary_preference": "Vegetarian",
            "cuisine_preference": "Indian",
            "fitness_goal": "Weight Loss"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "John Doe");
        assert_eq!(profile.allergies, "None");
        assert_eq!(profile.age, 0);
        assert_eq!(
            profile.validate(),
            Err(ValidationError::MissingFields(vec![
                "age", "weight", "height"
            ]))
        );
    }

    #[test]
    fn profile_serde_roundtrip() {
        let profile = Profile {
            name: "Jane".to_string(),
            age: 30,
            weight_kg: 60.0,
            height_cm: 165.0,
            gender: Gender::Female,
            activity_level: ActivityLevel::Moderate,
            dietary_preference: DietaryPreference::Vegetarian,
            cuisine_preference: CuisinePreference::Indian,
            fitness_goal: FitnessGoal::WeightLoss,
            allergies: "None".to_string(),
        };
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "Jane");
        assert_eq!(parsed.gender, Gender::Female);
        assert_eq!(parsed.weight_kg, 60.0);
        assert_eq!(parsed.fitness_goal, FitnessGoal::WeightLoss);
    }
}
