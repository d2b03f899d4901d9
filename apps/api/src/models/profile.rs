use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Sentinel country meaning "no preference".
pub const ANY_COUNTRY: &str = "any";

/// A prospective student's profile. Built per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentProfile {
    /// Cumulative GPA on the 4.0 scale.
    pub cgpa: f64,
    /// IELTS band score, 0.0 – 9.0.
    pub ielts: f64,
    /// Total budget for the whole degree, in USD.
    pub budget: f64,
    /// Preferred country, or "any". Empty also means any.
    #[serde(default)]
    pub country: String,
    pub career_goals: String,
}

impl StudentProfile {
    /// The preferred country, or `None` when the student accepts any destination.
    pub fn country_preference(&self) -> Option<&str> {
        let country = self.country.trim();
        if country.is_empty() || country.eq_ignore_ascii_case(ANY_COUNTRY) {
            None
        } else {
            Some(country)
        }
    }

    /// Checks the ranges the scoring engine assumes. The engine itself never
    /// re-validates, so handlers call this before scoring.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.cgpa.is_finite() || !(0.0..=4.0).contains(&self.cgpa) {
            return Err(AppError::Validation(
                "cgpa must be between 0.0 and 4.0".to_string(),
            ));
        }
        if !self.ielts.is_finite() || !(0.0..=9.0).contains(&self.ielts) {
            return Err(AppError::Validation(
                "ielts must be between 0.0 and 9.0".to_string(),
            ));
        }
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(AppError::Validation(
                "budget must be a positive amount".to_string(),
            ));
        }
        if self.career_goals.trim().is_empty() {
            return Err(AppError::Validation(
                "career_goals cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> StudentProfile {
        StudentProfile {
            cgpa: 3.4,
            ielts: 7.0,
            budget: 80_000.0,
            country: "Canada".to_string(),
            career_goals: "data analyst".to_string(),
        }
    }

    #[test]
    fn test_country_preference_named() {
        assert_eq!(profile().country_preference(), Some("Canada"));
    }

    #[test]
    fn test_country_preference_any_is_case_insensitive() {
        let p = StudentProfile {
            country: "ANY".to_string(),
            ..profile()
        };
        assert_eq!(p.country_preference(), None);
    }

    #[test]
    fn test_country_preference_blank_means_any() {
        let p = StudentProfile {
            country: "  ".to_string(),
            ..profile()
        };
        assert_eq!(p.country_preference(), None);
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn test_cgpa_out_of_range_rejected() {
        let p = StudentProfile {
            cgpa: 4.5,
            ..profile()
        };
        assert!(matches!(p.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_ielts_nan_rejected() {
        let p = StudentProfile {
            ielts: f64::NAN,
            ..profile()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_zero_budget_rejected() {
        let p = StudentProfile {
            budget: 0.0,
            ..profile()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_blank_career_goals_rejected() {
        let p = StudentProfile {
            career_goals: "   ".to_string(),
            ..profile()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_missing_country_deserializes_as_any() {
        let json = r#"{"cgpa": 3.0, "ielts": 6.5, "budget": 50000, "career_goals": "law"}"#;
        let p: StudentProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.country_preference(), None);
    }
}
