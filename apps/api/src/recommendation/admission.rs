//! Admission Probability — pluggable, trait-based estimate of a student's chance
//! of admission at one university.
//!
//! Default: `HeuristicAdmissionModel` (three fixed bands, deterministic).
//! `AppState` holds an `Arc<dyn AdmissionModel>` so another model can be swapped
//! in without touching the ranker or handlers.

use crate::models::profile::StudentProfile;
use crate::models::university::University;

/// Estimates are never certain either way.
pub const MIN_PROBABILITY: u32 = 5;
pub const MAX_PROBABILITY: u32 = 95;

pub trait AdmissionModel: Send + Sync {
    /// Admission probability in percent, within [`MIN_PROBABILITY`, `MAX_PROBABILITY`].
    fn estimate(&self, profile: &StudentProfile, university: &University) -> u32;

    /// Short label reported alongside results.
    fn name(&self) -> &'static str;
}

/// Banded heuristic: CGPA fit (max 40) + IELTS fit (max 25) + selectivity (max 35).
///
/// Each band's thresholds are inclusive on the lower bound.
pub struct HeuristicAdmissionModel;

impl AdmissionModel for HeuristicAdmissionModel {
    fn estimate(&self, profile: &StudentProfile, university: &University) -> u32 {
        admission_probability(profile, university)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

pub fn admission_probability(profile: &StudentProfile, university: &University) -> u32 {
    let raw = cgpa_band(profile.cgpa / university.avg_cgpa)
        + ielts_band(profile.ielts / university.avg_ielts)
        + selectivity_band(university.acceptance_rate);
    raw.clamp(MIN_PROBABILITY, MAX_PROBABILITY)
}

fn cgpa_band(ratio: f64) -> u32 {
    if ratio >= 1.05 {
        40
    } else if ratio >= 0.95 {
        35
    } else if ratio >= 0.85 {
        25
    } else if ratio >= 0.75 {
        15
    } else {
        5
    }
}

fn ielts_band(ratio: f64) -> u32 {
    if ratio >= 1.05 {
        25
    } else if ratio >= 0.95 {
        22
    } else if ratio >= 0.85 {
        15
    } else {
        5
    }
}

/// Keyed only on the university's acceptance rate, whatever the student's fit.
fn selectivity_band(acceptance_rate: f64) -> u32 {
    if acceptance_rate >= 60.0 {
        35
    } else if acceptance_rate >= 40.0 {
        28
    } else if acceptance_rate >= 20.0 {
        18
    } else if acceptance_rate >= 10.0 {
        10
    } else {
        5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_university;

    fn make_profile(cgpa: f64, ielts: f64) -> StudentProfile {
        StudentProfile {
            cgpa,
            ielts,
            budget: 100_000.0,
            country: "any".to_string(),
            career_goals: "engineering".to_string(),
        }
    }

    #[test]
    fn test_cgpa_band_thresholds_inclusive() {
        assert_eq!(cgpa_band(1.05), 40);
        assert_eq!(cgpa_band(0.95), 35);
        assert_eq!(cgpa_band(0.85), 25);
        assert_eq!(cgpa_band(0.75), 15);
        assert_eq!(cgpa_band(0.7499), 5);
    }

    #[test]
    fn test_ielts_band_thresholds_inclusive() {
        assert_eq!(ielts_band(1.2), 25);
        assert_eq!(ielts_band(1.0), 22);
        assert_eq!(ielts_band(0.85), 15);
        assert_eq!(ielts_band(0.5), 5);
    }

    #[test]
    fn test_selectivity_band() {
        assert_eq!(selectivity_band(70.0), 35);
        assert_eq!(selectivity_band(60.0), 35);
        assert_eq!(selectivity_band(43.0), 28);
        assert_eq!(selectivity_band(27.0), 18);
        assert_eq!(selectivity_band(10.0), 10);
        assert_eq!(selectivity_band(4.0), 5);
    }

    #[test]
    fn test_strong_student_at_mit() {
        let mit = find_university("Massachusetts Institute of Technology").unwrap();
        // 3.8/3.9 → 35, 7.5/7.5 → 22, 4% acceptance → 5
        assert_eq!(admission_probability(&make_profile(3.8, 7.5), mit), 62);
    }

    #[test]
    fn test_ceiling_is_95() {
        let melbourne = find_university("University of Melbourne").unwrap();
        // 40 + 25 + 35 = 100 before clamping
        assert_eq!(admission_probability(&make_profile(4.0, 9.0), melbourne), 95);
    }

    #[test]
    fn test_floor_holds_for_zero_scores() {
        let mit = find_university("Massachusetts Institute of Technology").unwrap();
        let p = admission_probability(&make_profile(0.0, 0.0), mit);
        assert_eq!(p, 15);
        assert!(p >= MIN_PROBABILITY);
    }

    #[test]
    fn test_heuristic_model_delegates() {
        let uni = find_university("University of Toronto").unwrap();
        let profile = make_profile(3.2, 6.0);
        let model = HeuristicAdmissionModel;
        assert_eq!(model.estimate(&profile, uni), admission_probability(&profile, uni));
        assert_eq!(model.name(), "heuristic");
    }
}
