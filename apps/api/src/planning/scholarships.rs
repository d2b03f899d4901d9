//! Scholarship Matcher — picks the scholarships relevant to a student's
//! destinations and labels how well the student meets each one's minimums.

use serde::Serialize;

use crate::catalog::{same_country, scholarships};
use crate::models::profile::StudentProfile;
use crate::models::scholarship::{Eligibility, Scholarship, ScholarshipResult};
use crate::planning::living_costs::countries_of;
use crate::recommendation::ranker::Recommendation;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScholarshipSummary {
    pub eligible_count: usize,
    /// Sum of `amount` over eligible scholarships.
    pub total_eligible_amount: u64,
}

/// Scholarships for the preferred country, or for the recommended countries when
/// the student accepts any destination.
///
/// Sorted eligible → partial → ineligible, then by amount descending. Equal keys
/// keep catalog order.
pub fn find_scholarships(
    profile: &StudentProfile,
    recommendations: &[Recommendation],
) -> Vec<ScholarshipResult> {
    let countries = match profile.country_preference() {
        Some(country) => vec![country],
        None => countries_of(recommendations),
    };
    scholarships_for_countries(profile, &countries)
}

/// Matches against an explicit list of destination countries.
pub fn scholarships_for_countries(
    profile: &StudentProfile,
    countries: &[&str],
) -> Vec<ScholarshipResult> {
    let mut results: Vec<ScholarshipResult> = scholarships()
        .iter()
        .filter(|s| countries.iter().any(|c| same_country(s.country, c)))
        .map(|s| ScholarshipResult {
            scholarship: s,
            eligibility: eligibility(profile, s),
        })
        .collect();

    results.sort_by(|a, b| {
        a.eligibility
            .cmp(&b.eligibility)
            .then_with(|| b.scholarship.amount.cmp(&a.scholarship.amount))
    });
    results
}

pub fn eligibility(profile: &StudentProfile, scholarship: &Scholarship) -> Eligibility {
    Eligibility::classify(
        profile.cgpa >= scholarship.min_cgpa,
        profile.ielts >= scholarship.min_ielts,
    )
}

pub fn summarize_scholarships(results: &[ScholarshipResult]) -> ScholarshipSummary {
    let eligible = results
        .iter()
        .filter(|r| r.eligibility == Eligibility::Eligible);
    ScholarshipSummary {
        eligible_count: eligible.clone().count(),
        total_eligible_amount: eligible.map(|r| r.scholarship.amount as u64).sum(),
    }
}
