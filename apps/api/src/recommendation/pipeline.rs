//! End-to-end analysis: rank universities, then match scholarships and living
//! costs for the countries that made the list.

use tracing::debug;

use crate::models::living_cost::CountryCostData;
use crate::models::profile::StudentProfile;
use crate::models::scholarship::ScholarshipResult;
use crate::planning::living_costs::{cost_of_living, countries_of};
use crate::planning::scholarships::find_scholarships;
use crate::recommendation::admission::AdmissionModel;
use crate::recommendation::keywords::career_keywords;
use crate::recommendation::ranker::{analyze_profile_with, Recommendation};

#[derive(Debug, Clone)]
pub struct Analysis {
    pub keywords: Vec<&'static str>,
    pub recommendations: Vec<Recommendation>,
    pub scholarships: Vec<ScholarshipResult>,
    pub living_costs: Vec<&'static CountryCostData>,
}

pub fn run_analysis(profile: &StudentProfile, model: &dyn AdmissionModel) -> Analysis {
    let keywords = career_keywords(&profile.career_goals);
    let recommendations = analyze_profile_with(profile, model);
    let scholarships = find_scholarships(profile, &recommendations);
    let living_costs = cost_of_living(&countries_of(&recommendations));

    debug!(
        keywords = ?keywords,
        recommendations = recommendations.len(),
        scholarships = scholarships.len(),
        countries = living_costs.len(),
        "analysis complete"
    );

    Analysis {
        keywords,
        recommendations,
        scholarships,
        living_costs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::admission::HeuristicAdmissionModel;

    #[test]
    fn test_pipeline_costs_follow_recommendation_countries() {
        let profile = StudentProfile {
            cgpa: 3.5,
            ielts: 7.0,
            budget: 100_000.0,
            country: "any".to_string(),
            career_goals: "business".to_string(),
        };
        let analysis = run_analysis(&profile, &HeuristicAdmissionModel);

        assert_eq!(analysis.keywords, vec!["business"]);
        assert!(!analysis.recommendations.is_empty());
        for cost in &analysis.living_costs {
            assert!(analysis
                .recommendations
                .iter()
                .any(|r| r.university.country == cost.country));
        }
    }

    #[test]
    fn test_pipeline_no_matches_is_empty_everywhere() {
        let profile = StudentProfile {
            cgpa: 3.5,
            ielts: 7.0,
            budget: 100_000.0,
            country: "Atlantis".to_string(),
            career_goals: "business".to_string(),
        };
        let analysis = run_analysis(&profile, &HeuristicAdmissionModel);
        assert!(analysis.recommendations.is_empty());
        assert!(analysis.scholarships.is_empty());
        assert!(analysis.living_costs.is_empty());
    }
}
