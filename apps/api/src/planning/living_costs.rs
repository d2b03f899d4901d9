//! Cost-of-Living Lookup.

use crate::catalog::{country_costs, same_country};
use crate::models::living_cost::CountryCostData;
use crate::recommendation::ranker::Recommendation;

/// Cost records for the distinct countries named, in catalog order.
/// Countries without a record are skipped.
pub fn cost_of_living<S: AsRef<str>>(countries: &[S]) -> Vec<&'static CountryCostData> {
    country_costs()
        .iter()
        .filter(|data| countries.iter().any(|c| same_country(data.country, c.as_ref())))
        .collect()
}

/// Distinct countries of a ranked list, first occurrence first.
pub fn countries_of(recommendations: &[Recommendation]) -> Vec<&'static str> {
    let mut countries: Vec<&'static str> = Vec::new();
    for rec in recommendations {
        let country = rec.university.country;
        if !countries.iter().any(|c| same_country(c, country)) {
            countries.push(country);
        }
    }
    countries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::StudentProfile;
    use crate::recommendation::ranker::analyze_profile;

    #[test]
    fn test_duplicates_collapse_case_insensitively() {
        let costs = cost_of_living(&["USA", "usa", "Canada"]);
        let names: Vec<&str> = costs.iter().map(|c| c.country).collect();
        assert_eq!(names, vec!["USA", "Canada"]);
    }

    #[test]
    fn test_catalog_order_preserved() {
        let costs = cost_of_living(&["Netherlands", "UK"]);
        let names: Vec<&str> = costs.iter().map(|c| c.country).collect();
        assert_eq!(names, vec!["UK", "Netherlands"]);
    }

    #[test]
    fn test_unknown_countries_are_omitted() {
        let costs = cost_of_living(&["Atlantis".to_string(), "Germany".to_string()]);
        assert_eq!(costs.len(), 1);
        assert_eq!(costs[0].country, "Germany");
    }

    #[test]
    fn test_empty_input() {
        let none: [&str; 0] = [];
        assert!(cost_of_living(&none).is_empty());
    }

    #[test]
    fn test_countries_of_recommendations_are_distinct() {
        let profile = StudentProfile {
            cgpa: 3.5,
            ielts: 7.0,
            budget: 100_000.0,
            country: "any".to_string(),
            career_goals: "business".to_string(),
        };
        let recs = analyze_profile(&profile);
        let countries = countries_of(&recs);
        let mut deduped = countries.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), countries.len());
        assert_eq!(cost_of_living(&countries).len(), countries.len());
    }
}
