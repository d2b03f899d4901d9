//! Report builder — folds one analysis into a self-contained, shareable report.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::living_cost::CountryCostData;
use crate::models::profile::StudentProfile;
use crate::models::scholarship::{Eligibility, ScholarshipResult, ScholarshipType};
use crate::recommendation::ranker::{AdmissionTier, Recommendation};

#[derive(Debug, Clone, Serialize)]
pub struct UniversityRow {
    pub rank: usize,
    pub name: &'static str,
    pub country: &'static str,
    pub world_ranking: u32,
    pub admission_probability: u32,
    pub admission_tier: AdmissionTier,
    pub match_score: u32,
    pub roi_score: u32,
    pub tuition_per_year: u32,
    pub estimated_total_cost: u64,
    pub estimated_roi: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScholarshipRow {
    pub name: &'static str,
    pub country: &'static str,
    #[serde(rename = "type")]
    pub scholarship_type: ScholarshipType,
    pub amount_label: &'static str,
    pub deadline: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LivingCostRow {
    pub country: &'static str,
    pub visa_fee: u32,
    pub monthly_living: u32,
    pub two_year_living: u32,
    pub work_permit_hours: u32,
    pub post_study_work_visa: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// e.g. "October 16, 2026"
    pub generated_on: String,
    pub profile: StudentProfile,
    pub universities: Vec<UniversityRow>,
    /// Only scholarships the student fully qualifies for.
    pub eligible_scholarships: Vec<ScholarshipRow>,
    pub living_costs: Vec<LivingCostRow>,
}

pub fn build_report(
    profile: &StudentProfile,
    recommendations: &[Recommendation],
    scholarships: &[ScholarshipResult],
    living_costs: &[&'static CountryCostData],
    generated_at: DateTime<Utc>,
) -> AnalysisReport {
    let universities = recommendations
        .iter()
        .enumerate()
        .map(|(i, rec)| UniversityRow {
            rank: i + 1,
            name: rec.university.name,
            country: rec.university.country,
            world_ranking: rec.university.ranking,
            admission_probability: rec.admission_probability,
            admission_tier: rec.admission_tier(),
            match_score: rec.match_score,
            roi_score: rec.roi_score,
            tuition_per_year: rec.university.tuition_per_year,
            estimated_total_cost: rec.estimated_total_cost,
            estimated_roi: rec.estimated_roi,
        })
        .collect();

    let eligible_scholarships = scholarships
        .iter()
        .filter(|s| s.eligibility == Eligibility::Eligible)
        .map(|s| ScholarshipRow {
            name: s.scholarship.name,
            country: s.scholarship.country,
            scholarship_type: s.scholarship.scholarship_type,
            amount_label: s.scholarship.amount_label,
            deadline: s.scholarship.deadline,
        })
        .collect();

    let living_costs = living_costs
        .iter()
        .map(|c| LivingCostRow {
            country: c.country,
            visa_fee: c.visa_fee,
            monthly_living: c.total_monthly_living,
            two_year_living: c.two_year_living(),
            work_permit_hours: c.work_permit_hours,
            post_study_work_visa: c.post_study_work_visa,
        })
        .collect();

    AnalysisReport {
        report_id: Uuid::new_v4(),
        generated_at,
        generated_on: generated_at.format("%B %-d, %Y").to_string(),
        profile: profile.clone(),
        universities,
        eligible_scholarships,
        living_costs,
    }
}

/// Plain-text rendering of a report, suitable for download or email.
pub fn render_text(report: &AnalysisReport) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let profile = &report.profile;

    writeln!(out, "UniMatch Report - {}", report.generated_on)?;
    writeln!(out, "Report ID: {}", report.report_id)?;
    writeln!(out)?;
    writeln!(out, "PROFILE")?;
    writeln!(
        out,
        "  CGPA {:.2} | IELTS {:.1} | Budget ${} | Country {}",
        profile.cgpa,
        profile.ielts,
        group_thousands(profile.budget.round() as u64),
        profile.country_preference().unwrap_or("Any")
    )?;
    writeln!(out, "  Goals: {}", profile.career_goals.trim())?;

    writeln!(out)?;
    writeln!(out, "RECOMMENDED UNIVERSITIES")?;
    if report.universities.is_empty() {
        writeln!(out, "  No universities matched this profile.")?;
    }
    for row in &report.universities {
        writeln!(
            out,
            "  {}. {} ({}, #{}) - admission {}%, match {}%, ROI score {}%, total ${}, 5-year ROI {}%",
            row.rank,
            row.name,
            row.country,
            row.world_ranking,
            row.admission_probability,
            row.match_score,
            row.roi_score,
            group_thousands(row.estimated_total_cost),
            row.estimated_roi
        )?;
    }

    writeln!(out)?;
    writeln!(out, "ELIGIBLE SCHOLARSHIPS")?;
    if report.eligible_scholarships.is_empty() {
        writeln!(out, "  None yet.")?;
    }
    for row in &report.eligible_scholarships {
        writeln!(
            out,
            "  - {} ({}): {}, deadline {}",
            row.name, row.country, row.amount_label, row.deadline
        )?;
    }

    writeln!(out)?;
    writeln!(out, "COST OF LIVING")?;
    for row in &report.living_costs {
        writeln!(
            out,
            "  {}: ${}/mo, ${} over 2 years, visa ${}, work {} hrs/week, {}",
            row.country,
            group_thousands(row.monthly_living as u64),
            group_thousands(row.two_year_living as u64),
            row.visa_fee,
            row.work_permit_hours,
            row.post_study_work_visa
        )?;
    }

    Ok(out)
}

/// 145972 → "145,972"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::recommendation::admission::HeuristicAdmissionModel;
    use crate::recommendation::pipeline::run_analysis;

    fn profile() -> StudentProfile {
        StudentProfile {
            cgpa: 3.4,
            ielts: 6.5,
            budget: 120_000.0,
            country: "UK".to_string(),
            career_goals: "medical research".to_string(),
        }
    }

    fn report() -> AnalysisReport {
        let profile = profile();
        let analysis = run_analysis(&profile, &HeuristicAdmissionModel);
        let at = Utc.with_ymd_and_hms(2026, 10, 6, 12, 0, 0).unwrap();
        build_report(
            &profile,
            &analysis.recommendations,
            &analysis.scholarships,
            &analysis.living_costs,
            at,
        )
    }

    #[test]
    fn test_report_keeps_only_eligible_scholarships() {
        let report = report();
        let names: Vec<&str> = report.eligible_scholarships.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Chevening Scholarship", "Commonwealth Scholarship"]);
    }

    #[test]
    fn test_report_rows_are_ranked_in_order() {
        let report = report();
        assert_eq!(report.universities.len(), 2);
        assert_eq!(report.universities[0].rank, 1);
        assert_eq!(report.universities[1].rank, 2);
    }

    #[test]
    fn test_report_living_costs_span_two_years() {
        let report = report();
        assert_eq!(report.living_costs.len(), 1);
        assert_eq!(report.living_costs[0].country, "UK");
        assert_eq!(report.living_costs[0].two_year_living, 1_640 * 24);
    }

    #[test]
    fn test_report_date_is_human_readable() {
        assert_eq!(report().generated_on, "October 6, 2026");
    }

    #[test]
    fn test_report_ids_are_unique() {
        assert_ne!(report().report_id, report().report_id);
    }

    #[test]
    fn test_render_text_sections() {
        let text = render_text(&report()).unwrap();
        assert!(text.starts_with("UniMatch Report - October 6, 2026"));
        assert!(text.contains("Budget $120,000"));
        assert!(text.contains("1. "));
        assert!(text.contains("Chevening Scholarship"));
        assert!(text.contains("UK: $1,640/mo, $39,360 over 2 years"));
    }

    #[test]
    fn test_render_text_empty_report() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap();
        let report = build_report(&profile(), &[], &[], &[], at);
        let text = render_text(&report).unwrap();
        assert!(text.contains("No universities matched this profile."));
        assert!(text.contains("None yet."));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(145_972), "145,972");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
