//! Derived views over a ranked list: headline stats, ROI ordering and a
//! side-by-side comparison of a few shortlisted universities.

use serde::Serialize;

use crate::recommendation::ranker::Recommendation;
use crate::recommendation::round_half_up;

/// How many universities can be compared at once.
pub const MAX_COMPARE: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationStats {
    pub best_match: String,
    pub best_match_score: u32,
    pub average_admission_probability: u32,
    pub best_roi: String,
    pub best_roi_percent: i64,
    pub lowest_cost: String,
    pub lowest_cost_total: u64,
    pub university_count: usize,
}

/// Headline numbers for a ranked list. `None` when there is nothing to summarise.
pub fn summarize(recommendations: &[Recommendation]) -> Option<RecommendationStats> {
    let best_match = recommendations.first()?;

    let total_admission: u32 = recommendations
        .iter()
        .map(|r| r.admission_probability)
        .sum();
    let average = round_half_up(total_admission as f64 / recommendations.len() as f64) as u32;

    // first maximum / first minimum, matching a stable sort
    let best_roi = recommendations
        .iter()
        .fold(best_match, |best, r| if r.estimated_roi > best.estimated_roi { r } else { best });
    let lowest_cost = recommendations.iter().fold(best_match, |low, r| {
        if r.estimated_total_cost < low.estimated_total_cost {
            r
        } else {
            low
        }
    });

    Some(RecommendationStats {
        best_match: best_match.university.name.to_string(),
        best_match_score: best_match.match_score,
        average_admission_probability: average,
        best_roi: best_roi.university.name.to_string(),
        best_roi_percent: best_roi.estimated_roi,
        lowest_cost: lowest_cost.university.name.to_string(),
        lowest_cost_total: lowest_cost.estimated_total_cost,
        university_count: recommendations.len(),
    })
}

/// Recommendations ordered by ROI score, highest first; ties keep match order.
pub fn rank_by_roi(recommendations: &[Recommendation]) -> Vec<Recommendation> {
    let mut sorted = recommendations.to_vec();
    sorted.sort_by(|a, b| b.roi_score.cmp(&a.roi_score));
    sorted
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetricFormat {
    Rank,
    Percent,
    Currency,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub values: Vec<f64>,
    pub format: MetricFormat,
    pub higher_is_better: bool,
    /// Column holding the best value; the first one wins on ties.
    pub best_index: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub universities: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

struct Metric {
    label: &'static str,
    format: MetricFormat,
    higher_is_better: bool,
    value: fn(&Recommendation) -> f64,
}

const METRICS: &[Metric] = &[
    Metric {
        label: "World Ranking",
        format: MetricFormat::Rank,
        higher_is_better: false,
        value: |r| r.university.ranking as f64,
    },
    Metric {
        label: "Admission Probability",
        format: MetricFormat::Percent,
        higher_is_better: true,
        value: |r| r.admission_probability as f64,
    },
    Metric {
        label: "Match Score",
        format: MetricFormat::Percent,
        higher_is_better: true,
        value: |r| r.match_score as f64,
    },
    Metric {
        label: "ROI Score",
        format: MetricFormat::Percent,
        higher_is_better: true,
        value: |r| r.roi_score as f64,
    },
    Metric {
        label: "Tuition / Year",
        format: MetricFormat::Currency,
        higher_is_better: false,
        value: |r| r.university.tuition_per_year as f64,
    },
    Metric {
        label: "Est. Total Cost",
        format: MetricFormat::Currency,
        higher_is_better: false,
        value: |r| r.estimated_total_cost as f64,
    },
    Metric {
        label: "5-Year ROI",
        format: MetricFormat::Percent,
        higher_is_better: true,
        value: |r| r.estimated_roi as f64,
    },
    Metric {
        label: "Employment Rate",
        format: MetricFormat::Percent,
        higher_is_better: true,
        value: |r| r.university.employment_rate,
    },
    Metric {
        label: "Avg. Salary",
        format: MetricFormat::Currency,
        higher_is_better: true,
        value: |r| r.university.avg_salary_after_grad as f64,
    },
    Metric {
        label: "Acceptance Rate",
        format: MetricFormat::Percent,
        higher_is_better: true,
        value: |r| r.university.acceptance_rate,
    },
];

/// Builds the comparison table. Callers cap the list at [`MAX_COMPARE`].
pub fn compare(recommendations: &[Recommendation]) -> Comparison {
    let rows = METRICS
        .iter()
        .map(|metric| {
            let values: Vec<f64> = recommendations.iter().map(metric.value).collect();
            ComparisonRow {
                label: metric.label,
                best_index: best_index(&values, metric.higher_is_better),
                values,
                format: metric.format,
                higher_is_better: metric.higher_is_better,
            }
        })
        .collect();

    Comparison {
        universities: recommendations
            .iter()
            .map(|r| r.university.name.to_string())
            .collect(),
        rows,
    }
}

fn best_index(values: &[f64], higher_is_better: bool) -> usize {
    let mut best = 0;
    for (i, value) in values.iter().enumerate().skip(1) {
        let better = if higher_is_better {
            *value > values[best]
        } else {
            *value < values[best]
        };
        if better {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_university;
    use crate::models::profile::StudentProfile;
    use crate::recommendation::admission::HeuristicAdmissionModel;
    use crate::recommendation::ranker::{analyze_profile, score_university};

    fn profile(country: &str) -> StudentProfile {
        StudentProfile {
            cgpa: 3.5,
            ielts: 7.0,
            budget: 100_000.0,
            country: country.to_string(),
            career_goals: "business".to_string(),
        }
    }

    fn rec(name: &str) -> Recommendation {
        let uni = find_university(name).unwrap();
        score_university(&profile("any"), uni, &["business"], &HeuristicAdmissionModel)
    }

    #[test]
    fn test_summarize_empty_is_none() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_summarize_picks_extremes() {
        let recs = analyze_profile(&profile("any"));
        let stats = summarize(&recs).unwrap();
        assert_eq!(stats.best_match, recs[0].university.name);
        assert_eq!(stats.university_count, recs.len());

        let max_roi = recs.iter().map(|r| r.estimated_roi).max().unwrap();
        assert_eq!(stats.best_roi_percent, max_roi);
        let min_cost = recs.iter().map(|r| r.estimated_total_cost).min().unwrap();
        assert_eq!(stats.lowest_cost_total, min_cost);
    }

    #[test]
    fn test_summarize_average_admission() {
        let recs = vec![rec("Massachusetts Institute of Technology"), rec("University of Melbourne")];
        let stats = summarize(&recs).unwrap();
        let expected = (recs[0].admission_probability + recs[1].admission_probability) as f64 / 2.0;
        assert_eq!(stats.average_admission_probability, (expected + 0.5).floor() as u32);
    }

    #[test]
    fn test_rank_by_roi_descending() {
        let recs = analyze_profile(&profile("any"));
        let ranked = rank_by_roi(&recs);
        assert_eq!(ranked.len(), recs.len());
        for pair in ranked.windows(2) {
            assert!(pair[0].roi_score >= pair[1].roi_score);
        }
    }

    #[test]
    fn test_compare_best_ranking_is_lowest_number() {
        let recs = vec![
            rec("University of Toronto"),
            rec("Massachusetts Institute of Technology"),
            rec("University of Amsterdam"),
        ];
        let comparison = compare(&recs);
        let ranking = comparison
            .rows
            .iter()
            .find(|r| r.label == "World Ranking")
            .unwrap();
        assert_eq!(ranking.best_index, 1);
        assert_eq!(ranking.values, vec![18.0, 1.0, 53.0]);

        let acceptance = comparison
            .rows
            .iter()
            .find(|r| r.label == "Acceptance Rate")
            .unwrap();
        assert_eq!(acceptance.best_index, 2);
        assert_eq!(comparison.universities.len(), 3);
    }

    #[test]
    fn test_best_index_first_wins_on_ties() {
        assert_eq!(best_index(&[5.0, 5.0, 3.0], true), 0);
        assert_eq!(best_index(&[5.0, 3.0, 3.0], false), 1);
        assert_eq!(best_index(&[], true), 0);
    }

    #[test]
    fn test_compare_has_every_metric() {
        let comparison = compare(&[rec("ETH Zurich")]);
        assert_eq!(comparison.rows.len(), METRICS.len());
        assert!(comparison.rows.iter().all(|r| r.best_index == 0));
    }
}
