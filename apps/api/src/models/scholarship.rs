use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ScholarshipType {
    Merit,
    #[serde(rename = "Need-based")]
    NeedBased,
    #[serde(rename = "Country-specific")]
    CountrySpecific,
    Research,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Scholarship {
    pub name: &'static str,
    pub provider: &'static str,
    pub country: &'static str,
    pub amount: u32,
    /// Display text, authored separately from `amount`.
    pub amount_label: &'static str,
    #[serde(rename = "type")]
    pub scholarship_type: ScholarshipType,
    pub min_cgpa: f64,
    pub min_ielts: f64,
    pub deadline: &'static str,
    pub description: &'static str,
}

/// How well a student clears a scholarship's minimums.
/// Variant order is the display order: eligible first.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Eligibility {
    Eligible,
    Partial,
    Ineligible,
}

impl Eligibility {
    pub fn classify(cgpa_ok: bool, ielts_ok: bool) -> Self {
        match (cgpa_ok, ielts_ok) {
            (true, true) => Eligibility::Eligible,
            (true, false) | (false, true) => Eligibility::Partial,
            (false, false) => Eligibility::Ineligible,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScholarshipResult {
    #[serde(flatten)]
    pub scholarship: &'static Scholarship,
    pub eligibility: Eligibility,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_covers_all_tiers() {
        assert_eq!(Eligibility::classify(true, true), Eligibility::Eligible);
        assert_eq!(Eligibility::classify(true, false), Eligibility::Partial);
        assert_eq!(Eligibility::classify(false, true), Eligibility::Partial);
        assert_eq!(Eligibility::classify(false, false), Eligibility::Ineligible);
    }

    #[test]
    fn test_tier_ordering_puts_eligible_first() {
        assert!(Eligibility::Eligible < Eligibility::Partial);
        assert!(Eligibility::Partial < Eligibility::Ineligible);
    }

    #[test]
    fn test_type_serializes_with_display_names() {
        let json = serde_json::to_string(&ScholarshipType::NeedBased).unwrap();
        assert_eq!(json, r#""Need-based""#);
        let json = serde_json::to_string(&ScholarshipType::CountrySpecific).unwrap();
        assert_eq!(json, r#""Country-specific""#);
    }

    #[test]
    fn test_eligibility_serializes_lowercase() {
        let json = serde_json::to_string(&Eligibility::Ineligible).unwrap();
        assert_eq!(json, r#""ineligible""#);
    }
}
