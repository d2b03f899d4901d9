//! Career Keyword Extractor — maps free-text career goals onto program-area tags.

/// Trigger substrings and the program tags they contribute.
const KEYWORD_GROUPS: &[(&[&str], &[&str])] = &[
    (&["engineer", "software", "develop"], &["engineering", "technology"]),
    (&["business", "manag", "mba"], &["business"]),
    (
        &["data", "analyt", "machine learning"],
        &["data science", "ai", "science"],
    ),
    (&["ai", "artificial"], &["ai", "technology", "computing"]),
    (&["doctor", "medic", "health"], &["medicine", "health"]),
    (&["research", "phd"], &["research", "science"]),
    (&["law", "legal"], &["law"]),
    (&["entrepr", "startup"], &["entrepreneurship", "business"]),
    (&["financ", "bank", "invest"], &["business", "finance"]),
    (&["design", "architect"], &["architecture", "arts"]),
];

/// Tags used when nothing in the text triggers a group.
pub const DEFAULT_KEYWORDS: &[&str] = &["science", "engineering"];

/// Extracts deduplicated program tags from career goals.
///
/// Matching is plain case-insensitive substring search, so groups are additive
/// and a short trigger like "ai" also fires inside longer words. Never returns
/// an empty list.
pub fn career_keywords(career_goals: &str) -> Vec<&'static str> {
    let text = career_goals.to_lowercase();
    let mut keywords: Vec<&'static str> = Vec::new();

    for (triggers, tags) in KEYWORD_GROUPS {
        if triggers.iter().any(|t| text.contains(t)) {
            for tag in tags.iter() {
                if !keywords.contains(tag) {
                    keywords.push(*tag);
                }
            }
        }
    }

    if keywords.is_empty() {
        keywords.extend_from_slice(DEFAULT_KEYWORDS);
    }
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_software_engineer_in_ai() {
        let kws = career_keywords("I want to be a software engineer in AI");
        assert_eq!(kws, vec!["engineering", "technology", "ai", "computing"]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(career_keywords("LAW"), vec!["law"]);
    }

    #[test]
    fn test_groups_are_additive_and_deduplicated() {
        let kws = career_keywords("data research");
        assert_eq!(kws, vec!["data science", "ai", "science", "research"]);
    }

    #[test]
    fn test_no_match_falls_back_to_defaults() {
        assert_eq!(career_keywords("poetry"), vec!["science", "engineering"]);
    }

    #[test]
    fn test_empty_text_falls_back_to_defaults() {
        assert_eq!(career_keywords(""), DEFAULT_KEYWORDS.to_vec());
    }

    #[test]
    fn test_ai_trigger_fires_inside_words() {
        // "maintain" contains "ai"
        let kws = career_keywords("maintain");
        assert!(kws.contains(&"ai"));
    }

    #[test]
    fn test_finance_and_business_share_tag() {
        let kws = career_keywords("investment banking business");
        assert_eq!(kws, vec!["business", "finance"]);
    }

    #[test]
    fn test_never_empty() {
        for text in ["", " ", "???", "design", "medical doctor", "startup founder"] {
            assert!(!career_keywords(text).is_empty(), "empty for {text:?}");
        }
    }
}
