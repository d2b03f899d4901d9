use serde::Serialize;

/// A catalog university. Lives in static memory for the lifetime of the process;
/// `name` is the identity key used by every lookup.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct University {
    pub name: &'static str,
    pub country: &'static str,
    pub ranking: u32,
    pub tuition_per_year: u32,
    /// Percent of applicants admitted.
    pub acceptance_rate: f64,
    /// Cohort baseline on the 4.0 scale.
    pub avg_cgpa: f64,
    pub avg_ielts: f64,
    /// Lowercase program-area tags, matched against career keywords.
    pub programs: &'static [&'static str],
    pub employment_rate: f64,
    pub avg_salary_after_grad: u32,
    pub logo_initials: &'static str,
    pub description: &'static str,
    pub application_deadline: &'static str,
    pub min_cgpa: f64,
    pub min_ielts: f64,
    pub documents_required: &'static [&'static str],
    pub campus_highlights: &'static [&'static str],
}

impl University {
    pub fn offers(&self, program: &str) -> bool {
        self.programs.iter().any(|p| *p == program)
    }
}
