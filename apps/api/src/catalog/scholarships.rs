use crate::models::scholarship::{Scholarship, ScholarshipType};

pub static SCHOLARSHIPS: &[Scholarship] = &[
    Scholarship {
        name: "Fulbright Foreign Student Program",
        provider: "U.S. Department of State",
        country: "USA",
        amount: 50_000,
        amount_label: "Up to $50,000/year",
        scholarship_type: ScholarshipType::Merit,
        min_cgpa: 3.5,
        min_ielts: 7.0,
        deadline: "October 15",
        description: "Covers tuition, living, and travel for outstanding international graduate students studying in the USA.",
    },
    Scholarship {
        name: "Chevening Scholarship",
        provider: "UK Government",
        country: "UK",
        amount: 45_000,
        amount_label: "Full tuition + stipend",
        scholarship_type: ScholarshipType::Merit,
        min_cgpa: 3.3,
        min_ielts: 6.5,
        deadline: "November 1",
        description: "Fully funded scholarship for future leaders to pursue a one-year master's in the UK.",
    },
    Scholarship {
        name: "DAAD Scholarship",
        provider: "German Academic Exchange Service",
        country: "Germany",
        amount: 15_000,
        amount_label: "~$1,200/month stipend",
        scholarship_type: ScholarshipType::Merit,
        min_cgpa: 3.0,
        min_ielts: 6.0,
        deadline: "November 15",
        description: "Monthly stipend plus insurance for international students pursuing degrees in Germany.",
    },
    Scholarship {
        name: "Commonwealth Scholarship",
        provider: "Commonwealth Secretariat",
        country: "UK",
        amount: 40_000,
        amount_label: "Full tuition + stipend",
        scholarship_type: ScholarshipType::NeedBased,
        min_cgpa: 3.0,
        min_ielts: 6.5,
        deadline: "December 20",
        description: "For students from Commonwealth countries to study in the UK, covering all expenses.",
    },
    Scholarship {
        name: "Australia Awards",
        provider: "Australian Government",
        country: "Australia",
        amount: 35_000,
        amount_label: "Full tuition + living",
        scholarship_type: ScholarshipType::CountrySpecific,
        min_cgpa: 2.8,
        min_ielts: 6.5,
        deadline: "April 30",
        description: "Covers tuition, return airfare, establishment allowance, and living expenses.",
    },
    Scholarship {
        name: "Vanier Canada Graduate Scholarship",
        provider: "Government of Canada",
        country: "Canada",
        amount: 50_000,
        amount_label: "$50,000/year for 3 years",
        scholarship_type: ScholarshipType::Research,
        min_cgpa: 3.5,
        min_ielts: 7.0,
        deadline: "November 1",
        description: "For doctoral students demonstrating leadership and high research potential.",
    },
    Scholarship {
        name: "Singapore International Graduate Award",
        provider: "A*STAR Singapore",
        country: "Singapore",
        amount: 30_000,
        amount_label: "Full tuition + stipend",
        scholarship_type: ScholarshipType::Research,
        min_cgpa: 3.2,
        min_ielts: 6.5,
        deadline: "January 1",
        description: "Covers tuition and monthly stipend for PhD students in science and engineering at NUS or NTU.",
    },
    Scholarship {
        name: "Holland Scholarship",
        provider: "Dutch Ministry of Education",
        country: "Netherlands",
        amount: 5_000,
        amount_label: "One-time grant of EUR 5,000",
        scholarship_type: ScholarshipType::Merit,
        min_cgpa: 3.0,
        min_ielts: 6.5,
        deadline: "February 1",
        description: "A one-time grant for non-EU/EEA students starting their first year at a Dutch university.",
    },
    Scholarship {
        name: "Gates Cambridge Scholarship",
        provider: "Bill & Melinda Gates Foundation",
        country: "UK",
        amount: 55_000,
        amount_label: "Full cost of study",
        scholarship_type: ScholarshipType::Merit,
        min_cgpa: 3.7,
        min_ielts: 7.5,
        deadline: "December 3",
        description: "Highly competitive scholarship for outstanding applicants to pursue postgraduate study at Cambridge.",
    },
    Scholarship {
        name: "Lester B. Pearson International Scholarship",
        provider: "University of Toronto",
        country: "Canada",
        amount: 45_000,
        amount_label: "Full tuition + living for 4 years",
        scholarship_type: ScholarshipType::Merit,
        min_cgpa: 3.6,
        min_ielts: 7.0,
        deadline: "November 30",
        description: "Covers tuition, books, incidentals, and residence for exceptional international undergrads.",
    },
    Scholarship {
        name: "Melbourne Graduate Research Scholarship",
        provider: "University of Melbourne",
        country: "Australia",
        amount: 32_000,
        amount_label: "Tuition waiver + $32K stipend",
        scholarship_type: ScholarshipType::Research,
        min_cgpa: 3.3,
        min_ielts: 6.5,
        deadline: "October 31",
        description: "Covers tuition and provides a living allowance for international research students.",
    },
    Scholarship {
        name: "Deutschlandstipendium",
        provider: "German Federal Government",
        country: "Germany",
        amount: 3_600,
        amount_label: "EUR 300/month",
        scholarship_type: ScholarshipType::Merit,
        min_cgpa: 2.8,
        min_ielts: 6.0,
        deadline: "Rolling",
        description: "A monthly stipend for high-achieving students at participating German universities.",
    },
];
