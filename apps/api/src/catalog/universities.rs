use crate::models::university::University;

pub static UNIVERSITIES: &[University] = &[
    University {
        name: "Massachusetts Institute of Technology",
        country: "USA",
        ranking: 1,
        tuition_per_year: 57_986,
        acceptance_rate: 4.0,
        avg_cgpa: 3.9,
        avg_ielts: 7.5,
        programs: &["engineering", "technology", "science", "research", "ai", "data science"],
        employment_rate: 97.0,
        avg_salary_after_grad: 115_000,
        logo_initials: "MIT",
        description: "A world-leading research university known for pioneering breakthroughs in engineering, computing, and the sciences.",
        application_deadline: "December 15",
        min_cgpa: 3.7,
        min_ielts: 7.0,
        documents_required: &["Transcripts", "Statement of Purpose", "3 Recommendation Letters", "GRE Scores", "Resume/CV"],
        campus_highlights: &["MIT Media Lab", "Infinite Corridor", "$25B+ Endowment", "Startup culture"],
    },
    University {
        name: "Stanford University",
        country: "USA",
        ranking: 3,
        tuition_per_year: 56_169,
        acceptance_rate: 4.0,
        avg_cgpa: 3.9,
        avg_ielts: 7.5,
        programs: &["engineering", "business", "technology", "ai", "entrepreneurship"],
        employment_rate: 96.0,
        avg_salary_after_grad: 120_000,
        logo_initials: "SU",
        description: "Located in Silicon Valley, Stanford is a global hub for innovation, entrepreneurship, and cutting-edge research.",
        application_deadline: "December 1",
        min_cgpa: 3.7,
        min_ielts: 7.0,
        documents_required: &["Transcripts", "Statement of Purpose", "3 Recommendation Letters", "GRE Scores", "Resume/CV"],
        campus_highlights: &["Silicon Valley location", "Stanford Research Park", "D.school", "$37B+ Endowment"],
    },
    University {
        name: "University of Toronto",
        country: "Canada",
        ranking: 18,
        tuition_per_year: 42_000,
        acceptance_rate: 43.0,
        avg_cgpa: 3.6,
        avg_ielts: 6.5,
        programs: &["engineering", "science", "business", "health", "ai", "data science"],
        employment_rate: 92.0,
        avg_salary_after_grad: 75_000,
        logo_initials: "UT",
        description: "Canada's top-ranked university with world-class research output and a vibrant multicultural campus in downtown Toronto.",
        application_deadline: "January 15",
        min_cgpa: 3.0,
        min_ielts: 6.5,
        documents_required: &["Transcripts", "Statement of Purpose", "2 Recommendation Letters", "Resume/CV", "English Proficiency"],
        campus_highlights: &["Vector Institute for AI", "Downtown Toronto", "Co-op programs", "700+ student clubs"],
    },
    University {
        name: "University of British Columbia",
        country: "Canada",
        ranking: 34,
        tuition_per_year: 38_000,
        acceptance_rate: 52.0,
        avg_cgpa: 3.4,
        avg_ielts: 6.5,
        programs: &["science", "engineering", "forestry", "business", "health"],
        employment_rate: 90.0,
        avg_salary_after_grad: 70_000,
        logo_initials: "UBC",
        description: "Set against the mountains and ocean of Vancouver, UBC is a research powerhouse with strong co-op and sustainability programs.",
        application_deadline: "January 31",
        min_cgpa: 2.8,
        min_ielts: 6.5,
        documents_required: &["Transcripts", "Statement of Purpose", "2 Recommendation Letters", "Resume/CV", "English Proficiency"],
        campus_highlights: &["Vancouver campus", "Sustainability focus", "Co-op programs", "TRIUMF particle physics lab"],
    },
    University {
        name: "University of Oxford",
        country: "UK",
        ranking: 4,
        tuition_per_year: 39_000,
        acceptance_rate: 17.0,
        avg_cgpa: 3.8,
        avg_ielts: 7.0,
        programs: &["humanities", "science", "business", "law", "medicine", "research"],
        employment_rate: 95.0,
        avg_salary_after_grad: 85_000,
        logo_initials: "OX",
        description: "The oldest university in the English-speaking world, Oxford offers unparalleled academic tradition and tutorial-based learning.",
        application_deadline: "January 20",
        min_cgpa: 3.5,
        min_ielts: 7.0,
        documents_required: &["Transcripts", "Personal Statement", "3 Academic References", "Writing Sample", "CV"],
        campus_highlights: &["Bodleian Library", "College system", "900+ years of history", "Oxford Union"],
    },
    University {
        name: "Imperial College London",
        country: "UK",
        ranking: 6,
        tuition_per_year: 36_000,
        acceptance_rate: 14.0,
        avg_cgpa: 3.7,
        avg_ielts: 7.0,
        programs: &["engineering", "science", "medicine", "business", "technology"],
        employment_rate: 94.0,
        avg_salary_after_grad: 82_000,
        logo_initials: "ICL",
        description: "A STEM-focused institution in the heart of London, consistently ranked among the top engineering and science schools globally.",
        application_deadline: "January 15",
        min_cgpa: 3.3,
        min_ielts: 6.5,
        documents_required: &["Transcripts", "Personal Statement", "2 Academic References", "CV", "English Proficiency"],
        campus_highlights: &["South Kensington campus", "Imperial Incubator", "London location", "Industry partnerships"],
    },
    University {
        name: "University of Melbourne",
        country: "Australia",
        ranking: 14,
        tuition_per_year: 35_000,
        acceptance_rate: 70.0,
        avg_cgpa: 3.3,
        avg_ielts: 6.5,
        programs: &["science", "engineering", "business", "arts", "health"],
        employment_rate: 88.0,
        avg_salary_after_grad: 65_000,
        logo_initials: "UM",
        description: "Australia's leading university, known for its Melbourne Model curriculum and world-class research in biomedicine and engineering.",
        application_deadline: "October 31",
        min_cgpa: 3.0,
        min_ielts: 6.5,
        documents_required: &["Transcripts", "Personal Statement", "Resume/CV", "English Proficiency", "Academic References"],
        campus_highlights: &["Melbourne Model", "Parkville campus", "Strong research output", "Vibrant student life"],
    },
    University {
        name: "University of Sydney",
        country: "Australia",
        ranking: 19,
        tuition_per_year: 33_000,
        acceptance_rate: 68.0,
        avg_cgpa: 3.2,
        avg_ielts: 6.5,
        programs: &["arts", "business", "engineering", "health", "law", "science"],
        employment_rate: 87.0,
        avg_salary_after_grad: 62_000,
        logo_initials: "USyd",
        description: "Australia's first university, offering a broad curriculum in a stunning historic campus with a strong global alumni network.",
        application_deadline: "January 15",
        min_cgpa: 2.8,
        min_ielts: 6.5,
        documents_required: &["Transcripts", "Personal Statement", "Resume/CV", "English Proficiency"],
        campus_highlights: &["Historic Quadrangle", "Industry placements", "Camperdown/Darlington campus", "400+ student societies"],
    },
    University {
        name: "Technical University of Munich",
        country: "Germany",
        ranking: 30,
        tuition_per_year: 3_000,
        acceptance_rate: 8.0,
        avg_cgpa: 3.5,
        avg_ielts: 6.5,
        programs: &["engineering", "technology", "science", "ai", "automotive"],
        employment_rate: 93.0,
        avg_salary_after_grad: 68_000,
        logo_initials: "TUM",
        description: "Germany's top technical university, offering nearly tuition-free education with deep ties to the automotive and engineering industries.",
        application_deadline: "May 31",
        min_cgpa: 3.0,
        min_ielts: 6.5,
        documents_required: &["Transcripts", "Motivation Letter", "Resume/CV", "VPD Certificate", "Language Certificate"],
        campus_highlights: &["Near-zero tuition", "BMW/Siemens partnerships", "Munich location", "TUM Venture Labs"],
    },
    University {
        name: "ETH Zurich",
        // Grouped with Germany so it shares the German scholarship and cost data.
        country: "Germany",
        ranking: 7,
        tuition_per_year: 1_500,
        acceptance_rate: 27.0,
        avg_cgpa: 3.7,
        avg_ielts: 7.0,
        programs: &["engineering", "science", "technology", "architecture", "research"],
        employment_rate: 95.0,
        avg_salary_after_grad: 90_000,
        logo_initials: "ETH",
        description: "One of the world's top science and technology universities, with 22 Nobel laureates and minimal tuition fees.",
        application_deadline: "December 15",
        min_cgpa: 3.3,
        min_ielts: 7.0,
        documents_required: &["Transcripts", "Motivation Letter", "Resume/CV", "GRE Scores (recommended)", "Language Certificate"],
        campus_highlights: &["22 Nobel laureates", "Zurich location", "Ultra-low tuition", "Einstein's alma mater"],
    },
    University {
        name: "National University of Singapore",
        country: "Singapore",
        ranking: 8,
        tuition_per_year: 29_000,
        acceptance_rate: 18.0,
        avg_cgpa: 3.6,
        avg_ielts: 6.5,
        programs: &["business", "engineering", "science", "computing", "law"],
        employment_rate: 94.0,
        avg_salary_after_grad: 72_000,
        logo_initials: "NUS",
        description: "Asia's leading global university, known for computing, business, and law with strong industry partnerships across Southeast Asia.",
        application_deadline: "January 31",
        min_cgpa: 3.2,
        min_ielts: 6.5,
        documents_required: &["Transcripts", "Statement of Purpose", "2 Recommendation Letters", "Resume/CV", "TOEFL/IELTS"],
        campus_highlights: &["Asia's #1 university", "Kent Ridge campus", "NUS Enterprise", "Block71 startup hub"],
    },
    University {
        name: "University of Amsterdam",
        country: "Netherlands",
        ranking: 53,
        tuition_per_year: 15_000,
        acceptance_rate: 60.0,
        avg_cgpa: 3.2,
        avg_ielts: 6.5,
        programs: &["social sciences", "humanities", "science", "business", "ai"],
        employment_rate: 85.0,
        avg_salary_after_grad: 55_000,
        logo_initials: "UvA",
        description: "A leading European research university in the heart of Amsterdam, known for social sciences, AI research, and an international student body.",
        application_deadline: "April 1",
        min_cgpa: 2.8,
        min_ielts: 6.5,
        documents_required: &["Transcripts", "Motivation Letter", "Resume/CV", "English Proficiency", "Diploma Supplement"],
        campus_highlights: &["Amsterdam city center", "ELLIS AI institute", "Highly international", "Affordable tuition"],
    },
];
