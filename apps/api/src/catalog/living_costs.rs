use crate::models::living_cost::CountryCostData;

pub static COUNTRY_COSTS: &[CountryCostData] = &[
    CountryCostData {
        country: "USA",
        flag_code: "US",
        visa_fee: 510,
        health_insurance: 250,
        avg_rent: 1_400,
        avg_food: 500,
        avg_transport: 120,
        total_monthly_living: 2_270,
        visa_processing_weeks: "3-5",
        work_permit_hours: 20,
        post_study_work_visa: "OPT: 1-3 years",
        currency_note: "All amounts in USD",
    },
    CountryCostData {
        country: "Canada",
        flag_code: "CA",
        visa_fee: 235,
        health_insurance: 80,
        avg_rent: 1_100,
        avg_food: 400,
        avg_transport: 100,
        total_monthly_living: 1_680,
        visa_processing_weeks: "4-8",
        work_permit_hours: 20,
        post_study_work_visa: "PGWP: up to 3 years",
        currency_note: "Amounts in CAD (approx USD shown)",
    },
    CountryCostData {
        country: "UK",
        flag_code: "GB",
        visa_fee: 490,
        health_insurance: 0,
        avg_rent: 1_200,
        avg_food: 350,
        avg_transport: 90,
        total_monthly_living: 1_640,
        visa_processing_weeks: "3-8",
        work_permit_hours: 20,
        post_study_work_visa: "Graduate Route: 2 years",
        currency_note: "NHS surcharge included in visa; amounts in GBP equiv.",
    },
    CountryCostData {
        country: "Australia",
        flag_code: "AU",
        visa_fee: 450,
        health_insurance: 55,
        avg_rent: 1_050,
        avg_food: 400,
        avg_transport: 100,
        total_monthly_living: 1_605,
        visa_processing_weeks: "4-7",
        work_permit_hours: 48,
        post_study_work_visa: "Temp Grad Visa: 2-4 years",
        currency_note: "Amounts in AUD (approx USD shown)",
    },
    CountryCostData {
        country: "Germany",
        flag_code: "DE",
        visa_fee: 75,
        health_insurance: 120,
        avg_rent: 700,
        avg_food: 300,
        avg_transport: 50,
        total_monthly_living: 1_170,
        visa_processing_weeks: "4-12",
        work_permit_hours: 20,
        post_study_work_visa: "18-month job-seeker visa",
        currency_note: "Semester ticket often included; amounts in EUR equiv.",
    },
    CountryCostData {
        country: "Singapore",
        flag_code: "SG",
        visa_fee: 60,
        health_insurance: 50,
        avg_rent: 900,
        avg_food: 400,
        avg_transport: 80,
        total_monthly_living: 1_430,
        visa_processing_weeks: "2-4",
        work_permit_hours: 16,
        post_study_work_visa: "LTVP: 1 year",
        currency_note: "Amounts in SGD (approx USD shown)",
    },
    CountryCostData {
        country: "Netherlands",
        flag_code: "NL",
        visa_fee: 210,
        health_insurance: 130,
        avg_rent: 800,
        avg_food: 320,
        avg_transport: 50,
        total_monthly_living: 1_300,
        visa_processing_weeks: "4-8",
        work_permit_hours: 16,
        post_study_work_visa: "Orientation Year: 1 year",
        currency_note: "Amounts in EUR equiv.",
    },
];
