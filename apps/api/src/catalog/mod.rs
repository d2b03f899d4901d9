//! Static reference data: universities, scholarships and per-country living costs.
//!
//! Everything here is compiled into the binary and never mutated, so lookups hand
//! out `&'static` references that recommendations can hold on to freely.

mod living_costs;
mod scholarships;
mod universities;

use crate::models::living_cost::CountryCostData;
use crate::models::scholarship::Scholarship;
use crate::models::university::University;

pub fn universities() -> &'static [University] {
    universities::UNIVERSITIES
}

pub fn scholarships() -> &'static [Scholarship] {
    scholarships::SCHOLARSHIPS
}

pub fn country_costs() -> &'static [CountryCostData] {
    living_costs::COUNTRY_COSTS
}

/// Case-insensitive country comparison used by every country filter.
pub fn same_country(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

pub fn find_university(name: &str) -> Option<&'static University> {
    universities().iter().find(|u| u.name == name)
}

pub fn universities_in(country: &str) -> Vec<&'static University> {
    universities()
        .iter()
        .filter(|u| same_country(u.country, country))
        .collect()
}
