// Funding and living-cost planning for a ranked set of universities.

pub mod handlers;
pub mod living_costs;
pub mod scholarships;
