pub mod living_cost;
pub mod profile;
pub mod scholarship;
pub mod university;
