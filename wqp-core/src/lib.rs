pub mod pollutant;
pub mod station;
pub mod verdict;
