pub mod base_types;
pub mod config;
pub mod generator;
pub mod json_serialisation;
pub mod orders;
pub mod travel_times;
