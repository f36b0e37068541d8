mod clinic_locations;
pub mod configuration;
pub mod migrations;
pub mod repository;
