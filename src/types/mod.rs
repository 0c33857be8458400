pub mod config;
pub mod employee;
pub mod rating;
pub mod report;
