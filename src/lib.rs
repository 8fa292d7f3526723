//! langpay: average salary per programming language from HeadHunter and SuperJob

pub mod cli;
pub mod config;
pub mod providers;
pub mod services;
pub mod telemetry;
pub mod types;
