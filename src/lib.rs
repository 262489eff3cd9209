// Library for tests to access modules

pub mod aggregation;
pub mod classifier;
pub mod config;
pub mod details;
pub mod error;
pub mod lookup_repo;
pub mod models;
pub mod progress;
pub mod report;
pub mod routes;
pub mod session;
pub mod telemetry;
pub mod timezone;
pub mod validator;
pub mod version;
