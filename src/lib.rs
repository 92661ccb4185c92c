pub mod analytics;
pub mod career_report;
pub mod controller;
pub mod domain;
pub mod nav;
pub mod reddit_client;
pub mod sheets_client;
pub mod telemetry;
