pub mod report_service;
pub mod service;
