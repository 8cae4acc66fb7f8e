pub mod board_service;
pub mod filter_service;
pub mod job_store;
pub mod notification_service;
pub mod stats_service;
pub mod status_workflow;
