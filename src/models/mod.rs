pub mod job_posting;
pub mod job_status;
pub mod notification;
pub mod stats;
