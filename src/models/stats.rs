use serde::{Deserialize, Serialize};

/// Dashboard summary derived from the current job collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_jobs: usize,
    pub active_jobs: usize,
    pub pending_jobs: usize,
    pub rejected_jobs: usize,
    pub company_count: usize,
    pub total_applications: u64,
    pub total_views: u64,
}
