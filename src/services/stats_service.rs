use std::collections::HashSet;

use crate::models::job_posting::JobPosting;
use crate::models::job_status::JobStatus;
use crate::models::stats::AggregateStats;

pub fn aggregate(records: &[JobPosting]) -> AggregateStats {
    let mut stats = AggregateStats::default();
    let mut companies: HashSet<&str> = HashSet::new();

    for job in records {
        stats.total_jobs += 1;
        match job.status() {
            JobStatus::Active => stats.active_jobs += 1,
            JobStatus::Pending => stats.pending_jobs += 1,
            JobStatus::Rejected => stats.rejected_jobs += 1,
        }
        companies.insert(job.company.as_str());
        stats.total_applications += job.application_count();
        stats.total_views += job.view_count();
    }

    stats.company_count = companies.len();
    stats
}
