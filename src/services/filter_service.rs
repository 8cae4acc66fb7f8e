use crate::dto::job_dto::{FacetsResponse, JobListQuery};
use crate::models::job_posting::JobPosting;

/// Stable filter: matching postings in their original order.
pub fn filter_jobs<'a>(records: &'a [JobPosting], query: &JobListQuery) -> Vec<&'a JobPosting> {
    let term = query.search.to_lowercase();
    let items: Vec<&JobPosting> = records
        .iter()
        .filter(|job| {
            matches_search(job, &term, !query.title_and_company_only)
                && matches_exact(&query.location, &job.location)
                && matches_exact(&query.employment_type, &job.employment_type)
                && query.status.map_or(true, |status| job.status() == status)
        })
        .collect();

    tracing::debug!(
        search = %query.search,
        location = %query.location,
        employment_type = %query.employment_type,
        matched = items.len(),
        total = records.len(),
        "Filtered job listings"
    );
    items
}

/// `term` must already be lower-cased.
fn matches_search(job: &JobPosting, term: &str, include_skills: bool) -> bool {
    if term.is_empty() {
        return true;
    }
    job.title.to_lowercase().contains(term)
        || job.company.to_lowercase().contains(term)
        || (include_skills
            && job
                .skills()
                .iter()
                .any(|skill| skill.to_lowercase().contains(term)))
}

fn matches_exact(filter: &str, value: &str) -> bool {
    is_any(filter) || filter == value
}

fn is_any(filter: &str) -> bool {
    filter.is_empty() || filter.eq_ignore_ascii_case("any")
}

/// Distinct locations and employment types, first-seen order.
pub fn facets(records: &[JobPosting]) -> FacetsResponse {
    let mut out = FacetsResponse::default();
    for job in records {
        push_distinct(&mut out.locations, &job.location);
        push_distinct(&mut out.employment_types, &job.employment_type);
    }
    out
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::demo_store;
    use crate::models::job_status::JobStatus;

    fn ids<'a>(jobs: &[&'a JobPosting]) -> Vec<&'a str> {
        jobs.iter().map(|job| job.id()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let store = demo_store().unwrap();
        let jobs = filter_jobs(store.list(), &JobListQuery::default());
        assert_eq!(ids(&jobs), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_company_and_skills() {
        let store = demo_store().unwrap();
        assert_eq!(ids(&filter_jobs(store.list(), &JobListQuery::search("DEVOPS"))), vec!["3"]);
        assert_eq!(ids(&filter_jobs(store.list(), &JobListQuery::search("creative"))), vec!["4"]);
        assert_eq!(ids(&filter_jobs(store.list(), &JobListQuery::search("aws"))), vec!["2", "3"]);
    }

    #[test]
    fn search_matches_company_name_in_any_case() {
        let store = demo_store().unwrap();
        let jobs = filter_jobs(store.list(), &JobListQuery::search("VIETNAM"));
        assert_eq!(ids(&jobs), vec!["3"]);
    }

    #[test]
    fn location_and_type_are_exact_and_combine_with_search() {
        let store = demo_store().unwrap();
        let query = JobListQuery::default().with_location("Hồ Chí Minh");
        assert_eq!(ids(&filter_jobs(store.list(), &query)), vec!["1", "4"]);

        let query = query.with_employment_type("Part-time");
        assert_eq!(ids(&filter_jobs(store.list(), &query)), vec!["4"]);

        let query = JobListQuery::search("react").with_location("hồ chí minh");
        assert!(filter_jobs(store.list(), &query).is_empty());
    }

    #[test]
    fn any_sentinel_matches_everything() {
        let store = demo_store().unwrap();
        let query = JobListQuery::default()
            .with_location("any")
            .with_employment_type("Any");
        assert_eq!(filter_jobs(store.list(), &query).len(), 4);
    }

    #[test]
    fn admin_search_skips_skill_tags() {
        let store = demo_store().unwrap();
        let query = JobListQuery::search("docker").title_and_company_only();
        assert!(filter_jobs(store.list(), &query).is_empty());

        let query = JobListQuery::search("engineer").title_and_company_only();
        assert_eq!(ids(&filter_jobs(store.list(), &query)), vec!["3"]);
    }

    #[test]
    fn status_filter_narrows_admin_listing() {
        let store = demo_store().unwrap();
        let query = JobListQuery::default().with_status(JobStatus::Pending);
        assert_eq!(ids(&filter_jobs(store.list(), &query)), vec!["2", "4"]);
    }

    #[test]
    fn facets_are_distinct_in_first_seen_order() {
        let store = demo_store().unwrap();
        let facets = facets(store.list());
        assert_eq!(facets.locations, vec!["Hồ Chí Minh", "Hà Nội", "Đà Nẵng"]);
        assert_eq!(facets.employment_types, vec!["Full-time", "Part-time"]);
    }
}
