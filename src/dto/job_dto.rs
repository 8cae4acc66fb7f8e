use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job_posting::{dedup_skills, push_unique_skill, JobPosting};
use crate::models::job_status::JobStatus;
use crate::models::stats::AggregateStats;
use crate::utils::time::display_date;
use crate::utils::validation::{non_blank, not_blank};

/// Fields of the job-posting form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SubmitJobPayload {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub company: String,
    #[validate(custom(function = "not_blank"))]
    pub location: String,
    pub salary_range: String,
    pub employment_type: String,
    pub experience_level: String,
    pub skills: Vec<String>,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    #[validate(email(message = "Invalid email format"))]
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub featured: bool,
}

impl SubmitJobPayload {
    /// Adds a skill tag the way the form does: trimmed, non-empty, no repeats.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        push_unique_skill(&mut self.skills, skill)
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }

    /// Trims text fields, drops blank list entries and blank contact details.
    pub fn normalized(self) -> Self {
        let clean_list = |items: Vec<String>| -> Vec<String> {
            items
                .into_iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect()
        };

        Self {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            salary_range: self.salary_range.trim().to_string(),
            employment_type: self.employment_type.trim().to_string(),
            experience_level: self.experience_level.trim().to_string(),
            skills: dedup_skills(self.skills),
            description: self.description.trim().to_string(),
            requirements: clean_list(self.requirements),
            benefits: clean_list(self.benefits),
            contact_email: non_blank(self.contact_email),
            contact_phone: non_blank(self.contact_phone),
            featured: self.featured,
        }
    }
}

/// Search box and dropdown state. Empty fields (or "any") match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobListQuery {
    pub search: String,
    pub location: String,
    pub employment_type: String,
    pub status: Option<JobStatus>,
    /// Admin table search: title and company only, skills are not matched.
    pub title_and_company_only: bool,
}

impl JobListQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_employment_type(mut self, employment_type: impl Into<String>) -> Self {
        self.employment_type = employment_type.into();
        self
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn title_and_company_only(mut self) -> Self {
        self.title_and_company_only = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetsResponse {
    pub locations: Vec<String>,
    pub employment_types: Vec<String>,
}

/// Compact listing row shared by the catalog grid and the admin table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCardResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_range: String,
    pub employment_type: String,
    pub experience_level: String,
    pub skills: Vec<String>,
    pub hidden_skill_count: usize,
    pub status: JobStatus,
    pub featured: bool,
    pub view_count: u64,
    pub application_count: u64,
    pub posted_at: DateTime<Utc>,
    pub posted_on: String,
}

impl JobCardResponse {
    pub fn from_posting(value: &JobPosting, skill_preview_limit: usize) -> Self {
        let (skills, hidden_skill_count) = value.skill_preview(skill_preview_limit);
        Self {
            id: value.id().to_string(),
            title: value.title.clone(),
            company: value.company.clone(),
            location: value.location.clone(),
            salary_range: value.salary_range.clone(),
            employment_type: value.employment_type.clone(),
            experience_level: value.experience_level.clone(),
            skills: skills.to_vec(),
            hidden_skill_count,
            status: value.status(),
            featured: value.featured,
            view_count: value.view_count(),
            application_count: value.application_count(),
            posted_at: value.posted_at,
            posted_on: display_date(value.posted_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub stats: AggregateStats,
    pub recent: Vec<JobCardResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_payload() -> SubmitJobPayload {
        SubmitJobPayload {
            title: "Rust Engineer".into(),
            company: "Ferris Labs".into(),
            location: "Hà Nội".into(),
            description: "Build services".into(),
            ..SubmitJobPayload::default()
        }
    }

    #[test]
    fn whitespace_only_required_fields_fail_validation() {
        let payload = SubmitJobPayload {
            company: "   ".into(),
            ..complete_payload()
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("company"));
        assert!(!errors.field_errors().contains_key("title"));
    }

    #[test]
    fn malformed_contact_email_fails_validation() {
        let payload = SubmitJobPayload {
            contact_email: Some("not-an-email".into()),
            ..complete_payload()
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("contact_email"));
    }

    #[test]
    fn normalized_drops_blank_contacts_and_duplicate_skills() {
        let payload = SubmitJobPayload {
            skills: vec!["Rust".into(), "Rust".into(), " ".into(), "SQL".into()],
            contact_email: Some("  ".into()),
            requirements: vec!["3 years".into(), "".into()],
            ..complete_payload()
        }
        .normalized();

        assert_eq!(payload.skills, vec!["Rust", "SQL"]);
        assert_eq!(payload.contact_email, None);
        assert_eq!(payload.requirements, vec!["3 years"]);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn form_skill_editing() {
        let mut payload = complete_payload();
        assert!(payload.add_skill(" Docker "));
        assert!(!payload.add_skill("Docker"));
        assert!(payload.add_skill("AWS"));
        payload.remove_skill("Docker");
        assert_eq!(payload.skills, vec!["AWS"]);
    }
}
