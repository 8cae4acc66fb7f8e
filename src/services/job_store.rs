use uuid::Uuid;

use crate::database::seed::SeedPosting;
use crate::dto::job_dto::SubmitJobPayload;
use crate::error::{Error, Result};
use crate::models::job_posting::{dedup_skills, JobPosting};
use crate::models::job_status::JobStatus;
use crate::services::status_workflow::{self, Transition};
use crate::utils::{time, validation};

/// In-memory job postings in insertion order, plus the visitor's saved and applied job ids.
#[derive(Debug, Clone, Default)]
pub struct JobStore {
    postings: Vec<JobPosting>,
    saved: Vec<String>,
    applied: Vec<String>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from demo records, which may start in any status.
    pub fn seed(records: Vec<SeedPosting>) -> Result<Self> {
        let mut store = Self::new();
        for record in records {
            if record.id.trim().is_empty() {
                return Err(Error::Conflict("Seed posting without an id".to_string()));
            }
            if store.contains(&record.id) {
                return Err(Error::Conflict(format!(
                    "Duplicate job posting id {}",
                    record.id
                )));
            }
            store.postings.push(JobPosting {
                id: record.id,
                title: record.title,
                company: record.company,
                location: record.location,
                salary_range: record.salary_range,
                employment_type: record.employment_type,
                experience_level: record.experience_level,
                skills: dedup_skills(record.skills),
                description: record.description,
                requirements: record.requirements,
                benefits: record.benefits,
                contact_email: record.contact_email,
                contact_phone: record.contact_phone,
                posted_at: record.posted_at,
                status: record.status,
                view_count: record.view_count,
                application_count: record.application_count,
                featured: record.featured,
            });
        }
        tracing::info!(count = store.postings.len(), "Seeded job store");
        Ok(store)
    }

    pub fn add(&mut self, payload: SubmitJobPayload) -> Result<&JobPosting> {
        let payload = payload.normalized();
        validation::validate(&payload)?;

        let id = self.fresh_id();
        tracing::info!(job_id = %id, title = %payload.title, company = %payload.company, "Job posting submitted");

        self.postings.push(JobPosting {
            id: id.clone(),
            title: payload.title,
            company: payload.company,
            location: payload.location,
            salary_range: payload.salary_range,
            employment_type: payload.employment_type,
            experience_level: payload.experience_level,
            skills: payload.skills,
            description: payload.description,
            requirements: payload.requirements,
            benefits: payload.benefits,
            contact_email: payload.contact_email,
            contact_phone: payload.contact_phone,
            posted_at: time::now(),
            status: JobStatus::Pending,
            view_count: 0,
            application_count: 0,
            featured: payload.featured,
        });

        self.postings.last().ok_or_else(|| Error::job_not_found(&id))
    }

    /// Removes the posting with its bookmark and applied mark. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Option<JobPosting> {
        let index = self.postings.iter().position(|job| job.id == id)?;
        self.saved.retain(|saved| saved != id);
        self.applied.retain(|applied| applied != id);
        let removed = self.postings.remove(index);
        tracing::info!(job_id = %id, "Job posting removed");
        Some(removed)
    }

    pub fn update_status(&mut self, id: &str, new_status: JobStatus) -> Result<Transition> {
        let posting = self.get_mut(id)?;
        status_workflow::apply_transition(posting, new_status)
    }

    pub fn list(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.postings.iter().any(|job| job.id == id)
    }

    pub fn get(&self, id: &str) -> Result<&JobPosting> {
        self.postings
            .iter()
            .find(|job| job.id == id)
            .ok_or_else(|| Error::job_not_found(id))
    }

    pub fn record_view(&mut self, id: &str) -> Result<u64> {
        let posting = self.get_mut(id)?;
        posting.view_count = posting.view_count.saturating_add(1);
        Ok(posting.view_count)
    }

    /// One application per job; a repeat is a `Conflict` and leaves the count alone.
    pub fn record_application(&mut self, id: &str) -> Result<u64> {
        if self.has_applied(id) {
            return Err(Error::Conflict(format!(
                "An application for job posting {} was already sent",
                id
            )));
        }
        let posting = self.get_mut(id)?;
        posting.application_count = posting.application_count.saturating_add(1);
        let count = posting.application_count;
        self.applied.push(id.to_string());
        tracing::info!(job_id = %id, applications = count, "Application recorded");
        Ok(count)
    }

    pub fn has_applied(&self, id: &str) -> bool {
        self.applied.iter().any(|applied| applied == id)
    }

    /// Flips the saved flag for `id` and returns the new state.
    pub fn toggle_saved(&mut self, id: &str) -> Result<bool> {
        if !self.contains(id) {
            return Err(Error::job_not_found(id));
        }
        if let Some(index) = self.saved.iter().position(|saved| saved == id) {
            self.saved.remove(index);
            Ok(false)
        } else {
            self.saved.push(id.to_string());
            Ok(true)
        }
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.iter().any(|saved| saved == id)
    }

    pub fn saved_ids(&self) -> &[String] {
        &self.saved
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut JobPosting> {
        self.postings
            .iter_mut()
            .find(|job| job.id == id)
            .ok_or_else(|| Error::job_not_found(id))
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}
