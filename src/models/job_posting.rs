use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::job_status::JobStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub(crate) id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_range: String,
    pub employment_type: String,
    pub experience_level: String,
    pub(crate) skills: Vec<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub posted_at: DateTime<Utc>,
    pub(crate) status: JobStatus,
    pub(crate) view_count: u64,
    pub(crate) application_count: u64,
    pub featured: bool,
}

impl JobPosting {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current moderation status. Changes go through the status workflow.
    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn view_count(&self) -> u64 {
        self.view_count
    }

    pub fn application_count(&self) -> u64 {
        self.application_count
    }

    /// First `limit` skills in display order plus the number left out.
    pub fn skill_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.skills.len().min(limit);
        (&self.skills[..shown], self.skills.len() - shown)
    }
}

/// Appends `skill` (trimmed) unless it is empty or already present.
/// Returns whether the list changed.
pub fn push_unique_skill(skills: &mut Vec<String>, skill: &str) -> bool {
    let skill = skill.trim();
    if skill.is_empty() || skills.iter().any(|existing| existing == skill) {
        return false;
    }
    skills.push(skill.to_string());
    true
}

/// Normalizes a raw skill list: trims entries, drops blanks and later duplicates.
pub fn dedup_skills<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut skills = Vec::new();
    for skill in raw {
        push_unique_skill(&mut skills, skill.as_ref());
    }
    skills
}
