use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::job_status::JobStatus;
use crate::services::job_store::JobStore;
use crate::utils::time::date_utc;

/// A fully specified posting used to preload the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_range: String,
    pub employment_type: String,
    pub experience_level: String,
    pub skills: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub posted_at: DateTime<Utc>,
    pub status: JobStatus,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub application_count: u64,
    #[serde(default)]
    pub featured: bool,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn demo_catalog() -> Result<Vec<SeedPosting>> {
    Ok(vec![
        SeedPosting {
            id: "1".into(),
            title: "Senior Frontend Developer".into(),
            company: "TechViet Solutions".into(),
            location: "Hồ Chí Minh".into(),
            salary_range: "25-35 triệu VND".into(),
            employment_type: "Full-time".into(),
            experience_level: "3-5 years".into(),
            skills: strings(&["React", "TypeScript", "Next.js", "Tailwind CSS", "Redux", "Jest"]),
            description: "Looking for a Senior Frontend Developer experienced with React and TypeScript to build and maintain our web products alongside the backend and design teams.".into(),
            requirements: strings(&[
                "At least 3 years of frontend development experience",
                "Fluent in React and TypeScript",
                "Experience with Next.js and Tailwind CSS",
                "Understanding of Redux or the Context API",
                "Unit testing with Jest and React Testing Library",
                "Good teamwork and communication",
                "Able to read English technical documentation",
            ]),
            benefits: strings(&[
                "Competitive salary of 25-35 million VND",
                "Quarterly performance bonus",
                "Premium health insurance",
                "15 days of paid leave per year",
                "Training and skill development",
                "Modern, friendly workplace",
                "Annual team building and company trip",
            ]),
            contact_email: Some("hr@techviet.com".into()),
            contact_phone: None,
            posted_at: date_utc("2024-01-15")?,
            status: JobStatus::Active,
            view_count: 156,
            application_count: 24,
            featured: true,
        },
        SeedPosting {
            id: "2".into(),
            title: "Backend Developer".into(),
            company: "Digital Innovation Corp".into(),
            location: "Hà Nội".into(),
            salary_range: "20-30 triệu VND".into(),
            employment_type: "Full-time".into(),
            experience_level: "2-4 years".into(),
            skills: strings(&["Node.js", "Python", "MongoDB", "AWS"]),
            description: "Experienced Backend Developer wanted to grow our platform services.".into(),
            requirements: Vec::new(),
            benefits: Vec::new(),
            contact_email: None,
            contact_phone: None,
            posted_at: date_utc("2024-01-14")?,
            status: JobStatus::Pending,
            view_count: 89,
            application_count: 12,
            featured: false,
        },
        SeedPosting {
            id: "3".into(),
            title: "DevOps Engineer".into(),
            company: "CloudTech Vietnam".into(),
            location: "Đà Nẵng".into(),
            salary_range: "30-40 triệu VND".into(),
            employment_type: "Full-time".into(),
            experience_level: "4-6 years".into(),
            skills: strings(&["Docker", "Kubernetes", "Jenkins", "AWS"]),
            description: "Hiring a DevOps Engineer to manage our infrastructure.".into(),
            requirements: Vec::new(),
            benefits: Vec::new(),
            contact_email: None,
            contact_phone: None,
            posted_at: date_utc("2024-01-12")?,
            status: JobStatus::Active,
            view_count: 203,
            application_count: 18,
            featured: true,
        },
        SeedPosting {
            id: "4".into(),
            title: "UI/UX Designer".into(),
            company: "Creative Studio".into(),
            location: "Hồ Chí Minh".into(),
            salary_range: "15-25 triệu VND".into(),
            employment_type: "Part-time".into(),
            experience_level: "1-3 years".into(),
            skills: strings(&["Figma", "Adobe XD", "Sketch", "Prototyping"]),
            description: "Creative UI/UX Designer for web and mobile projects.".into(),
            requirements: Vec::new(),
            benefits: Vec::new(),
            contact_email: None,
            contact_phone: None,
            posted_at: date_utc("2024-01-10")?,
            status: JobStatus::Pending,
            view_count: 134,
            application_count: 31,
            featured: false,
        },
    ])
}

pub fn demo_store() -> Result<JobStore> {
    JobStore::seed(demo_catalog()?)
}
