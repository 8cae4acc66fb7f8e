use crate::error::{Error, Result};
use crate::models::job_posting::JobPosting;
use crate::models::job_status::JobStatus;
use crate::models::notification::Notification;

/// A completed moderation change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub job_id: String,
    pub title: String,
    pub from: JobStatus,
    pub to: JobStatus,
}

impl Transition {
    pub fn notification(&self) -> Notification {
        let notification = match self.to {
            JobStatus::Active => Notification::success(
                "Approved",
                format!("Job posting \"{}\" has been approved", self.title),
            ),
            JobStatus::Rejected => Notification::info(
                "Rejected",
                format!("Job posting \"{}\" has been rejected", self.title),
            ),
            JobStatus::Pending => Notification::info(
                "Pending review",
                format!("Job posting \"{}\" is awaiting review", self.title),
            ),
        };
        notification.for_job(&self.job_id)
    }
}

/// Only pending postings can be moderated, and only to a final state.
pub fn can_transition(from: JobStatus, to: JobStatus) -> bool {
    matches!(
        (from, to),
        (JobStatus::Pending, JobStatus::Active) | (JobStatus::Pending, JobStatus::Rejected)
    )
}

pub fn apply_transition(posting: &mut JobPosting, to: JobStatus) -> Result<Transition> {
    let from = posting.status;
    if !can_transition(from, to) {
        tracing::warn!(job_id = %posting.id, %from, %to, "Rejected status transition");
        return Err(Error::InvalidTransition {
            id: posting.id.clone(),
            from,
            to,
        });
    }

    posting.status = to;
    tracing::info!(job_id = %posting.id, %from, %to, "Job status changed");

    Ok(Transition {
        job_id: posting.id.clone(),
        title: posting.title.clone(),
        from,
        to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notification::NotificationKind;

    const ALL: [JobStatus; 3] = [JobStatus::Pending, JobStatus::Active, JobStatus::Rejected];

    #[test]
    fn only_pending_postings_move() {
        for from in ALL {
            for to in ALL {
                let expected = from == JobStatus::Pending && to != JobStatus::Pending;
                assert_eq!(can_transition(from, to), expected, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn transition_notifications_match_the_action() {
        let approved = Transition {
            job_id: "1".into(),
            title: "DevOps Engineer".into(),
            from: JobStatus::Pending,
            to: JobStatus::Active,
        };
        let n = approved.notification();
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.job_id.as_deref(), Some("1"));
        assert!(n.message.contains("DevOps Engineer"));

        let rejected = Transition {
            to: JobStatus::Rejected,
            ..approved
        };
        assert_eq!(rejected.notification().kind, NotificationKind::Info);
    }
}
