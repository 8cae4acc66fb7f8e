use crate::config::Config;
use crate::dto::job_dto::{
    DashboardResponse, FacetsResponse, JobCardResponse, JobListQuery, SubmitJobPayload,
};
use crate::error::Result;
use crate::models::job_posting::JobPosting;
use crate::models::job_status::JobStatus;
use crate::models::notification::Notification;
use crate::models::stats::AggregateStats;
use crate::services::filter_service;
use crate::services::job_store::JobStore;
use crate::services::notification_service::{NotificationService, NotificationSink};
use crate::services::stats_service;

/// Command surface consumed by the presentation layer.
pub struct BoardService {
    store: JobStore,
    notifications: NotificationService,
    recent_jobs_limit: usize,
    skill_preview_limit: usize,
}

impl BoardService {
    pub fn new(store: JobStore, config: &Config) -> Self {
        Self {
            store,
            notifications: NotificationService::new(),
            recent_jobs_limit: config.recent_jobs_limit,
            skill_preview_limit: config.skill_preview_limit,
        }
    }

    pub fn subscribe(&mut self, sink: impl NotificationSink + 'static) {
        self.notifications.subscribe(sink);
    }

    pub fn store(&self) -> &JobStore {
        &self.store
    }

    pub fn list_filtered(&self, query: &JobListQuery) -> Vec<&JobPosting> {
        filter_service::filter_jobs(self.store.list(), query)
    }

    pub fn cards(&self, query: &JobListQuery) -> Vec<JobCardResponse> {
        self.list_filtered(query)
            .into_iter()
            .map(|job| JobCardResponse::from_posting(job, self.skill_preview_limit))
            .collect()
    }

    pub fn facets(&self) -> FacetsResponse {
        filter_service::facets(self.store.list())
    }

    pub fn get(&self, id: &str) -> Result<&JobPosting> {
        self.store.get(id)
    }

    /// Job-detail lookup; counts as a view.
    pub fn view(&mut self, id: &str) -> Result<&JobPosting> {
        self.store.record_view(id)?;
        self.store.get(id)
    }

    pub fn submit_posting(&mut self, payload: SubmitJobPayload) -> Result<JobPosting> {
        match self.store.add(payload) {
            Ok(posting) => {
                let posting = posting.clone();
                self.notifications.publish(
                    Notification::success(
                        "Submitted",
                        format!(
                            "Job posting \"{}\" was submitted and is awaiting review",
                            posting.title
                        ),
                    )
                    .for_job(posting.id()),
                );
                Ok(posting)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Job posting submission rejected");
                self.notifications.publish_error(&err);
                Err(err)
            }
        }
    }

    pub fn approve(&mut self, id: &str) -> Result<()> {
        self.moderate(id, JobStatus::Active)
    }

    pub fn reject(&mut self, id: &str) -> Result<()> {
        self.moderate(id, JobStatus::Rejected)
    }

    fn moderate(&mut self, id: &str, to: JobStatus) -> Result<()> {
        match self.store.update_status(id, to) {
            Ok(transition) => {
                self.notifications.publish(transition.notification());
                Ok(())
            }
            Err(err) => {
                self.notifications.publish_error(&err);
                Err(err)
            }
        }
    }

    /// Deletes regardless of status. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) -> Option<JobPosting> {
        let removed = self.store.remove(id);
        match &removed {
            Some(posting) => self.notifications.publish(
                Notification::info(
                    "Deleted",
                    format!("Job posting \"{}\" has been deleted", posting.title),
                )
                .for_job(id),
            ),
            None => tracing::debug!(job_id = %id, "Delete ignored for unknown job posting"),
        }
        removed
    }

    pub fn apply(&mut self, id: &str) -> Result<u64> {
        match self.store.record_application(id) {
            Ok(count) => {
                self.notifications.publish(
                    Notification::success(
                        "Application sent",
                        "We will contact you as soon as possible.",
                    )
                    .for_job(id),
                );
                Ok(count)
            }
            Err(err) => {
                self.notifications.publish_error(&err);
                Err(err)
            }
        }
    }

    pub fn toggle_saved(&mut self, id: &str) -> Result<bool> {
        match self.store.toggle_saved(id) {
            Ok(saved) => {
                let notification = if saved {
                    Notification::info("Saved", "The job was added to your saved list")
                } else {
                    Notification::info("Removed", "The job was removed from your saved list")
                };
                self.notifications.publish(notification.for_job(id));
                Ok(saved)
            }
            Err(err) => {
                self.notifications.publish_error(&err);
                Err(err)
            }
        }
    }

    pub fn stats(&self) -> AggregateStats {
        stats_service::aggregate(self.store.list())
    }

    pub fn recent(&self) -> &[JobPosting] {
        let jobs = self.store.list();
        &jobs[..jobs.len().min(self.recent_jobs_limit)]
    }

    pub fn dashboard(&self) -> DashboardResponse {
        DashboardResponse {
            stats: self.stats(),
            recent: self
                .recent()
                .iter()
                .map(|job| JobCardResponse::from_posting(job, self.skill_preview_limit))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::demo_store;
    use crate::error::Error;
    use crate::models::notification::NotificationKind;
    use crate::services::notification_service::MockNotificationSink;

    fn board() -> BoardService {
        BoardService::new(demo_store().unwrap(), &Config::default())
    }

    #[test]
    fn approve_emits_one_success_notification() {
        let mut sink = MockNotificationSink::new();
        sink.expect_notify()
            .withf(|n: &Notification| {
                n.kind == NotificationKind::Success && n.job_id.as_deref() == Some("2")
            })
            .times(1)
            .return_const(());

        let mut board = board();
        board.subscribe(sink);
        board.approve("2").unwrap();
        assert_eq!(board.get("2").unwrap().status(), JobStatus::Active);
    }

    #[test]
    fn rejected_command_emits_error_notification() {
        let mut sink = MockNotificationSink::new();
        sink.expect_notify()
            .withf(|n: &Notification| n.kind == NotificationKind::Error)
            .times(1)
            .return_const(());

        let mut board = board();
        board.subscribe(sink);
        let err = board.approve("1").unwrap_err();
        assert!(matches!(err, Error::InvalidTransition { .. }));
    }

    #[test]
    fn deleting_unknown_id_is_silent() {
        let mut sink = MockNotificationSink::new();
        sink.expect_notify().times(0);

        let mut board = board();
        board.subscribe(sink);
        assert!(board.delete("missing").is_none());
        assert_eq!(board.store().len(), 4);
    }

    #[test]
    fn repeat_application_is_refused_with_error_notification() {
        let mut sink = MockNotificationSink::new();
        sink.expect_notify()
            .withf(|n: &Notification| n.kind == NotificationKind::Success)
            .times(1)
            .return_const(());
        sink.expect_notify()
            .withf(|n: &Notification| n.kind == NotificationKind::Error && n.title == "Conflict")
            .times(1)
            .return_const(());

        let mut board = board();
        board.subscribe(sink);
        assert_eq!(board.apply("3").unwrap(), 19);
        assert!(matches!(board.apply("3"), Err(Error::Conflict(_))));
        assert_eq!(board.get("3").unwrap().application_count(), 19);
        assert_eq!(board.stats().total_applications, 86);
    }

    #[test]
    fn view_counts_and_returns_the_posting() {
        let mut board = board();
        let job = board.view("3").unwrap();
        assert_eq!(job.title, "DevOps Engineer");
        assert_eq!(job.view_count(), 204);
    }

    #[test]
    fn recent_is_capped_by_config() {
        let config = Config {
            recent_jobs_limit: 2,
            ..Config::default()
        };
        let board = BoardService::new(demo_store().unwrap(), &config);
        let ids: Vec<&str> = board.recent().iter().map(JobPosting::id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn cards_carry_skill_preview() {
        let board = board();
        let cards = board.cards(&JobListQuery::search("react"));
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].skills, vec!["React", "TypeScript", "Next.js", "Tailwind CSS"]);
        assert_eq!(cards[0].hidden_skill_count, 2);
    }
}
