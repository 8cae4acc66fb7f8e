use crate::error::Error;
use crate::models::notification::Notification;

/// Receiver of board notifications, typically the presentation layer's toast queue.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink {
    fn notify(&self, notification: &Notification);
}

impl<F> NotificationSink for F
where
    F: Fn(&Notification),
{
    fn notify(&self, notification: &Notification) {
        self(notification)
    }
}

/// Fans notifications out to every subscriber, in subscription order.
#[derive(Default)]
pub struct NotificationService {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, sink: impl NotificationSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn publish(&self, notification: Notification) {
        tracing::debug!(
            kind = ?notification.kind,
            job_id = notification.job_id.as_deref().unwrap_or(""),
            subscribers = self.sinks.len(),
            "{}",
            notification.message
        );
        for sink in &self.sinks {
            sink.notify(&notification);
        }
    }

    pub fn publish_error(&self, err: &Error) {
        self.publish(Notification::error(err.title(), err.to_string()));
    }
}
