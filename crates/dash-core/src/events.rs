//! Session event contract.
//!
//! A dashboard session publishes [`DashboardEvent`]s so that other parts of
//! the host application can react to a dashboard being saved (switch to
//! showing it, reload cached lists). Fan-out goes through a [`Notifier`]
//! owned by the session: subscribers register a channel up front instead of
//! listening on a global messenger, which keeps delivery visible and
//! testable.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::debug;

// ── Events ────────────────────────────────────────────────────────────────────

/// Kind of event published by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEventKind {
    /// Subscribers should switch to showing the current dashboard.
    View,
    /// A dashboard was persisted.
    Save,
    /// Subscribers should reload any cached dashboard lists.
    Refresh,
}

/// An event published by a session, with an optional dashboard reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardEvent {
    pub kind: DashboardEventKind,
    /// Path of the dashboard the event refers to, when one applies.
    pub dashboard: Option<PathBuf>,
}

impl DashboardEvent {
    /// A `View` event with no dashboard reference.
    pub fn view() -> Self {
        Self {
            kind: DashboardEventKind::View,
            dashboard: None,
        }
    }

    /// A `Refresh` event with no dashboard reference.
    pub fn refresh() -> Self {
        Self {
            kind: DashboardEventKind::Refresh,
            dashboard: None,
        }
    }

    /// An event of the given kind referring to a specific dashboard file.
    pub fn with_dashboard(kind: DashboardEventKind, dashboard: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            dashboard: Some(dashboard.into()),
        }
    }
}

// ── Notifier ──────────────────────────────────────────────────────────────────

/// Synchronous, fire-and-forget event fan-out.
///
/// Each subscriber gets its own `mpsc` channel. Publishing clones the event
/// into every live channel; subscribers whose receiver was dropped are pruned
/// silently on the next publish. No acknowledgement, no retry.
#[derive(Default)]
pub struct Notifier {
    subscribers: Vec<Sender<DashboardEvent>>,
}

impl Notifier {
    /// Create a notifier with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber and return its receiving endpoint.
    pub fn subscribe(&mut self) -> Receiver<DashboardEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Publish `event` to every live subscriber.
    pub fn publish(&mut self, event: DashboardEvent) {
        debug!(kind = ?event.kind, "publishing dashboard event");
        self.subscribers
            .retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Number of currently registered subscribers.
    ///
    /// Disconnected subscribers are only pruned on publish, so this may
    /// briefly over-count.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_constructors() {
        assert_eq!(DashboardEvent::view().kind, DashboardEventKind::View);
        assert!(DashboardEvent::view().dashboard.is_none());
        assert_eq!(DashboardEvent::refresh().kind, DashboardEventKind::Refresh);
        assert!(DashboardEvent::refresh().dashboard.is_none());
    }

    #[test]
    fn test_event_with_dashboard_reference() {
        let event = DashboardEvent::with_dashboard(DashboardEventKind::Save, "/srv/Q1.xml");
        assert_eq!(event.kind, DashboardEventKind::Save);
        assert_eq!(event.dashboard, Some(PathBuf::from("/srv/Q1.xml")));
    }

    #[test]
    fn test_publish_with_no_subscribers_is_a_no_op() {
        let mut notifier = Notifier::new();
        notifier.publish(DashboardEvent::view());
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[test]
    fn test_subscriber_receives_events_in_order() {
        let mut notifier = Notifier::new();
        let rx = notifier.subscribe();

        notifier.publish(DashboardEvent::view());
        notifier.publish(DashboardEvent::refresh());

        assert_eq!(rx.try_recv().unwrap().kind, DashboardEventKind::View);
        assert_eq!(rx.try_recv().unwrap().kind, DashboardEventKind::Refresh);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_every_subscriber_receives_each_event() {
        let mut notifier = Notifier::new();
        let rx1 = notifier.subscribe();
        let rx2 = notifier.subscribe();

        notifier.publish(DashboardEvent::refresh());

        assert_eq!(rx1.try_recv().unwrap().kind, DashboardEventKind::Refresh);
        assert_eq!(rx2.try_recv().unwrap().kind, DashboardEventKind::Refresh);
    }

    #[test]
    fn test_disconnected_subscriber_is_pruned_on_publish() {
        let mut notifier = Notifier::new();
        let rx1 = notifier.subscribe();
        let rx2 = notifier.subscribe();
        assert_eq!(notifier.subscriber_count(), 2);

        drop(rx2);
        notifier.publish(DashboardEvent::view());

        assert_eq!(notifier.subscriber_count(), 1);
        assert_eq!(rx1.try_recv().unwrap().kind, DashboardEventKind::View);
    }
}
