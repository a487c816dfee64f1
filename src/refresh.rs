//! Invalidation signaling between the data plane and views.
//!
//! When a write lands, the writer publishes a refresh event instead of
//! the view layer listening for ambient broadcasts. The subscriber may
//! wait for the configured consistency window before refetching, which
//! makes the "data may lag the write" interval an explicit parameter.

use crossbeam::channel::{unbounded, Receiver, Sender};
use std::time::Duration;

/// What was invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshEvent {
    Workouts,
    Achievements,
    Leaderboard,
}

/// Single-consumer invalidation channel.
pub struct RefreshBus {
    sender: Sender<RefreshEvent>,
    receiver: Receiver<RefreshEvent>,
    consistency_window: Duration,
}

impl RefreshBus {
    /// Create a bus with the given eventual-consistency window.
    pub fn new(consistency_window: Duration) -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            consistency_window,
        }
    }

    /// Publish an invalidation signal.
    pub fn publish(&self, event: RefreshEvent) {
        tracing::debug!(?event, "refresh published");
        // Send cannot fail while the bus holds its own receiver.
        let _ = self.sender.send(event);
    }

    /// Get a receiver for invalidation signals.
    ///
    /// Each event is delivered to one receiver; clone receivers only for
    /// handing off, not for fan-out.
    pub fn subscribe(&self) -> Receiver<RefreshEvent> {
        self.receiver.clone()
    }

    /// How long a subscriber should wait before refetching.
    pub fn consistency_window(&self) -> Duration {
        self.consistency_window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_events_are_received() {
        let bus = RefreshBus::new(Duration::from_millis(500));
        let rx = bus.subscribe();

        bus.publish(RefreshEvent::Achievements);
        bus.publish(RefreshEvent::Leaderboard);

        assert_eq!(rx.try_recv().unwrap(), RefreshEvent::Achievements);
        assert_eq!(rx.try_recv().unwrap(), RefreshEvent::Leaderboard);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_consistency_window_is_exposed() {
        let bus = RefreshBus::new(Duration::from_millis(500));
        assert_eq!(bus.consistency_window(), Duration::from_millis(500));
    }
}
