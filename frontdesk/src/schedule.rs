/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A value delivered after a delay. Dropping the handle cancels delivery,
/// so an owner that goes away never receives a stale event.
pub struct Scheduled<T> {
    receiver: oneshot::Receiver<T>,
    handle: JoinHandle<()>,
}

impl<T: Send + 'static> Scheduled<T> {
    pub fn after(delay: Duration, value: T) -> Self {
        let (sender, receiver) = oneshot::channel();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(value);
        });

        Self { receiver, handle }
    }
}

impl<T> Scheduled<T> {
    /// Waits for the event. `None` only if the timer task died.
    pub async fn fired(mut self) -> Option<T> {
        (&mut self.receiver).await.ok()
    }

    pub fn try_take(&mut self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    pub fn cancel(self) {}
}

impl<T> Drop for Scheduled<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Whole-second countdown, advanced by the caller's clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cooldown {
    remaining: u32,
}

impl Cooldown {
    pub fn start(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn tick(&mut self) {
        self.advance(1);
    }

    pub fn advance(&mut self, seconds: u32) {
        self.remaining = self.remaining.saturating_sub(seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_fires_after_delay() {
        let start = tokio::time::Instant::now();
        let scheduled = Scheduled::after(Duration::from_millis(1500), "prompt");

        assert_eq!(scheduled.fired().await, Some("prompt"));
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_not_ready_early() {
        let mut scheduled = Scheduled::after(Duration::from_millis(1500), 7u32);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(scheduled.try_take(), None);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(scheduled.try_take(), Some(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_schedule_discards_value() {
        let marker = Arc::new(());
        let scheduled = Scheduled::after(Duration::from_millis(1500), Arc::clone(&marker));

        scheduled.cancel();
        tokio::time::sleep(Duration::from_millis(2000)).await;

        // the aborted task dropped its copy without delivering it
        assert_eq!(Arc::strong_count(&marker), 1);
    }

    #[test]
    fn test_cooldown_counts_down_to_zero() {
        let mut cooldown = Cooldown::start(60);
        assert!(cooldown.is_active());

        for _ in 0..59 {
            cooldown.tick();
        }
        assert_eq!(cooldown.remaining(), 1);
        assert!(cooldown.is_active());

        cooldown.tick();
        assert!(!cooldown.is_active());

        cooldown.advance(10);
        assert_eq!(cooldown.remaining(), 0);
    }
}
