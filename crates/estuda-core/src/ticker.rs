//! The 1 Hz tick source.
//!
//! The reducer is only ever advanced by discrete [`Intent::TickTimer`]
//! dispatches; this module owns the periodic task that produces them.
//! A [`Ticker`] holds at most one spawned task at a time: `sync` aborts
//! the previous task before arming a new one, inside the same call, so
//! two tick streams can never run concurrently and double-decrement the
//! countdown.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::state::Intent;

/// Exclusively owned handle to the periodic tick task.
#[derive(Debug)]
pub struct Ticker {
    tx: mpsc::UnboundedSender<Intent>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Create an unarmed ticker feeding the given intent channel.
    pub fn new(tx: mpsc::UnboundedSender<Intent>) -> Self {
        Self { tx, handle: None }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Reconcile the tick task with the desired state.
    ///
    /// Always cancels the existing task first; arms a fresh one only when
    /// `should_tick` is true. Call this after every transition that can
    /// change `{is_active, is_paused}`.
    pub fn sync(&mut self, should_tick: bool) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        if !should_tick {
            return;
        }
        let tx = self.tx.clone();
        self.handle = Some(tokio::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick fires immediately; consume it so the
            // first TickTimer lands one full second after arming.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(Intent::TickTimer).is_err() {
                    // Receiver dropped; nobody is reducing anymore.
                    break;
                }
            }
        }));
    }

    /// Cancel the tick task, if armed.
    pub fn cancel(&mut self) {
        self.sync(false);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::task::yield_now;

    /// Advance the paused clock by whole seconds, yielding after each step
    /// so the tick task runs before the interval can skip ahead.
    async fn advance_secs(secs: u64) {
        for _ in 0..secs {
            time::advance(Duration::from_secs(1)).await;
            yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn armed_ticker_emits_one_tick_per_second() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::new(tx);
        ticker.sync(true);
        assert!(ticker.is_armed());
        // Let the task start and consume the immediate first interval tick.
        yield_now().await;

        advance_secs(3).await;
        let mut ticks = 0;
        while rx.try_recv().is_ok() {
            ticks += 1;
        }
        assert_eq!(ticks, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_never_doubles_the_stream() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::new(tx);
        // Repeated syncs while active must keep exactly one task.
        ticker.sync(true);
        ticker.sync(true);
        ticker.sync(true);
        yield_now().await;

        advance_secs(5).await;
        let mut ticks = 0;
        while rx.try_recv().is_ok() {
            ticks += 1;
        }
        // One stream delivers exactly one tick per second; overlapping
        // streams would deliver more.
        assert_eq!(ticks, 5, "expected one tick stream, got {ticks} ticks in 5s");
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_the_stream() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::new(tx);
        ticker.sync(true);
        yield_now().await;
        advance_secs(2).await;
        let mut before = 0;
        while rx.try_recv().is_ok() {
            before += 1;
        }
        assert_eq!(before, 2);

        ticker.cancel();
        assert!(!ticker.is_armed());
        advance_secs(3).await;
        assert!(rx.try_recv().is_err());
    }
}
