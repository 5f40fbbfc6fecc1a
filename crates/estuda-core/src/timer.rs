//! Countdown timer state.
//!
//! The timer is a plain value ticked by the reducer: one [`TickTimer`]
//! intent decrements `time_left_secs` by exactly one second, floored at
//! zero. Reaching zero deactivates the timer but never auto-completes the
//! session -- ending a session is always an explicit user action.
//!
//! [`TickTimer`]: crate::state::Intent::TickTimer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    Work,
    ShortBreak,
    LongBreak,
}

impl Default for TimerKind {
    fn default() -> Self {
        TimerKind::Work
    }
}

/// The single countdown instance.
///
/// Invariant: `time_left_secs <= total_time_secs` at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub is_active: bool,
    pub is_paused: bool,
    pub time_left_secs: u32,
    pub total_time_secs: u32,
    pub kind: TimerKind,
    pub session_count: u32,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            is_active: false,
            is_paused: false,
            time_left_secs: 0,
            total_time_secs: 0,
            kind: TimerKind::Work,
            session_count: 0,
        }
    }
}

impl TimerState {
    /// Arm the countdown for a fresh run.
    pub fn arm(&mut self, total_secs: u32, kind: TimerKind) {
        self.is_active = true;
        self.is_paused = false;
        self.time_left_secs = total_secs;
        self.total_time_secs = total_secs;
        self.kind = kind;
    }

    /// Decrement by one second, floored at zero. Returns `true` when this
    /// tick exhausted the countdown (the timer deactivates itself).
    pub fn tick(&mut self) -> bool {
        self.time_left_secs = self.time_left_secs.saturating_sub(1);
        if self.time_left_secs == 0 {
            self.is_active = false;
            return true;
        }
        false
    }

    /// Whether a periodic tick source should currently be armed.
    pub fn should_tick(&self) -> bool {
        self.is_active && !self.is_paused
    }

    /// 0.0 .. 1.0 progress through the countdown.
    pub fn progress(&self) -> f64 {
        if self.total_time_secs == 0 {
            return 0.0;
        }
        1.0 - (self.time_left_secs as f64 / self.total_time_secs as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timer_is_idle() {
        let t = TimerState::default();
        assert!(!t.is_active);
        assert!(!t.should_tick());
        assert_eq!(t.time_left_secs, 0);
        assert_eq!(t.kind, TimerKind::Work);
    }

    #[test]
    fn tick_floors_at_zero_and_deactivates() {
        let mut t = TimerState::default();
        t.arm(2, TimerKind::Work);
        assert!(t.should_tick());
        assert!(!t.tick());
        assert_eq!(t.time_left_secs, 1);
        assert!(t.tick());
        assert_eq!(t.time_left_secs, 0);
        assert!(!t.is_active);
        // A stray extra tick stays floored at zero.
        t.tick();
        assert_eq!(t.time_left_secs, 0);
    }

    #[test]
    fn progress_is_zero_for_unarmed_timer() {
        let t = TimerState::default();
        assert_eq!(t.progress(), 0.0);
    }

    #[test]
    fn progress_advances_with_ticks() {
        let mut t = TimerState::default();
        t.arm(4, TimerKind::Work);
        t.tick();
        assert!((t.progress() - 0.25).abs() < f64::EPSILON);
    }
}
