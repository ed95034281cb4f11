//! Focus Timer
//!
//! Pomodoro-style countdown alternating between a focus and a break period.
//! The host calls `tick` once per second while the timer runs.

use std::f64::consts::TAU;

/// Radius of the timer ring (SVG user units)
pub const TIMER_RING_RADIUS: f64 = 54.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Focus,
    Break,
}

impl TimerMode {
    pub fn label(&self) -> &'static str {
        match self {
            TimerMode::Focus => "focus",
            TimerMode::Break => "break",
        }
    }

    pub fn other(&self) -> TimerMode {
        match self {
            TimerMode::Focus => TimerMode::Break,
            TimerMode::Break => TimerMode::Focus,
        }
    }
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Idle,
    Counted,
    /// Period ended; the timer stopped and switched to the given mode
    Finished(TimerMode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FocusTimer {
    mode: TimerMode,
    remaining: u32,
    running: bool,
    focus_secs: u32,
    break_secs: u32,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(25 * 60, 5 * 60)
    }
}

impl FocusTimer {
    pub fn new(focus_secs: u32, break_secs: u32) -> Self {
        let focus_secs = focus_secs.max(1);
        Self {
            mode: TimerMode::Focus,
            remaining: focus_secs,
            running: false,
            focus_secs,
            break_secs: break_secs.max(1),
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn duration(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Focus => self.focus_secs,
            TimerMode::Break => self.break_secs,
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return TickOutcome::Counted;
        }
        let next = self.mode.other();
        self.running = false;
        self.mode = next;
        self.remaining = self.duration(next);
        log::info!("focus timer finished, switched to {}", next.label());
        TickOutcome::Finished(next)
    }

    /// Start/pause
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Stop and reload the current mode's duration
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.duration(self.mode);
    }

    /// Stop and load another mode
    pub fn switch(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.reset();
    }

    /// Elapsed share of the current period, 0..=100
    pub fn progress(&self) -> f64 {
        let total = self.duration(self.mode) as f64;
        (total - self.remaining as f64) / total * 100.0
    }

    /// `"MM:SS"`
    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }

    /// Stroke dash offset of the timer ring
    pub fn dash_offset(&self) -> f64 {
        TAU * TIMER_RING_RADIUS * (1.0 - self.progress() / 100.0)
    }
}

pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
