//! Pomodoro timer state machine. The UI drives it with `tick(1)` once per
//! second while running.

use serde::{Deserialize, Serialize};

use crate::error::{DeskError, DeskResult};

const MIN_MINUTES: u32 = 1;
const MAX_MINUTES: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "Focus",
            Phase::ShortBreak => "Short break",
            Phase::LongBreak => "Long break",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroSettings {
    pub work_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    /// Work sessions before a long break
    pub sessions_until_long_break: u32,
    pub auto_start: bool,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            sessions_until_long_break: 4,
            auto_start: false,
        }
    }
}

impl PomodoroSettings {
    pub fn validate(&self) -> DeskResult<()> {
        for (label, minutes) in [
            ("work", self.work_minutes),
            ("short break", self.short_break_minutes),
            ("long break", self.long_break_minutes),
        ] {
            if !(MIN_MINUTES..=MAX_MINUTES).contains(&minutes) {
                return Err(DeskError::invalid(format!(
                    "{label} length must be between {MIN_MINUTES} and {MAX_MINUTES} minutes"
                )));
            }
        }
        if self.sessions_until_long_break == 0 {
            return Err(DeskError::invalid(
                "sessions before a long break must be at least 1",
            ));
        }
        Ok(())
    }

    fn duration_secs(&self, phase: Phase) -> u32 {
        let minutes = match phase {
            Phase::Work => self.work_minutes,
            Phase::ShortBreak => self.short_break_minutes,
            Phase::LongBreak => self.long_break_minutes,
        };
        minutes * 60
    }
}

/// Emitted when a phase runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseCompleted {
    pub finished: Phase,
    pub next: Phase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroState {
    pub settings: PomodoroSettings,
    pub phase: Phase,
    pub remaining_secs: u32,
    pub running: bool,
    /// Work sessions completed since the last reset
    pub completed_sessions: u32,
}

impl Default for PomodoroState {
    fn default() -> Self {
        Self::with_settings(PomodoroSettings::default())
    }
}

impl PomodoroState {
    pub fn with_settings(settings: PomodoroSettings) -> Self {
        let remaining_secs = settings.duration_secs(Phase::Work);
        Self {
            settings,
            phase: Phase::Work,
            remaining_secs,
            running: false,
            completed_sessions: 0,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Rewind the current phase to its full length.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_secs = self.settings.duration_secs(self.phase);
    }

    /// Back to a fresh focus session with the session counter cleared.
    pub fn reset_all(&mut self) {
        *self = Self::with_settings(self.settings.clone());
    }

    /// Jump to the next phase without counting the current one.
    pub fn skip(&mut self) -> Phase {
        let next = self.following_phase(false);
        self.enter(next);
        self.running = false;
        next
    }

    pub fn update_settings(&mut self, settings: PomodoroSettings) -> DeskResult<()> {
        settings.validate()?;
        self.settings = settings;
        if !self.running {
            self.remaining_secs = self.settings.duration_secs(self.phase);
        }
        Ok(())
    }

    pub fn tick(&mut self, elapsed_secs: u32) -> Option<PhaseCompleted> {
        if !self.running || elapsed_secs == 0 {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(elapsed_secs);
        if self.remaining_secs > 0 {
            return None;
        }

        let finished = self.phase;
        if finished == Phase::Work {
            self.completed_sessions += 1;
        }
        let next = self.following_phase(true);
        self.enter(next);
        self.running = self.settings.auto_start;
        tracing::debug!(?finished, ?next, "Pomodoro phase completed");
        Some(PhaseCompleted { finished, next })
    }

    pub fn remaining_label(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }

    /// Fraction of the current phase already elapsed.
    pub fn progress(&self) -> f64 {
        let total = self.settings.duration_secs(self.phase);
        if total == 0 {
            return 0.0;
        }
        1.0 - f64::from(self.remaining_secs) / f64::from(total)
    }

    fn following_phase(&self, work_counted: bool) -> Phase {
        match self.phase {
            // Only a completed session can earn the long break.
            Phase::Work if work_counted => {
                let every = self.settings.sessions_until_long_break.max(1);
                if self.completed_sessions > 0 && self.completed_sessions % every == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::Work => Phase::ShortBreak,
            Phase::ShortBreak | Phase::LongBreak => Phase::Work,
        }
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.remaining_secs = self.settings.duration_secs(phase);
    }
}
