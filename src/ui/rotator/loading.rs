// SPDX-License-Identifier: MPL-2.0
//! Loading state sub-component with animated spinner.

use std::time::{Duration, Instant};

/// Time after which a preload still in flight is reported as slow.
pub const LOADING_TIMEOUT: Duration = Duration::from_secs(10);

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct State {
    started_at: Option<Instant>,
    spinner_rotation: f32,
    timeout_reported: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Start,
    Stop,
    SpinnerTick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The preload exceeded [`LOADING_TIMEOUT`]. Emitted once per load.
    TimedOut,
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        self.handle_at(msg, Instant::now())
    }

    fn handle_at(&mut self, msg: Message, now: Instant) -> Effect {
        match msg {
            Message::Start => {
                self.started_at = Some(now);
                self.spinner_rotation = 0.0;
                self.timeout_reported = false;
                Effect::None
            }
            Message::Stop => {
                self.started_at = None;
                self.spinner_rotation = 0.0;
                self.timeout_reported = false;
                Effect::None
            }
            Message::SpinnerTick => {
                let Some(started) = self.started_at else {
                    return Effect::None;
                };
                self.spinner_rotation =
                    (self.spinner_rotation + SPINNER_SPEED) % std::f32::consts::TAU;
                if !self.timeout_reported && now.duration_since(started) > LOADING_TIMEOUT {
                    self.timeout_reported = true;
                    return Effect::TimedOut;
                }
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.started_at.is_some()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    #[must_use]
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_stop_toggle_loading() {
        let mut state = State::default();
        assert!(!state.is_loading());

        state.handle(Message::Start);
        assert!(state.is_loading());
        assert!(state.started_at().is_some());

        state.handle(Message::Stop);
        assert!(!state.is_loading());
        assert_eq!(state.spinner_rotation(), 0.0);
    }

    #[test]
    fn spinner_tick_advances_only_while_loading() {
        let mut state = State::default();
        state.handle(Message::SpinnerTick);
        assert_eq!(state.spinner_rotation(), 0.0);

        state.handle(Message::Start);
        state.handle(Message::SpinnerTick);
        assert!(state.spinner_rotation() > 0.0);
    }

    #[test]
    fn timeout_is_reported_once() {
        let mut state = State::default();
        let start = Instant::now();
        state.handle_at(Message::Start, start);

        let late = start + LOADING_TIMEOUT + Duration::from_secs(1);
        assert_eq!(state.handle_at(Message::SpinnerTick, late), Effect::TimedOut);
        assert_eq!(state.handle_at(Message::SpinnerTick, late), Effect::None);
        assert!(state.is_loading());
    }

    #[test]
    fn no_timeout_before_deadline() {
        let mut state = State::default();
        let start = Instant::now();
        state.handle_at(Message::Start, start);
        let early = start + Duration::from_secs(1);
        assert_eq!(state.handle_at(Message::SpinnerTick, early), Effect::None);
    }
}
