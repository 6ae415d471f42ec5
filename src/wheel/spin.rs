use std::{thread, time::Duration};

use log::debug;
use rand::Rng;

use crate::errors::LunchwheelError;

use super::{RenderSurface, WheelModel};

/// Fixed animation step.
pub const TICK_MS: u64 = 30;

const MIN_VELOCITY_DEG_PER_TICK: f64 = 10.;
const MAX_VELOCITY_DEG_PER_TICK: f64 = 20.;
const MIN_SPIN_DURATION_MS: u64 = 3000;
const MAX_SPIN_DURATION_MS: u64 = 6000;

/// A single spin in progress. Created by `spin()`, dropped on the tick where
/// the elapsed time reaches the sampled total duration.
#[derive(Debug)]
struct SpinSession {
    start_velocity_deg_per_tick: f64,
    elapsed_ms: u64,
    total_duration_ms: u64,
}

/// What one animation tick produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinOutcome {
    /// No spin is active; the tick was a no-op.
    Idle,
    /// The wheel is still turning.
    Spinning,
    /// The spin finished on this tick. Carries the winning segment index.
    Finished(usize),
}

/// Tick-driven state machine for the spin animation: Idle -> Spinning ->
/// Idle, at most one session at a time. The caller drives `tick()` at the
/// fixed rate (or uses `run_to_completion`, which sleeps between ticks), so
/// tests advance the machine without wall-clock delays.
pub struct SpinController<R: RenderSurface> {
    model: WheelModel,
    renderer: R,
    session: Option<SpinSession>,
}

impl<R: RenderSurface> SpinController<R> {
    pub fn new(model: WheelModel, renderer: R) -> Self {
        Self {
            model,
            renderer,
            session: None,
        }
    }

    pub fn model(&self) -> &WheelModel {
        &self.model
    }

    pub fn is_spinning(&self) -> bool {
        self.session.is_some()
    }

    /// Milliseconds elapsed in the active session, if any.
    pub fn elapsed_ms(&self) -> Option<u64> {
        self.session.as_ref().map(|s| s.elapsed_ms)
    }

    /// Starts a new spin with a random velocity and total duration. Rejected
    /// while a session is active; the running session is never preempted.
    pub fn spin(&mut self, rng: &mut impl Rng) -> Result<(), LunchwheelError> {
        if self.session.is_some() {
            return Err(LunchwheelError::AlreadySpinning);
        }
        let session = SpinSession {
            start_velocity_deg_per_tick: rng
                .random_range(MIN_VELOCITY_DEG_PER_TICK..MAX_VELOCITY_DEG_PER_TICK),
            elapsed_ms: 0,
            total_duration_ms: rng.random_range(MIN_SPIN_DURATION_MS..MAX_SPIN_DURATION_MS),
        };
        debug!(
            "spin started: {:.1} deg/tick for {}ms",
            session.start_velocity_deg_per_tick, session.total_duration_ms
        );
        self.session = Some(session);
        Ok(())
    }

    /// Advances the animation by one fixed step. The terminal tick stops the
    /// wheel in place without rotating it further and reports the segment
    /// facing the pointer.
    pub fn tick(&mut self) -> SpinOutcome {
        let Some(session) = self.session.as_mut() else {
            return SpinOutcome::Idle;
        };
        session.elapsed_ms += TICK_MS;
        if session.elapsed_ms >= session.total_duration_ms {
            self.session = None;
            let index = self.model.winning_index();
            debug!("spin finished on segment {index}");
            return SpinOutcome::Finished(index);
        }
        // constant velocity per tick; the only randomness in the animation
        // is the sampled total duration
        let delta = session.start_velocity_deg_per_tick;
        self.model.advance_angle(delta);
        self.renderer.render(&self.model);
        SpinOutcome::Spinning
    }

    /// Drives a full spin on the calling thread, sleeping the tick period
    /// between steps.
    pub fn run_to_completion(&mut self, rng: &mut impl Rng) -> Result<usize, LunchwheelError> {
        self.spin(rng)?;
        loop {
            thread::sleep(Duration::from_millis(TICK_MS));
            if let SpinOutcome::Finished(index) = self.tick() {
                return Ok(index);
            }
        }
    }
}
