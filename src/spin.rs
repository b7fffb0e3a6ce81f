use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    SPIN_MAX_FRICTION, SPIN_MAX_VELOCITY, SPIN_MIN_FRICTION, SPIN_MIN_VELOCITY,
    SPIN_STOP_THRESHOLD,
};
use crate::error::SpinError;
use crate::wheel::{build_layout, Candidate, WheelLayout};

/// Lifecycle of one spin-to-submit cycle.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinState {
    /// No spin in progress; a new spin may be requested.
    Idle,
    /// The animation loop is running; the host calls `step` each frame.
    Spinning,
    /// The wheel has stopped and a candidate was chosen, but no
    /// assignment has been recorded yet.
    Settled,
    /// An assignment record exists for the chosen candidate; further
    /// spins are refused until `release`.
    Locked,
}

/// Spin feel parameters. The defaults are the ranges tuned in the
/// original client; velocity is radians per animation step.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinConfig {
    pub min_velocity: f64,
    pub max_velocity: f64,
    pub min_friction: f64,
    pub max_friction: f64,
    pub stop_threshold: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            min_velocity: SPIN_MIN_VELOCITY,
            max_velocity: SPIN_MAX_VELOCITY,
            min_friction: SPIN_MIN_FRICTION,
            max_friction: SPIN_MAX_FRICTION,
            stop_threshold: SPIN_STOP_THRESHOLD,
        }
    }
}

/// Fired exactly once per spin, when the wheel settles on a slice.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChosenEvent {
    pub candidate_id: String,
    pub label: String,
    pub weight: f64,
}

/// What one animation step produced. The host repaints the wheel rotated
/// by `angle` (and may play a tick effect) after every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepFrame {
    pub angle: f64,
    pub velocity: f64,
    pub settled: bool,
}

/// One spin-to-submit state machine, exclusively owned by the UI widget
/// that created it. The host drives the animation by calling `step` at
/// its own cadence; this type performs no I/O and knows nothing about
/// timing sources.
pub struct SpinSession {
    config: SpinConfig,
    state: SpinState,
    layout: WheelLayout,
    angle: f64,
    velocity: f64,
    friction: f64,
    chosen: Option<Candidate>,
    on_chosen: Option<Box<dyn FnMut(&ChosenEvent)>>,
}

impl fmt::Debug for SpinSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinSession")
            .field("state", &self.state)
            .field("angle", &self.angle)
            .field("velocity", &self.velocity)
            .field("chosen", &self.chosen)
            .finish()
    }
}

impl Default for SpinSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinSession {
    pub fn new() -> Self {
        Self::with_config(SpinConfig::default())
    }

    pub fn with_config(config: SpinConfig) -> Self {
        Self {
            config,
            state: SpinState::Idle,
            layout: WheelLayout::default(),
            angle: 0.0,
            velocity: 0.0,
            friction: 0.0,
            chosen: None,
            on_chosen: None,
        }
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    /// Cumulative rotation in radians; grows monotonically while
    /// Spinning.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn chosen(&self) -> Option<&Candidate> {
        self.chosen.as_ref()
    }

    /// Registers the single "chosen" subscriber. The host subscribes
    /// once and reacts by recording the assignment remotely, then
    /// calling `confirm_locked`.
    pub fn on_chosen(&mut self, callback: impl FnMut(&ChosenEvent) + 'static) {
        self.on_chosen = Some(Box::new(callback));
    }

    /// Starts a spin over a snapshot of `candidates`. Only valid from
    /// Idle; the lock state exists precisely so a member cannot pile up
    /// a second assignment while one is outstanding.
    pub fn request_spin(&mut self, candidates: &[Candidate]) -> Result<(), SpinError> {
        if self.state != SpinState::Idle {
            log::warn!("spin requested in {:?} state, refusing", self.state);
            return Err(SpinError::InvalidState {
                operation: "request_spin",
                state: self.state,
            });
        }
        if candidates.is_empty() {
            return Err(SpinError::InvalidArgument("empty candidate set"));
        }

        let mut rng = rand::thread_rng();
        self.layout = build_layout(candidates);
        self.angle = 0.0;
        self.velocity = rng.gen_range(self.config.min_velocity..self.config.max_velocity);
        self.friction = rng.gen_range(self.config.min_friction..self.config.max_friction);
        self.chosen = None;
        self.state = SpinState::Spinning;
        log::info!(
            "Spin started over {} candidates (v0={:.3}, friction={:.4})",
            candidates.len(),
            self.velocity,
            self.friction
        );
        Ok(())
    }

    /// Advances the spin by one animation frame. Once the velocity drops
    /// below the stop threshold the final angle is resolved against the
    /// fixed 12-o'clock pointer (the wheel rotates under it, so the
    /// pointer reads the negated angle), the session settles, and the
    /// "chosen" subscriber fires exactly once.
    pub fn step(&mut self) -> Result<StepFrame, SpinError> {
        if self.state != SpinState::Spinning {
            log::warn!("step called in {:?} state, refusing", self.state);
            return Err(SpinError::InvalidState {
                operation: "step",
                state: self.state,
            });
        }

        self.angle += self.velocity;
        self.velocity *= self.friction;

        if self.velocity >= self.config.stop_threshold {
            return Ok(StepFrame {
                angle: self.angle,
                velocity: self.velocity,
                settled: false,
            });
        }

        self.chosen = self.layout.resolve_angle(-self.angle).cloned();
        self.state = SpinState::Settled;
        if let Some(candidate) = self.chosen.clone() {
            log::info!("Spin settled on {:?} at angle {:.3}", candidate.label, self.angle);
            let event = ChosenEvent {
                candidate_id: candidate.id,
                label: candidate.label,
                weight: candidate.weight,
            };
            if let Some(callback) = self.on_chosen.as_mut() {
                callback(&event);
            }
        }
        Ok(StepFrame {
            angle: self.angle,
            velocity: self.velocity,
            settled: true,
        })
    }

    /// Records that an external assignment now exists for the chosen
    /// candidate. Only valid from Settled.
    pub fn confirm_locked(&mut self) -> Result<(), SpinError> {
        if self.state != SpinState::Settled {
            log::warn!("confirm_locked called in {:?} state, refusing", self.state);
            return Err(SpinError::InvalidState {
                operation: "confirm_locked",
                state: self.state,
            });
        }
        self.state = SpinState::Locked;
        Ok(())
    }

    /// Returns the session to Idle and clears the chosen candidate.
    /// Valid from Locked (assignment submitted), Settled (abandoned
    /// before an assignment was recorded) or Idle (no-op).
    pub fn release(&mut self) -> Result<(), SpinError> {
        match self.state {
            SpinState::Idle => Ok(()),
            SpinState::Settled | SpinState::Locked => {
                self.state = SpinState::Idle;
                self.chosen = None;
                Ok(())
            }
            SpinState::Spinning => {
                log::warn!("release called while spinning, refusing");
                Err(SpinError::InvalidState {
                    operation: "release",
                    state: self.state,
                })
            }
        }
    }

    /// Aborts a running spin, discarding the candidate snapshot. The
    /// "chosen" subscriber never fires for a cancelled spin.
    pub fn cancel(&mut self) -> Result<(), SpinError> {
        if self.state != SpinState::Spinning {
            return Err(SpinError::InvalidState {
                operation: "cancel",
                state: self.state,
            });
        }
        self.state = SpinState::Idle;
        self.chosen = None;
        self.velocity = 0.0;
        log::info!("Spin cancelled before settling");
        Ok(())
    }
}
