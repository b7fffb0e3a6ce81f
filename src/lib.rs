//! Shared ChoreSpin game logic: the weighted chore wheel, the spin
//! session state machine, and the types the client exchanges with the
//! household service.

pub mod chore;
pub mod constants;
pub mod error;
pub mod spin;
pub mod validation;
pub mod wheel;

pub use error::SpinError;
pub use spin::{ChosenEvent, SpinConfig, SpinSession, SpinState};
pub use wheel::{build_layout, draw_random, Candidate, WheelLayout};
