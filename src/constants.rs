use std::f64::consts::FRAC_PI_2;

/// Angle of the fixed pointer: 12 o'clock. Arcs are laid out clockwise
/// from here.
pub const WHEEL_START_ANGLE: f64 = -FRAC_PI_2;

/// Weight applied when a chore has a missing or non-positive weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

// Spin feel, tuned in the original client. Velocity is radians per
// animation step.
pub const SPIN_MIN_VELOCITY: f64 = 0.45;
pub const SPIN_MAX_VELOCITY: f64 = 0.80;
pub const SPIN_MIN_FRICTION: f64 = 0.985;
pub const SPIN_MAX_FRICTION: f64 = 0.995;
pub const SPIN_STOP_THRESHOLD: f64 = 0.005;

pub const MAX_CHORE_TITLE_LENGTH: usize = 80;
pub const MAX_DISPLAY_NAME_LENGTH: usize = 32;

pub const EMPTY_WHEEL_ERROR: &str = "No chores available. Adults: seed or add chores.";
pub const SPIN_LOCKED_ERROR: &str = "Finish your last task first.";
pub const INVALID_TITLE_ERROR: &str = "Chore titles must be 1-80 printable characters.";
pub const INVALID_NAME_ERROR: &str =
    "Display names must be 1-32 letters, digits, spaces, dashes or underscores.";
