//! Visibility trigger policies
//!
//! A trigger turns host input into show/hide/toggle commands. Two policies
//! exist and are deliberately kept apart:
//!
//! - [`KeyTogglePolicy`] is edge-triggered: one toggle per key release.
//! - [`OrientationThresholdPolicy`] is level-triggered: every tick re-asserts
//!   shown or hidden from the current pitch.

use crate::error::ConsoleError;

/// Input sampled from the host each frame or event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerInput {
    /// A key was released
    KeyReleased(char),
    /// Periodic sample of the view pitch; negative values look downward
    Tick { pitch_degrees: f32 },
}

/// What the console should do with its visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityCommand {
    Show,
    Hide,
    Toggle,
}

/// Strategy mapping trigger input to visibility commands
pub trait VisibilityTrigger: Send {
    /// Inspect one input; `None` leaves visibility alone
    fn evaluate(&mut self, input: &TriggerInput) -> Option<VisibilityCommand>;
}

impl<T: VisibilityTrigger + ?Sized> VisibilityTrigger for Box<T> {
    fn evaluate(&mut self, input: &TriggerInput) -> Option<VisibilityCommand> {
        (**self).evaluate(input)
    }
}

/// Toggle once per release of a designated key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTogglePolicy {
    key: char,
}

impl KeyTogglePolicy {
    pub const DEFAULT_KEY: char = '`';

    pub fn new(key: char) -> Self {
        Self { key }
    }

    pub fn key(&self) -> char {
        self.key
    }
}

impl Default for KeyTogglePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl VisibilityTrigger for KeyTogglePolicy {
    fn evaluate(&mut self, input: &TriggerInput) -> Option<VisibilityCommand> {
        match input {
            TriggerInput::KeyReleased(key) if *key == self.key => Some(VisibilityCommand::Toggle),
            _ => None,
        }
    }
}

/// Show while the view is tilted down past `show_angle`, hide otherwise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationThresholdPolicy {
    show_angle: f32,
}

impl OrientationThresholdPolicy {
    pub const DEFAULT_SHOW_ANGLE: f32 = 30.0;

    /// `show_angle` is in degrees and must lie in `0..=90`
    pub fn new(show_angle: f32) -> Result<Self, ConsoleError> {
        if !(0.0..=90.0).contains(&show_angle) {
            return Err(ConsoleError::InvalidShowAngle(show_angle));
        }
        Ok(Self { show_angle })
    }

    pub fn show_angle(&self) -> f32 {
        self.show_angle
    }
}

impl Default for OrientationThresholdPolicy {
    fn default() -> Self {
        Self {
            show_angle: Self::DEFAULT_SHOW_ANGLE,
        }
    }
}

impl VisibilityTrigger for OrientationThresholdPolicy {
    fn evaluate(&mut self, input: &TriggerInput) -> Option<VisibilityCommand> {
        match input {
            TriggerInput::Tick { pitch_degrees } if *pitch_degrees < -self.show_angle => {
                Some(VisibilityCommand::Show)
            }
            TriggerInput::Tick { .. } => Some(VisibilityCommand::Hide),
            TriggerInput::KeyReleased(_) => None,
        }
    }
}
