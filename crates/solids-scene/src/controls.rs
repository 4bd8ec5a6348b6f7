//! Keyboard controls for the camera and the displayed object
//!
//! Letter keys drive one action unshifted and the opposite action with
//! shift held, so `Y` and `shift+Y` yaw in opposite directions.

use std::collections::{HashMap, HashSet};

use glam::Vec3;
use winit::keyboard::KeyCode;

use crate::config::ControlConfig;

/// Actions that can be held down to change the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    /// Shift the look target toward +X (shift+Y by default)
    YawLeft,
    /// Shift the look target toward -X (Y by default)
    YawRight,
    /// Shift the look target up (shift+P by default)
    PitchUp,
    /// Shift the look target down (P by default)
    PitchDown,
    /// Tilt the up vector toward +X (shift+R by default)
    RollLeft,
    /// Tilt the up vector toward -X (R by default)
    RollRight,
    /// Move the object away from the camera (W by default)
    MoveForward,
    /// Move the object toward the camera (S by default)
    MoveBackward,
    /// Move the object toward +X (A by default)
    MoveLeft,
    /// Move the object toward -X (D by default)
    MoveRight,
}

impl ControlAction {
    /// Camera look target offset for one tick
    pub fn target_offset(&self, config: &ControlConfig) -> Vec3 {
        match self {
            ControlAction::YawLeft => Vec3::X * config.look_step,
            ControlAction::YawRight => Vec3::NEG_X * config.look_step,
            ControlAction::PitchUp => Vec3::Y * config.look_step,
            ControlAction::PitchDown => Vec3::NEG_Y * config.look_step,
            _ => Vec3::ZERO,
        }
    }

    /// Camera roll change for one tick, in radians
    pub fn roll_offset(&self, config: &ControlConfig) -> f32 {
        match self {
            ControlAction::RollLeft => config.roll_step,
            ControlAction::RollRight => -config.roll_step,
            _ => 0.0,
        }
    }

    /// Object translation for one tick
    pub fn object_offset(&self, config: &ControlConfig) -> Vec3 {
        match self {
            ControlAction::MoveForward => Vec3::Z * config.move_step,
            ControlAction::MoveBackward => Vec3::NEG_Z * config.move_step,
            ControlAction::MoveLeft => Vec3::X * config.move_step,
            ControlAction::MoveRight => Vec3::NEG_X * config.move_step,
            _ => Vec3::ZERO,
        }
    }
}

/// Mapping from (key, shift held) to actions
#[derive(Debug, Clone)]
pub struct ControlBindings {
    bindings: HashMap<(KeyCode, bool), ControlAction>,
}

impl Default for ControlBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(KeyCode::KeyY, true, ControlAction::YawLeft);
        bindings.bind(KeyCode::KeyY, false, ControlAction::YawRight);
        bindings.bind(KeyCode::KeyP, true, ControlAction::PitchUp);
        bindings.bind(KeyCode::KeyP, false, ControlAction::PitchDown);
        bindings.bind(KeyCode::KeyR, true, ControlAction::RollLeft);
        bindings.bind(KeyCode::KeyR, false, ControlAction::RollRight);
        // Movement only without shift
        bindings.bind(KeyCode::KeyW, false, ControlAction::MoveForward);
        bindings.bind(KeyCode::KeyS, false, ControlAction::MoveBackward);
        bindings.bind(KeyCode::KeyA, false, ControlAction::MoveLeft);
        bindings.bind(KeyCode::KeyD, false, ControlAction::MoveRight);
        bindings
    }
}

impl ControlBindings {
    /// Create bindings with no keys mapped
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind a key (with or without shift) to an action
    pub fn bind(&mut self, key: KeyCode, shift: bool, action: ControlAction) {
        self.bindings.insert((key, shift), action);
    }

    /// Get the action for a key press
    pub fn action_for(&self, key: KeyCode, shift: bool) -> Option<ControlAction> {
        self.bindings.get(&(key, shift)).copied()
    }

    /// All actions a key can trigger, shifted or not
    pub fn actions_for_key(&self, key: KeyCode) -> impl Iterator<Item = ControlAction> + '_ {
        [false, true]
            .into_iter()
            .filter_map(move |shift| self.action_for(key, shift))
    }

    /// Actions bound with shift held
    pub fn shifted_actions(&self) -> impl Iterator<Item = ControlAction> + '_ {
        self.bindings
            .iter()
            .filter(|((_, shift), _)| *shift)
            .map(|(_, &action)| action)
    }
}

/// Set of actions currently held down
#[derive(Debug, Clone, Default)]
pub struct ControlState {
    held: HashSet<ControlAction>,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: ControlAction) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: ControlAction) {
        self.held.remove(&action);
    }

    pub fn is_held(&self, action: ControlAction) -> bool {
        self.held.contains(&action)
    }

    /// Iterate over held actions
    pub fn held(&self) -> impl Iterator<Item = ControlAction> + '_ {
        self.held.iter().copied()
    }

    /// Handle a key press event
    pub fn key_pressed(&mut self, bindings: &ControlBindings, key: KeyCode, shift: bool) {
        if let Some(action) = bindings.action_for(key, shift) {
            self.press(action);
        }
    }

    /// Handle a key release event
    ///
    /// Releasing any bound key also releases every shifted action. Shift
    /// may be let go before its letter key, and the letter's release then
    /// arrives unshifted or for a different key.
    pub fn key_released(&mut self, bindings: &ControlBindings, key: KeyCode) {
        let actions: Vec<_> = bindings.actions_for_key(key).collect();
        if actions.is_empty() {
            return;
        }
        for action in actions.into_iter().chain(bindings.shifted_actions()) {
            self.release(action);
        }
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_selects_the_opposite_direction() {
        let bindings = ControlBindings::default();
        assert_eq!(
            bindings.action_for(KeyCode::KeyY, true),
            Some(ControlAction::YawLeft)
        );
        assert_eq!(
            bindings.action_for(KeyCode::KeyY, false),
            Some(ControlAction::YawRight)
        );
        assert_eq!(bindings.action_for(KeyCode::KeyQ, false), None);
    }

    #[test]
    fn test_movement_needs_unshifted_keys() {
        let bindings = ControlBindings::default();
        assert_eq!(
            bindings.action_for(KeyCode::KeyW, false),
            Some(ControlAction::MoveForward)
        );
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD] {
            assert_eq!(bindings.action_for(key, true), None);
        }

        let mut state = ControlState::new();
        state.key_pressed(&bindings, KeyCode::KeyA, true);
        assert_eq!(state.held().count(), 0);
    }

    #[test]
    fn test_any_release_clears_shifted_actions() {
        let bindings = ControlBindings::default();
        let mut state = ControlState::new();

        state.key_pressed(&bindings, KeyCode::KeyY, true);
        state.key_pressed(&bindings, KeyCode::KeyP, true);
        state.key_pressed(&bindings, KeyCode::KeyR, false);
        state.key_pressed(&bindings, KeyCode::KeyW, false);

        state.key_released(&bindings, KeyCode::KeyW);
        assert!(!state.is_held(ControlAction::MoveForward));
        assert!(!state.is_held(ControlAction::YawLeft));
        assert!(!state.is_held(ControlAction::PitchUp));
        // Unshifted actions of other keys stay held
        assert!(state.is_held(ControlAction::RollRight));

        // Unbound keys change nothing
        state.key_pressed(&bindings, KeyCode::KeyY, true);
        state.key_released(&bindings, KeyCode::KeyQ);
        assert!(state.is_held(ControlAction::YawLeft));
    }

    #[test]
    fn test_releasing_a_key_clears_both_variants() {
        let bindings = ControlBindings::default();
        let mut state = ControlState::new();

        state.key_pressed(&bindings, KeyCode::KeyR, true);
        state.key_pressed(&bindings, KeyCode::KeyD, false);
        assert!(state.is_held(ControlAction::RollLeft));

        // Shift released first, then the key reports unshifted
        state.key_released(&bindings, KeyCode::KeyR);
        assert!(!state.is_held(ControlAction::RollLeft));
        assert!(!state.is_held(ControlAction::RollRight));
        assert!(state.is_held(ControlAction::MoveRight));

        state.clear();
        assert_eq!(state.held().count(), 0);
    }

    #[test]
    fn test_offsets_use_configured_steps() {
        let config = ControlConfig::default();
        assert_eq!(
            ControlAction::YawLeft.target_offset(&config),
            Vec3::new(0.1, 0.0, 0.0)
        );
        assert_eq!(ControlAction::RollRight.roll_offset(&config), -0.05);
        assert_eq!(
            ControlAction::MoveBackward.object_offset(&config),
            Vec3::new(0.0, 0.0, -0.03)
        );
        assert_eq!(ControlAction::MoveLeft.target_offset(&config), Vec3::ZERO);
    }
}
