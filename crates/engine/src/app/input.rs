use winit::keyboard::{KeyCode, PhysicalKey};

/// Semantic input the runtime understands. WASD and the arrow keys map to
/// movement, Escape to `Quit`; every other key is dropped at the window
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Quit,
}

const ACTION_COUNT: usize = 5;

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::MoveUp => 0,
            InputAction::MoveDown => 1,
            InputAction::MoveLeft => 2,
            InputAction::MoveRight => 3,
            InputAction::Quit => 4,
        }
    }
}

/// Held/released flags per action; the full held-key snapshot a scene
/// recomputes its movement intent from.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionStates {
    down: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }
}

/// Engine-level event delivered to the current scene, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The window was asked to close.
    Quit,
    KeyDown(InputAction),
    KeyUp(InputAction),
}

/// A quit request or an escape press stops the loop after the current drain
/// completes; drained events still reach the scene first.
pub(crate) fn is_stop_event(event: &Event) -> bool {
    matches!(event, Event::Quit | Event::KeyDown(InputAction::Quit))
}

pub(crate) fn action_for_physical_key(key: PhysicalKey) -> Option<InputAction> {
    match key {
        PhysicalKey::Code(KeyCode::KeyW) | PhysicalKey::Code(KeyCode::ArrowUp) => {
            Some(InputAction::MoveUp)
        }
        PhysicalKey::Code(KeyCode::KeyS) | PhysicalKey::Code(KeyCode::ArrowDown) => {
            Some(InputAction::MoveDown)
        }
        PhysicalKey::Code(KeyCode::KeyA) | PhysicalKey::Code(KeyCode::ArrowLeft) => {
            Some(InputAction::MoveLeft)
        }
        PhysicalKey::Code(KeyCode::KeyD) | PhysicalKey::Code(KeyCode::ArrowRight) => {
            Some(InputAction::MoveRight)
        }
        PhysicalKey::Code(KeyCode::Escape) => Some(InputAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_arrow_keys_map_to_movement_actions() {
        let pairs = [
            (KeyCode::KeyW, InputAction::MoveUp),
            (KeyCode::ArrowUp, InputAction::MoveUp),
            (KeyCode::KeyS, InputAction::MoveDown),
            (KeyCode::ArrowDown, InputAction::MoveDown),
            (KeyCode::KeyA, InputAction::MoveLeft),
            (KeyCode::ArrowLeft, InputAction::MoveLeft),
            (KeyCode::KeyD, InputAction::MoveRight),
            (KeyCode::ArrowRight, InputAction::MoveRight),
            (KeyCode::Escape, InputAction::Quit),
        ];
        for (code, expected) in pairs {
            assert_eq!(
                action_for_physical_key(PhysicalKey::Code(code)),
                Some(expected)
            );
        }
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(action_for_physical_key(PhysicalKey::Code(KeyCode::KeyQ)), None);
        assert_eq!(action_for_physical_key(PhysicalKey::Code(KeyCode::Space)), None);
    }

    #[test]
    fn action_states_track_set_and_release() {
        let mut states = ActionStates::default();
        assert!(!states.is_down(InputAction::MoveLeft));

        states.set(InputAction::MoveLeft, true);
        states.set(InputAction::MoveDown, true);
        assert!(states.is_down(InputAction::MoveLeft));
        assert!(states.is_down(InputAction::MoveDown));
        assert!(!states.is_down(InputAction::MoveRight));

        states.set(InputAction::MoveLeft, false);
        assert!(!states.is_down(InputAction::MoveLeft));
        assert!(states.is_down(InputAction::MoveDown));
    }

    #[test]
    fn quit_and_escape_down_are_stop_events() {
        assert!(is_stop_event(&Event::Quit));
        assert!(is_stop_event(&Event::KeyDown(InputAction::Quit)));
        assert!(!is_stop_event(&Event::KeyUp(InputAction::Quit)));
        assert!(!is_stop_event(&Event::KeyDown(InputAction::MoveUp)));
    }
}
