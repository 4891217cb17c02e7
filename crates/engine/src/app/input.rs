/// Logical controls for the exploration scenes. Movement actions are
/// level-sampled each tick; `Attack` and `SwitchScene` are consumed as
/// one-tick press edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Attack,
    SwitchScene,
    Quit,
}

const ACTION_COUNT: usize = 7;

/// Held state plus a press edge per action. A repeated press while the key
/// stays down arms no new edge; an armed edge survives until drained, so a
/// press-and-release between two ticks is never lost.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ActionStates {
    down: [bool; ACTION_COUNT],
    pressed: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set(&mut self, action: InputAction, is_down: bool) {
        let index = action.index();
        if is_down && !self.down[index] {
            self.pressed[index] = true;
        }
        self.down[index] = is_down;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }

    pub(crate) fn take_pressed(&mut self, action: InputAction) -> bool {
        std::mem::take(&mut self.pressed[action.index()])
    }
}

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::MoveUp => 0,
            InputAction::MoveDown => 1,
            InputAction::MoveLeft => 2,
            InputAction::MoveRight => 3,
            InputAction::Attack => 4,
            InputAction::SwitchScene => 5,
            InputAction::Quit => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_arms_edge_once_until_released() {
        let mut states = ActionStates::default();

        states.set(InputAction::Attack, true);
        assert!(states.take_pressed(InputAction::Attack));

        // Key-repeat events while held arm no new edge.
        states.set(InputAction::Attack, true);
        assert!(!states.take_pressed(InputAction::Attack));

        states.set(InputAction::Attack, false);
        states.set(InputAction::Attack, true);
        assert!(states.take_pressed(InputAction::Attack));
    }

    #[test]
    fn edge_survives_release_until_drained() {
        let mut states = ActionStates::default();
        states.set(InputAction::SwitchScene, true);
        states.set(InputAction::SwitchScene, false);

        assert!(!states.is_down(InputAction::SwitchScene));
        assert!(states.take_pressed(InputAction::SwitchScene));
        assert!(!states.take_pressed(InputAction::SwitchScene));
    }

    #[test]
    fn actions_track_independently() {
        let mut states = ActionStates::default();
        states.set(InputAction::MoveUp, true);
        states.set(InputAction::MoveLeft, true);
        states.set(InputAction::MoveLeft, false);

        assert!(states.is_down(InputAction::MoveUp));
        assert!(!states.is_down(InputAction::MoveLeft));
        assert!(!states.is_down(InputAction::MoveDown));
    }
}
