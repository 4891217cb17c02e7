/// Continuous player position in world units, bounded to
/// `[-WORLD_BOUND, WORLD_BOUND]` on both axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct WorldPosition {
    pub(crate) x: f64,
    pub(crate) z: f64,
}

impl WorldPosition {
    pub(crate) fn distance_to(&self, other: WorldPosition) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }
}

/// One simulation step of a movement strategy. Each scene binds exactly one
/// strategy; the directional mover ignores any stored target and the
/// target-seek mover ignores held directions.
pub(crate) trait MovementStrategy {
    fn step(&mut self, position: WorldPosition, held: (i32, i32), dt_seconds: f64)
        -> WorldPosition;
}

#[derive(Debug, Default)]
pub(crate) struct DirectionalMover;

impl MovementStrategy for DirectionalMover {
    // Held axes integrate independently; diagonal input is intentionally not
    // renormalized, so diagonal travel is faster than axis-aligned travel.
    fn step(
        &mut self,
        position: WorldPosition,
        held: (i32, i32),
        dt_seconds: f64,
    ) -> WorldPosition {
        let step = MOVE_SPEED_UNITS_PER_SECOND * dt_seconds;
        clamp_to_bounds(WorldPosition {
            x: position.x + held.0 as f64 * step,
            z: position.z + held.1 as f64 * step,
        })
    }
}

#[derive(Debug, Default)]
pub(crate) struct TargetSeekMover {
    target: Option<WorldPosition>,
}

impl TargetSeekMover {
    pub(crate) fn set_target(&mut self, target: WorldPosition) {
        self.target = Some(target);
    }

    pub(crate) fn target(&self) -> Option<WorldPosition> {
        self.target
    }

    pub(crate) fn clear_target(&mut self) {
        self.target = None;
    }
}

impl MovementStrategy for TargetSeekMover {
    fn step(
        &mut self,
        position: WorldPosition,
        _held: (i32, i32),
        dt_seconds: f64,
    ) -> WorldPosition {
        let Some(target) = self.target else {
            return position;
        };
        let (next, arrived) =
            step_toward(position, target, MOVE_SPEED_UNITS_PER_SECOND, dt_seconds);
        if arrived {
            self.target = None;
        }
        clamp_to_bounds(next)
    }
}

/// Double-click detection over the session clock: returns true when this
/// click lands within the confirmation window of the previous one. A click
/// outside the window starts a fresh timing window.
#[derive(Debug, Default)]
pub(crate) struct ClickTracker {
    last_click_at_seconds: Option<f64>,
}

impl ClickTracker {
    pub(crate) fn register_click(&mut self, now_seconds: f64) -> bool {
        if let Some(last) = self.last_click_at_seconds {
            if now_seconds - last <= DOUBLE_CLICK_WINDOW_SECONDS {
                self.last_click_at_seconds = None;
                return true;
            }
        }
        self.last_click_at_seconds = Some(now_seconds);
        false
    }
}
