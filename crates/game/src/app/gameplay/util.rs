/// Collapses the held direction actions into axis deltas in {-1, 0, 1}.
/// Opposing keys cancel; both axes may be active at once.
pub(crate) fn movement_delta(input: &InputSnapshot) -> (i32, i32) {
    let mut dx = 0;
    let mut dz = 0;
    if input.is_down(InputAction::MoveUp) {
        dz -= 1;
    }
    if input.is_down(InputAction::MoveDown) {
        dz += 1;
    }
    if input.is_down(InputAction::MoveLeft) {
        dx -= 1;
    }
    if input.is_down(InputAction::MoveRight) {
        dx += 1;
    }
    (dx, dz)
}

pub(crate) fn clamp_to_bounds(position: WorldPosition) -> WorldPosition {
    WorldPosition {
        x: position.x.clamp(-WORLD_BOUND, WORLD_BOUND),
        z: position.z.clamp(-WORLD_BOUND, WORLD_BOUND),
    }
}

/// Moves `current` toward `target` by at most `speed * dt` without
/// overshooting. Returns the new position and whether the mover has arrived
/// (distance within the arrival threshold; never divides by a near-zero
/// distance).
pub(crate) fn step_toward(
    current: WorldPosition,
    target: WorldPosition,
    speed: f64,
    dt_seconds: f64,
) -> (WorldPosition, bool) {
    let dx = target.x - current.x;
    let dz = target.z - current.z;
    let distance = (dx * dx + dz * dz).sqrt();
    if distance <= MOVE_ARRIVAL_THRESHOLD {
        return (current, true);
    }

    let step = speed * dt_seconds;
    if step >= distance {
        return (target, false);
    }

    let scale = step / distance;
    (
        WorldPosition {
            x: current.x + dx * scale,
            z: current.z + dz * scale,
        },
        false,
    )
}
