/// Free-pan offset over the player-centred view. Drag gestures accumulate
/// scaled pointer deltas; every undragged tick the offset decays toward zero
/// without ever snapping.
#[derive(Debug, Default)]
pub(crate) struct CameraPan {
    offset_px: Vec2,
    drag_active: bool,
    last_cursor_px: Option<Vec2>,
}

impl CameraPan {
    pub(crate) fn offset_px(&self) -> Vec2 {
        self.offset_px
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.drag_active
    }

    pub(crate) fn begin_drag(&mut self, cursor_px: Vec2) {
        self.drag_active = true;
        self.last_cursor_px = Some(cursor_px);
    }

    pub(crate) fn update_drag(&mut self, cursor_px: Vec2) {
        if !self.drag_active {
            return;
        }
        if let Some(last) = self.last_cursor_px {
            self.offset_px.x += (cursor_px.x - last.x) * PAN_SENSITIVITY;
            self.offset_px.y += (cursor_px.y - last.y) * PAN_SENSITIVITY;
        }
        self.last_cursor_px = Some(cursor_px);
    }

    pub(crate) fn end_drag(&mut self) {
        self.drag_active = false;
        self.last_cursor_px = None;
    }

    /// Geometric decay toward the player-centred origin; frozen while a drag
    /// gesture is active.
    pub(crate) fn decay_step(&mut self) {
        if self.drag_active {
            return;
        }
        self.offset_px.x *= PAN_DECAY_PER_TICK;
        self.offset_px.y *= PAN_DECAY_PER_TICK;
    }

    pub(crate) fn viewport_origin(&self, viewport_px: (u32, u32)) -> (f32, f32) {
        (
            viewport_px.0 as f32 * 0.5 + self.offset_px.x,
            viewport_px.1 as f32 * 0.5 + self.offset_px.y,
        )
    }
}

/// Classifies a press/move/release sequence as either a camera drag or a
/// click. A release that never moved past the drag threshold reports the
/// press position as a click.
#[derive(Debug, Default)]
pub(crate) struct PointerGesture {
    press_cursor_px: Option<Vec2>,
    dragged: bool,
}

impl PointerGesture {
    pub(crate) fn on_press(&mut self, cursor_px: Vec2) {
        self.press_cursor_px = Some(cursor_px);
        self.dragged = false;
    }

    pub(crate) fn on_move(&mut self, cursor_px: Vec2, pan: &mut CameraPan) {
        let Some(press) = self.press_cursor_px else {
            return;
        };
        if !self.dragged {
            let dx = cursor_px.x - press.x;
            let dy = cursor_px.y - press.y;
            if (dx * dx + dy * dy).sqrt() < DRAG_DISTANCE_THRESHOLD_PX {
                return;
            }
            self.dragged = true;
            pan.begin_drag(press);
        }
        pan.update_drag(cursor_px);
    }

    pub(crate) fn on_release(&mut self, pan: &mut CameraPan) -> Option<Vec2> {
        let press = self.press_cursor_px.take();
        if self.dragged {
            self.dragged = false;
            pan.end_drag();
            return None;
        }
        press
    }
}
