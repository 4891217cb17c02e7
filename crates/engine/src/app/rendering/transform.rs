use crate::app::Vec2;

/// Fixed projection scale; one world unit spans this many screen pixels.
pub const PIXELS_PER_WORLD: f32 = 20.0;

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn center_px(&self) -> Vec2 {
        Vec2 {
            x: self.width as f32 * 0.5,
            y: self.height as f32 * 0.5,
        }
    }
}

/// Projects a world position for a focus-centred view: the focus (the player)
/// lands at the viewport centre displaced by the pan offset. Screen y grows
/// downward, matching the world's second axis.
pub fn world_to_screen_px(
    world: Vec2,
    focus: Vec2,
    pan_offset_px: Vec2,
    viewport: Viewport,
) -> (i32, i32) {
    let center = viewport.center_px();
    let x = center.x + pan_offset_px.x + (world.x - focus.x) * PIXELS_PER_WORLD;
    let y = center.y + pan_offset_px.y + (world.y - focus.y) * PIXELS_PER_WORLD;
    (x.round() as i32, y.round() as i32)
}

/// Inverse of [`world_to_screen_px`] without the rounding step.
pub fn screen_to_world_px(
    screen: Vec2,
    focus: Vec2,
    pan_offset_px: Vec2,
    viewport: Viewport,
) -> Vec2 {
    let center = viewport.center_px();
    Vec2 {
        x: focus.x + (screen.x - center.x - pan_offset_px.x) / PIXELS_PER_WORLD,
        y: focus.y + (screen.y - center.y - pan_offset_px.y) / PIXELS_PER_WORLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 800,
        height: 600,
    };

    #[test]
    fn focus_maps_to_viewport_center() {
        let focus = Vec2 { x: 3.5, y: -2.0 };
        let (x, y) = world_to_screen_px(focus, focus, Vec2::default(), VIEWPORT);
        assert_eq!(x, 400);
        assert_eq!(y, 300);
    }

    #[test]
    fn one_world_unit_spans_projection_scale() {
        let focus = Vec2::default();
        let (x, y) = world_to_screen_px(Vec2 { x: 1.0, y: 2.0 }, focus, Vec2::default(), VIEWPORT);
        assert_eq!(x, 400 + PIXELS_PER_WORLD as i32);
        assert_eq!(y, 300 + 2 * PIXELS_PER_WORLD as i32);
    }

    #[test]
    fn pan_offset_shifts_screen_position() {
        let focus = Vec2::default();
        let pan = Vec2 { x: 30.0, y: -10.0 };
        let (x, y) = world_to_screen_px(Vec2::default(), focus, pan, VIEWPORT);
        assert_eq!(x, 430);
        assert_eq!(y, 290);
    }

    #[test]
    fn screen_to_world_inverts_projection() {
        let focus = Vec2 { x: -4.0, y: 9.0 };
        let pan = Vec2 { x: 12.0, y: 8.0 };
        let world = Vec2 { x: -1.25, y: 10.5 };

        let (sx, sy) = world_to_screen_px(world, focus, pan, VIEWPORT);
        let screen = Vec2 {
            x: sx as f32,
            y: sy as f32,
        };
        let back = screen_to_world_px(screen, focus, pan, VIEWPORT);

        assert!((back.x - world.x).abs() < 0.05);
        assert!((back.y - world.y).abs() < 0.05);
    }
}
