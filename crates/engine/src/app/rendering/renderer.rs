use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use super::frame_plan::{DrawItem, FramePlan, Rgba};
use super::transform::Viewport;

pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    viewport: Viewport,
}

impl Renderer {
    pub fn new(window: Arc<Window>) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(Arc::clone(&window), size.width, size.height)?;
        Ok(Self {
            window,
            pixels,
            viewport: Viewport {
                width: size.width,
                height: size.height,
            },
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), width, height)?;
        self.viewport = Viewport { width, height };
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn build_pixels(
        window: Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(width, height, window);
        Pixels::new(width, height, surface)
    }

    pub(crate) fn render_frame(&mut self, plan: &FramePlan) -> Result<(), Error> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Ok(());
        }

        let frame = self.pixels.frame_mut();
        rasterize_plan(frame, self.viewport.width, self.viewport.height, plan);
        self.pixels.render()
    }
}

fn rasterize_plan(frame: &mut [u8], width: u32, height: u32, plan: &FramePlan) {
    let clear_color = plan.clear_color();
    for chunk in frame.chunks_exact_mut(4) {
        chunk.copy_from_slice(&clear_color);
    }

    for item in plan.items() {
        match *item {
            DrawItem::FillRect {
                x,
                y,
                width: w,
                height: h,
                color,
            } => fill_rect(frame, width, height, x, y, w, h, color),
            DrawItem::RectOutline {
                x,
                y,
                width: w,
                height: h,
                color,
            } => rect_outline(frame, width, height, x, y, w, h, color),
            DrawItem::FillCircle {
                cx,
                cy,
                radius,
                color,
            } => fill_circle(frame, width, height, cx, cy, radius, color),
            DrawItem::FillTriangle {
                x0,
                y0,
                x1,
                y1,
                x2,
                y2,
                color,
            } => fill_triangle(frame, width, height, (x0, y0), (x1, y1), (x2, y2), color),
            DrawItem::Glow {
                cx,
                cy,
                radius,
                color,
            } => glow_disc(frame, width, height, cx, cy, radius, color),
            DrawItem::LineV { x, y0, y1, color } => line_v(frame, width, height, x, y0, y1, color),
            DrawItem::LineH { y, x0, x1, color } => line_h(frame, width, height, y, x0, x1, color),
        }
    }
}

fn put_pixel(frame: &mut [u8], width: u32, height: u32, x: i32, y: i32, color: Rgba) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let index = (y as usize * width as usize + x as usize) * 4;
    frame[index..index + 4].copy_from_slice(&color);
}

/// Source-over blend with the given 0..=255 coverage on top of the color's
/// own alpha channel.
fn blend_pixel(frame: &mut [u8], width: u32, height: u32, x: i32, y: i32, color: Rgba, coverage: u8) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let alpha = (color[3] as u32 * coverage as u32) / 255;
    if alpha == 0 {
        return;
    }
    let index = (y as usize * width as usize + x as usize) * 4;
    for channel in 0..3 {
        let src = color[channel] as u32;
        let dst = frame[index + channel] as u32;
        frame[index + channel] = ((src * alpha + dst * (255 - alpha)) / 255) as u8;
    }
    frame[index + 3] = 255;
}

#[allow(clippy::too_many_arguments)]
fn fill_rect(frame: &mut [u8], width: u32, height: u32, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
    if w <= 0 || h <= 0 {
        return;
    }
    let x_min = x.max(0);
    let y_min = y.max(0);
    let x_max = (x + w).min(width as i32);
    let y_max = (y + h).min(height as i32);
    for py in y_min..y_max {
        for px in x_min..x_max {
            put_pixel(frame, width, height, px, py, color);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn rect_outline(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: Rgba,
) {
    if w <= 0 || h <= 0 {
        return;
    }
    line_h(frame, width, height, y, x, x + w - 1, color);
    line_h(frame, width, height, y + h - 1, x, x + w - 1, color);
    line_v(frame, width, height, x, y, y + h - 1, color);
    line_v(frame, width, height, x + w - 1, y, y + h - 1, color);
}

fn fill_circle(frame: &mut [u8], width: u32, height: u32, cx: i32, cy: i32, radius: i32, color: Rgba) {
    if radius <= 0 {
        return;
    }
    let r_sq = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r_sq {
                put_pixel(frame, width, height, cx + dx, cy + dy, color);
            }
        }
    }
}

fn glow_disc(frame: &mut [u8], width: u32, height: u32, cx: i32, cy: i32, radius: i32, color: Rgba) {
    if radius <= 0 {
        return;
    }
    let radius_f = radius as f32;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let distance = ((dx * dx + dy * dy) as f32).sqrt();
            if distance > radius_f {
                continue;
            }
            let coverage = (255.0 * (1.0 - distance / radius_f)) as u8;
            blend_pixel(frame, width, height, cx + dx, cy + dy, color, coverage);
        }
    }
}

fn fill_triangle(
    frame: &mut [u8],
    width: u32,
    height: u32,
    a: (i32, i32),
    b: (i32, i32),
    c: (i32, i32),
    color: Rgba,
) {
    let x_min = a.0.min(b.0).min(c.0).max(0);
    let x_max = a.0.max(b.0).max(c.0).min(width as i32 - 1);
    let y_min = a.1.min(b.1).min(c.1).max(0);
    let y_max = a.1.max(b.1).max(c.1).min(height as i32 - 1);

    let area = edge(a, b, c);
    if area == 0 {
        return;
    }
    let flip = if area < 0 { -1 } else { 1 };

    for py in y_min..=y_max {
        for px in x_min..=x_max {
            let p = (px, py);
            let w0 = edge(a, b, p) * flip;
            let w1 = edge(b, c, p) * flip;
            let w2 = edge(c, a, p) * flip;
            if w0 >= 0 && w1 >= 0 && w2 >= 0 {
                put_pixel(frame, width, height, px, py, color);
            }
        }
    }
}

fn edge(a: (i32, i32), b: (i32, i32), p: (i32, i32)) -> i64 {
    (b.0 - a.0) as i64 * (p.1 - a.1) as i64 - (b.1 - a.1) as i64 * (p.0 - a.0) as i64
}

fn line_v(frame: &mut [u8], width: u32, height: u32, x: i32, y0: i32, y1: i32, color: Rgba) {
    let (start, end) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
    for y in start..=end {
        put_pixel(frame, width, height, x, y, color);
    }
}

fn line_h(frame: &mut [u8], width: u32, height: u32, y: i32, x0: i32, x1: i32, color: Rgba) {
    let (start, end) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    for x in start..=end {
        put_pixel(frame, width, height, x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 16;
    const H: u32 = 16;

    fn blank_frame() -> Vec<u8> {
        vec![0u8; (W * H * 4) as usize]
    }

    fn pixel(frame: &[u8], x: i32, y: i32) -> Rgba {
        let index = (y as usize * W as usize + x as usize) * 4;
        [
            frame[index],
            frame[index + 1],
            frame[index + 2],
            frame[index + 3],
        ]
    }

    const RED: Rgba = [255, 0, 0, 255];

    #[test]
    fn fill_rect_covers_interior_and_clips_to_frame() {
        let mut frame = blank_frame();
        fill_rect(&mut frame, W, H, -4, -4, 8, 8, RED);

        assert_eq!(pixel(&frame, 0, 0), RED);
        assert_eq!(pixel(&frame, 3, 3), RED);
        assert_eq!(pixel(&frame, 4, 4), [0, 0, 0, 0]);
    }

    #[test]
    fn fill_rect_ignores_degenerate_dimensions() {
        let mut frame = blank_frame();
        fill_rect(&mut frame, W, H, 2, 2, 0, 5, RED);
        fill_rect(&mut frame, W, H, 2, 2, 5, -1, RED);

        assert!(frame.iter().all(|byte| *byte == 0));
    }

    #[test]
    fn fill_circle_covers_center_not_bounding_corner() {
        let mut frame = blank_frame();
        fill_circle(&mut frame, W, H, 8, 8, 4, RED);

        assert_eq!(pixel(&frame, 8, 8), RED);
        assert_eq!(pixel(&frame, 8, 12), RED);
        assert_eq!(pixel(&frame, 12, 12), [0, 0, 0, 0]);
    }

    #[test]
    fn fill_triangle_covers_centroid() {
        let mut frame = blank_frame();
        fill_triangle(&mut frame, W, H, (2, 12), (14, 12), (8, 2), RED);

        assert_eq!(pixel(&frame, 8, 9), RED);
        assert_eq!(pixel(&frame, 0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn fill_triangle_winding_order_does_not_matter() {
        let mut clockwise = blank_frame();
        let mut counter = blank_frame();
        fill_triangle(&mut clockwise, W, H, (2, 12), (14, 12), (8, 2), RED);
        fill_triangle(&mut counter, W, H, (14, 12), (2, 12), (8, 2), RED);

        assert_eq!(clockwise, counter);
    }

    #[test]
    fn glow_is_strongest_at_center_and_fades_outward() {
        let mut frame = blank_frame();
        glow_disc(&mut frame, W, H, 8, 8, 6, RED);

        let center = pixel(&frame, 8, 8);
        let rim = pixel(&frame, 12, 8);
        assert!(center[0] > rim[0]);
        assert!(rim[0] > 0);
        assert_eq!(pixel(&frame, 0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn lines_draw_in_either_direction_and_clip() {
        let mut frame = blank_frame();
        line_h(&mut frame, W, H, 5, 12, 3, RED);
        line_v(&mut frame, W, H, 2, 30, -3, RED);

        assert_eq!(pixel(&frame, 3, 5), RED);
        assert_eq!(pixel(&frame, 12, 5), RED);
        assert_eq!(pixel(&frame, 2, 0), RED);
        assert_eq!(pixel(&frame, 2, 15), RED);
    }

    #[test]
    fn rasterize_plan_clears_then_draws_in_order() {
        let mut frame = blank_frame();
        let mut plan = FramePlan::default();
        plan.begin([1, 2, 3, 255]);
        plan.push(DrawItem::FillRect {
            x: 4,
            y: 4,
            width: 2,
            height: 2,
            color: RED,
        });
        plan.push(DrawItem::FillRect {
            x: 4,
            y: 4,
            width: 1,
            height: 1,
            color: [0, 255, 0, 255],
        });

        rasterize_plan(&mut frame, W, H, &plan);

        assert_eq!(pixel(&frame, 0, 0), [1, 2, 3, 255]);
        assert_eq!(pixel(&frame, 5, 5), RED);
        assert_eq!(pixel(&frame, 4, 4), [0, 255, 0, 255]);
    }

    #[test]
    fn out_of_frame_items_are_safely_clipped() {
        let mut frame = blank_frame();
        fill_circle(&mut frame, W, H, -100, -100, 5, RED);
        glow_disc(&mut frame, W, H, 100, 100, 5, RED);
        fill_triangle(&mut frame, W, H, (-50, -50), (-40, -50), (-45, -40), RED);

        assert!(frame.iter().all(|byte| *byte == 0));
    }
}
