pub type Rgba = [u8; 4];

/// One rasterizer primitive. Coordinates are screen pixels; items may extend
/// past the viewport and are clipped at draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawItem {
    FillRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Rgba,
    },
    RectOutline {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Rgba,
    },
    FillCircle {
        cx: i32,
        cy: i32,
        radius: i32,
        color: Rgba,
    },
    FillTriangle {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Rgba,
    },
    /// Alpha-blended disc whose opacity falls off linearly toward the rim.
    Glow {
        cx: i32,
        cy: i32,
        radius: i32,
        color: Rgba,
    },
    LineV {
        x: i32,
        y0: i32,
        y1: i32,
        color: Rgba,
    },
    LineH {
        y: i32,
        x0: i32,
        x1: i32,
        color: Rgba,
    },
}

/// Ordered draw list for one frame; items are rasterized first-to-last, so
/// producers push back-to-front.
#[derive(Debug, Default)]
pub struct FramePlan {
    clear_color: Rgba,
    items: Vec<DrawItem>,
}

impl FramePlan {
    /// Resets the plan for a new frame, keeping the item allocation.
    pub fn begin(&mut self, clear_color: Rgba) {
        self.clear_color = clear_color;
        self.items.clear();
    }

    pub fn push(&mut self, item: DrawItem) {
        self.items.push(item);
    }

    pub fn clear_color(&self) -> Rgba {
        self.clear_color
    }

    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_resets_items_and_sets_clear_color() {
        let mut plan = FramePlan::default();
        plan.push(DrawItem::LineV {
            x: 1,
            y0: 0,
            y1: 10,
            color: [255; 4],
        });

        plan.begin([10, 20, 30, 255]);

        assert!(plan.items().is_empty());
        assert_eq!(plan.clear_color(), [10, 20, 30, 255]);
    }

    #[test]
    fn items_keep_push_order() {
        let mut plan = FramePlan::default();
        plan.begin([0; 4]);
        plan.push(DrawItem::FillCircle {
            cx: 0,
            cy: 0,
            radius: 2,
            color: [1; 4],
        });
        plan.push(DrawItem::FillCircle {
            cx: 0,
            cy: 0,
            radius: 3,
            color: [2; 4],
        });

        assert_eq!(plan.items().len(), 2);
        assert!(matches!(
            plan.items()[1],
            DrawItem::FillCircle { radius: 3, .. }
        ));
    }
}
