/// Deterministic spatial hash: maps a grid cell and salt to a value in
/// [0, 1). Pure and order independent, so the world never stores features;
/// every frame re-derives them from coordinates alone.
pub(crate) fn spatial_hash(gx: i64, gz: i64, salt: i64) -> f64 {
    let mixed = gx as f64 * 127.1 + gz as f64 * 311.7 + salt as f64 * 74.7;
    let product = mixed.sin() * 43758.545_312_3;
    product - product.floor()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Feature {
    Tree {
        screen_x: i32,
        screen_y: i32,
        size_factor: f32,
    },
    Ruin {
        screen_x: i32,
        screen_y: i32,
        width: i32,
        height: i32,
    },
}

/// The infinite world as a pure function of a seed. All feature queries go
/// through [`WorldField::noise`], which folds the seed into the per-attribute
/// salt.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WorldField {
    seed: i64,
}

impl WorldField {
    pub(crate) fn new(seed: i64) -> Self {
        Self { seed }
    }

    pub(crate) fn noise(&self, gx: i64, gz: i64, salt: i64) -> f64 {
        spatial_hash(gx, gz, self.seed.wrapping_mul(7919).wrapping_add(salt))
    }

    pub(crate) fn tree_presence(&self, gx: i64, gz: i64) -> bool {
        self.noise(gx, gz, SALT_TREE_PRESENCE) > TREE_PRESENCE_THRESHOLD
    }

    /// Jittered world-space centre of the tree in cell `(gx, gz)`. Valid only
    /// for cells that pass [`WorldField::tree_presence`].
    pub(crate) fn tree_world_position(&self, gx: i64, gz: i64) -> (f64, f64) {
        let jitter_x = self.noise(gx, gz, SALT_TREE_JITTER_X);
        let jitter_z = self.noise(gx, gz, SALT_TREE_JITTER_Z);
        (
            (gx as f64 + jitter_x) * TREE_SPACING,
            (gz as f64 + jitter_z) * TREE_SPACING,
        )
    }

    pub(crate) fn collect_trees(
        &self,
        player: WorldPosition,
        origin_px: (f32, f32),
        viewport_px: (u32, u32),
        out: &mut Vec<Feature>,
    ) {
        let pgx = (player.x / TREE_SPACING).floor() as i64;
        let pgz = (player.z / TREE_SPACING).floor() as i64;

        for gx in (pgx - TREE_VIEW_RANGE_CELLS)..(pgx + TREE_VIEW_RANGE_CELLS) {
            for gz in (pgz - TREE_VIEW_RANGE_CELLS)..(pgz + TREE_VIEW_RANGE_CELLS) {
                if !self.tree_presence(gx, gz) {
                    continue;
                }
                let (world_x, world_z) = self.tree_world_position(gx, gz);
                let (screen_x, screen_y) =
                    project_to_screen(world_x, world_z, player, origin_px);
                let size_factor = (0.6 + 0.8 * self.noise(gx, gz, SALT_TREE_SIZE)) as f32;
                // Cull against the drawn extents, not the anchor: the crown
                // reaches well above the anchor point.
                let crown_half_width = (TREE_CROWN_HALF_WIDTH_PX * size_factor) as i32;
                let crown_peak = (TREE_CROWN_PEAK_PX * size_factor) as i32;
                if rect_outside_viewport(
                    screen_x,
                    screen_y - crown_peak / 2,
                    crown_half_width * 2,
                    crown_peak,
                    viewport_px,
                    TREE_CULL_MARGIN_PX,
                ) {
                    continue;
                }
                out.push(Feature::Tree {
                    screen_x,
                    screen_y,
                    size_factor,
                });
            }
        }
    }

    pub(crate) fn collect_ruins(
        &self,
        player: WorldPosition,
        origin_px: (f32, f32),
        viewport_px: (u32, u32),
        out: &mut Vec<Feature>,
    ) {
        let pgx = (player.x / RUIN_SPACING).floor() as i64;
        let pgz = (player.z / RUIN_SPACING).floor() as i64;

        for gx in (pgx - RUIN_VIEW_RANGE_CELLS)..(pgx + RUIN_VIEW_RANGE_CELLS) {
            for gz in (pgz - RUIN_VIEW_RANGE_CELLS)..(pgz + RUIN_VIEW_RANGE_CELLS) {
                if self.noise(gx, gz, SALT_RUIN_PRESENCE) <= RUIN_PRESENCE_THRESHOLD {
                    continue;
                }
                // Ruins sit at exact grid points, no jitter.
                let world_x = gx as f64 * RUIN_SPACING;
                let world_z = gz as f64 * RUIN_SPACING;
                let (screen_x, screen_y) =
                    project_to_screen(world_x, world_z, player, origin_px);
                let width = 20 + (self.noise(gx, gz, SALT_RUIN_WIDTH) * 20.0) as i32;
                let height = 24 + (self.noise(gx, gz, SALT_RUIN_HEIGHT) * 20.0) as i32;
                if rect_outside_viewport(
                    screen_x,
                    screen_y,
                    width,
                    height,
                    viewport_px,
                    RUIN_CULL_MARGIN_PX,
                ) {
                    continue;
                }
                out.push(Feature::Ruin {
                    screen_x,
                    screen_y,
                    width,
                    height,
                });
            }
        }
    }
}

fn project_to_screen(
    world_x: f64,
    world_z: f64,
    player: WorldPosition,
    origin_px: (f32, f32),
) -> (i32, i32) {
    let screen_x = origin_px.0 as f64 + (world_x - player.x) * PIXELS_PER_WORLD as f64;
    let screen_y = origin_px.1 as f64 + (world_z - player.z) * PIXELS_PER_WORLD as f64;
    (screen_x.round() as i32, screen_y.round() as i32)
}

fn rect_outside_viewport(
    center_x: i32,
    center_y: i32,
    width: i32,
    height: i32,
    viewport_px: (u32, u32),
    margin: i32,
) -> bool {
    center_x + width / 2 < -margin
        || center_y + height / 2 < -margin
        || center_x - width / 2 > viewport_px.0 as i32 + margin
        || center_y - height / 2 > viewport_px.1 as i32 + margin
}
