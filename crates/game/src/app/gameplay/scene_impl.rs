impl Scene for ExplorationScene {
    fn load(&mut self) {
        info!(
            scene = self.label,
            control = ?self.control,
            character = %self.character.name,
            class = %self.character.class,
            "exploration_scene_loaded"
        );
    }

    fn update(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot) -> SceneCommand {
        let dt_seconds = fixed_dt_seconds as f64;
        self.clock_seconds += dt_seconds;

        self.handle_pointer(input);
        self.camera.decay_step();
        self.advance_movement(input, dt_seconds);
        self.handle_combat_input(input);
        self.combat.tick(self.clock_seconds, &mut self.quests);

        if input.switch_scene_pressed() {
            return SceneCommand::SwitchTo(self.next_scene);
        }
        SceneCommand::None
    }

    fn render(&mut self, viewport_px: (u32, u32), frame: &mut FramePlan) {
        frame.begin(CLEAR_COLOR_NIGHT);
        let origin_px = self.camera.viewport_origin(viewport_px);

        push_grid(frame, viewport_px, self.position, origin_px);

        self.features.clear();
        self.field
            .collect_trees(self.position, origin_px, viewport_px, &mut self.features);
        self.field
            .collect_ruins(self.position, origin_px, viewport_px, &mut self.features);
        for feature in &self.features {
            push_feature(frame, *feature);
        }

        push_player(
            frame,
            origin_px,
            self.facing,
            glyph_color(&self.character.color_key),
        );

        if let Some(target) = self.pointer_mover.target() {
            let screen_x =
                (origin_px.0 as f64 + (target.x - self.position.x) * PIXELS_PER_WORLD as f64)
                    .round() as i32;
            let screen_y =
                (origin_px.1 as f64 + (target.z - self.position.z) * PIXELS_PER_WORLD as f64)
                    .round() as i32;
            frame.push(DrawItem::FillCircle {
                cx: screen_x,
                cy: screen_y,
                radius: 4,
                color: TARGET_MARKER_COLOR,
            });
        }

        push_hud(frame, viewport_px, &self.combat);
    }

    fn unload(&mut self) {
        self.pointer_mover.clear_target();
        self.combat.teardown();
        info!(scene = self.label, "exploration_scene_unloaded");
    }

    fn debug_title(&self) -> Option<String> {
        let scheme = match self.control {
            ControlScheme::Keyboard => "клавиатура",
            ControlScheme::Pointer => "мышь",
        };
        let mut title = format!(
            "Тёмное Пророчество — {} [{}] HP {} ({:.1}, {:.1})",
            self.character.name,
            scheme,
            self.combat.player_health(),
            self.position.x,
            self.position.z
        );
        if let Some(line) = self.combat.recent_log(1).last() {
            title.push_str(" — ");
            title.push_str(line);
        }
        Some(title)
    }
}

impl ExplorationScene {
    fn handle_pointer(&mut self, input: &InputSnapshot) {
        let cursor = input.cursor_position_px();
        match self.control {
            ControlScheme::Keyboard => {
                if input.pointer_pressed() {
                    if let Some(cursor_px) = cursor {
                        self.camera.begin_drag(cursor_px);
                    }
                }
                if input.pointer_is_down() {
                    if let Some(cursor_px) = cursor {
                        self.camera.update_drag(cursor_px);
                    }
                }
                if input.pointer_released() {
                    self.camera.end_drag();
                }
            }
            ControlScheme::Pointer => {
                if input.pointer_pressed() {
                    if let Some(cursor_px) = cursor {
                        self.gesture.on_press(cursor_px);
                    }
                }
                if input.pointer_is_down() {
                    if let Some(cursor_px) = cursor {
                        self.gesture.on_move(cursor_px, &mut self.camera);
                    }
                }
                if input.pointer_released() {
                    if let Some(click_px) = self.gesture.on_release(&mut self.camera) {
                        if self.clicks.register_click(self.clock_seconds) {
                            self.confirm_seek_target(click_px, input.window_size());
                        }
                    }
                }
            }
        }
    }

    fn confirm_seek_target(&mut self, click_px: Vec2, viewport_px: (u32, u32)) {
        let focus = Vec2 {
            x: self.position.x as f32,
            y: self.position.z as f32,
        };
        let viewport = Viewport {
            width: viewport_px.0,
            height: viewport_px.1,
        };
        let world = screen_to_world_px(click_px, focus, self.camera.offset_px(), viewport);
        let target = WorldPosition {
            x: world.x as f64,
            z: world.y as f64,
        };
        debug!(
            scene = self.label,
            x = target.x,
            z = target.z,
            "seek_target_set"
        );
        self.pointer_mover.set_target(target);
    }

    fn advance_movement(&mut self, input: &InputSnapshot, dt_seconds: f64) {
        match self.control {
            ControlScheme::Keyboard => {
                let held = movement_delta(input);
                if held != (0, 0) {
                    self.facing = held;
                }
                self.position = self.keyboard_mover.step(self.position, held, dt_seconds);
            }
            ControlScheme::Pointer => {
                if let Some(target) = self.pointer_mover.target() {
                    if self.position.distance_to(target) > MOVE_ARRIVAL_THRESHOLD {
                        self.facing = (
                            (target.x - self.position.x).signum() as i32,
                            (target.z - self.position.z).signum() as i32,
                        );
                    }
                }
                self.position = self.pointer_mover.step(self.position, (0, 0), dt_seconds);
            }
        }
    }

    fn handle_combat_input(&mut self, input: &InputSnapshot) {
        if !input.primary_action_pressed() {
            return;
        }
        match self.combat.phase() {
            BattlePhase::Idle => self.combat.start_battle(),
            BattlePhase::InBattle => self.combat.player_attack(self.clock_seconds),
            BattlePhase::EnemyDefeated | BattlePhase::PlayerDefeated => {}
        }
    }
}

fn push_grid(
    frame: &mut FramePlan,
    viewport_px: (u32, u32),
    player: WorldPosition,
    origin_px: (f32, f32),
) {
    let scale = PIXELS_PER_WORLD as f64;

    let wx_min = (player.x + (0.0 - origin_px.0 as f64) / scale).floor() as i64;
    let wx_max = (player.x + (viewport_px.0 as f64 - origin_px.0 as f64) / scale).ceil() as i64;
    for wx in wx_min..=wx_max {
        let screen_x = (origin_px.0 as f64 + (wx as f64 - player.x) * scale).round() as i32;
        let color = if wx.rem_euclid(GRID_MAJOR_EVERY_UNITS) == 0 {
            GRID_MAJOR_COLOR
        } else {
            GRID_MINOR_COLOR
        };
        frame.push(DrawItem::LineV {
            x: screen_x,
            y0: 0,
            y1: viewport_px.1 as i32 - 1,
            color,
        });
    }

    let wz_min = (player.z + (0.0 - origin_px.1 as f64) / scale).floor() as i64;
    let wz_max = (player.z + (viewport_px.1 as f64 - origin_px.1 as f64) / scale).ceil() as i64;
    for wz in wz_min..=wz_max {
        let screen_y = (origin_px.1 as f64 + (wz as f64 - player.z) * scale).round() as i32;
        let color = if wz.rem_euclid(GRID_MAJOR_EVERY_UNITS) == 0 {
            GRID_MAJOR_COLOR
        } else {
            GRID_MINOR_COLOR
        };
        frame.push(DrawItem::LineH {
            y: screen_y,
            x0: 0,
            x1: viewport_px.0 as i32 - 1,
            color,
        });
    }
}

fn push_feature(frame: &mut FramePlan, feature: Feature) {
    match feature {
        Feature::Tree {
            screen_x,
            screen_y,
            size_factor,
        } => {
            let trunk_half_width = (TREE_TRUNK_HALF_WIDTH_PX * size_factor) as i32;
            let trunk_height = (TREE_TRUNK_HEIGHT_PX * size_factor) as i32;
            let crown_half_width = (TREE_CROWN_HALF_WIDTH_PX * size_factor) as i32;
            let crown_peak = (TREE_CROWN_PEAK_PX * size_factor) as i32;
            frame.push(DrawItem::FillRect {
                x: screen_x - trunk_half_width,
                y: screen_y - trunk_height,
                width: trunk_half_width * 2,
                height: trunk_height,
                color: TREE_TRUNK_COLOR,
            });
            frame.push(DrawItem::FillTriangle {
                x0: screen_x,
                y0: screen_y - crown_peak,
                x1: screen_x - crown_half_width,
                y1: screen_y - trunk_height,
                x2: screen_x + crown_half_width,
                y2: screen_y - trunk_height,
                color: TREE_CROWN_COLOR,
            });
        }
        Feature::Ruin {
            screen_x,
            screen_y,
            width,
            height,
        } => {
            frame.push(DrawItem::FillRect {
                x: screen_x - width / 2,
                y: screen_y - height / 2,
                width,
                height,
                color: RUIN_FILL_COLOR,
            });
            frame.push(DrawItem::RectOutline {
                x: screen_x - width / 2,
                y: screen_y - height / 2,
                width,
                height,
                color: RUIN_EDGE_COLOR,
            });
        }
    }
}

fn push_player(frame: &mut FramePlan, origin_px: (f32, f32), facing: (i32, i32), color: Rgba) {
    let cx = origin_px.0.round() as i32;
    let cy = origin_px.1.round() as i32;
    let mut glow = color;
    glow[3] = 110;
    frame.push(DrawItem::Glow {
        cx,
        cy,
        radius: PLAYER_GLOW_RADIUS_PX,
        color: glow,
    });
    frame.push(DrawItem::FillCircle {
        cx,
        cy,
        radius: PLAYER_GLYPH_RADIUS_PX,
        color,
    });
    frame.push(DrawItem::FillCircle {
        cx: cx + facing.0 * PLAYER_FACING_DOT_OFFSET_PX,
        cy: cy + facing.1 * PLAYER_FACING_DOT_OFFSET_PX,
        radius: PLAYER_FACING_DOT_RADIUS_PX,
        color: [255, 255, 255, 255],
    });
}

fn push_hud(frame: &mut FramePlan, viewport_px: (u32, u32), combat: &CombatSession) {
    frame.push(DrawItem::RectOutline {
        x: 10,
        y: 10,
        width: MAX_HEALTH + 4,
        height: 12,
        color: HUD_FRAME_COLOR,
    });
    frame.push(DrawItem::FillRect {
        x: 12,
        y: 12,
        width: combat.player_health(),
        height: 8,
        color: HUD_PLAYER_BAR_COLOR,
    });

    if combat.phase() != BattlePhase::Idle {
        let x = viewport_px.0 as i32 - (MAX_HEALTH + 14);
        frame.push(DrawItem::RectOutline {
            x,
            y: 10,
            width: MAX_HEALTH + 4,
            height: 12,
            color: HUD_FRAME_COLOR,
        });
        frame.push(DrawItem::FillRect {
            x: x + 2,
            y: 12,
            width: combat.enemy_health(),
            height: 8,
            color: HUD_ENEMY_BAR_COLOR,
        });
    }
}
