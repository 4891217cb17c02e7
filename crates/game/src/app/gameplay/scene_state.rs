#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControlScheme {
    /// Held logical directions drive the player; any drag pans the camera.
    Keyboard,
    /// Double-click sets a seek target; drags pan, clean releases click.
    Pointer,
}

/// One exploration session: owns every per-frame-mutable field (position,
/// pan offset, pending target, combat timers, clock) so nothing lives in
/// process-wide state.
pub(crate) struct ExplorationScene {
    label: &'static str,
    next_scene: SceneKey,
    control: ControlScheme,
    character: Character,
    position: WorldPosition,
    facing: (i32, i32),
    keyboard_mover: DirectionalMover,
    pointer_mover: TargetSeekMover,
    camera: CameraPan,
    gesture: PointerGesture,
    clicks: ClickTracker,
    combat: CombatSession,
    quests: QuestProgressLog,
    field: WorldField,
    clock_seconds: f64,
    features: Vec<Feature>,
}

impl ExplorationScene {
    pub(crate) fn new(
        label: &'static str,
        next_scene: SceneKey,
        control: ControlScheme,
        character: Character,
        world_seed: i64,
    ) -> Self {
        // Distinct combat RNG stream per scene, derived from the world seed.
        let rng_seed = (world_seed as u64).wrapping_add(label.as_bytes()[0] as u64);
        Self {
            label,
            next_scene,
            control,
            character,
            position: WorldPosition::default(),
            facing: (0, 1),
            keyboard_mover: DirectionalMover,
            pointer_mover: TargetSeekMover::default(),
            camera: CameraPan::default(),
            gesture: PointerGesture::default(),
            clicks: ClickTracker::default(),
            combat: CombatSession::new(rng_seed),
            quests: QuestProgressLog::default(),
            field: WorldField::new(world_seed),
            clock_seconds: 0.0,
            features: Vec::new(),
        }
    }

    pub(crate) fn position(&self) -> WorldPosition {
        self.position
    }

    pub(crate) fn active_target(&self) -> Option<WorldPosition> {
        self.pointer_mover.target()
    }

    pub(crate) fn combat(&self) -> &CombatSession {
        &self.combat
    }

    pub(crate) fn quest_progress(&self, quest_id: u32) -> u32 {
        self.quests.progress_of(quest_id)
    }

    pub(crate) fn camera_offset_px(&self) -> Vec2 {
        self.camera.offset_px()
    }
}
