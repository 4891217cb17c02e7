#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BattlePhase {
    Idle,
    InBattle,
    EnemyDefeated,
    PlayerDefeated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CombatTimerEvent {
    EnemyStrike,
    VictoryToIdle,
    DefeatToIdle,
}

#[derive(Debug, Clone, Copy)]
struct ScheduledEvent {
    fire_at_seconds: f64,
    event: CombatTimerEvent,
}

/// Explicit timer queue for delayed combat steps: schedule at an absolute
/// session time, drain what is due, clear everything on teardown. Replaces
/// host-level deferred callbacks so tests can advance time deterministically.
#[derive(Debug, Default)]
pub(crate) struct TimerQueue {
    pending: Vec<ScheduledEvent>,
}

impl TimerQueue {
    pub(crate) fn schedule(&mut self, fire_at_seconds: f64, event: CombatTimerEvent) {
        self.pending.push(ScheduledEvent {
            fire_at_seconds,
            event,
        });
    }

    pub(crate) fn due(&mut self, now_seconds: f64) -> Vec<CombatTimerEvent> {
        let mut fired: Vec<ScheduledEvent> = Vec::new();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].fire_at_seconds <= now_seconds {
                fired.push(self.pending.remove(index));
            } else {
                index += 1;
            }
        }
        fired.sort_by(|a, b| a.fire_at_seconds.total_cmp(&b.fire_at_seconds));
        fired.into_iter().map(|scheduled| scheduled.event).collect()
    }

    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }

    pub(crate) fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// One-way victory notification to whatever owns quest state.
pub(crate) trait QuestSink {
    fn advance_quest(&mut self, quest_id: u32, amount: u32);
}

#[derive(Debug, Default)]
pub(crate) struct QuestProgressLog {
    progress_by_quest: HashMap<u32, u32>,
}

impl QuestProgressLog {
    pub(crate) fn progress_of(&self, quest_id: u32) -> u32 {
        self.progress_by_quest.get(&quest_id).copied().unwrap_or(0)
    }
}

impl QuestSink for QuestProgressLog {
    fn advance_quest(&mut self, quest_id: u32, amount: u32) {
        let entry = self.progress_by_quest.entry(quest_id).or_insert(0);
        *entry = entry.saturating_add(amount).min(QUEST_PROGRESS_CAP);
        info!(quest_id, progress = *entry, "quest_progress");
    }
}

/// Turn-based battle state machine. Attacks outside `InBattle` or after
/// either side reaches zero are silent no-ops, never errors.
#[derive(Debug)]
pub(crate) struct CombatSession {
    phase: BattlePhase,
    player_health: i32,
    enemy_health: i32,
    log: Vec<String>,
    timers: TimerQueue,
    rng: Xoshiro256PlusPlus,
}

impl CombatSession {
    pub(crate) fn new(rng_seed: u64) -> Self {
        Self {
            phase: BattlePhase::Idle,
            player_health: MAX_HEALTH,
            enemy_health: MAX_HEALTH,
            log: Vec::new(),
            timers: TimerQueue::default(),
            rng: Xoshiro256PlusPlus::seed_from_u64(rng_seed),
        }
    }

    pub(crate) fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub(crate) fn player_health(&self) -> i32 {
        self.player_health
    }

    pub(crate) fn enemy_health(&self) -> i32 {
        self.enemy_health
    }

    pub(crate) fn log(&self) -> &[String] {
        &self.log
    }

    /// The tail of the append-only log; the HUD shows at most
    /// `COMBAT_LOG_VISIBLE_LINES` entries.
    pub(crate) fn recent_log(&self, max_lines: usize) -> &[String] {
        let start = self.log.len().saturating_sub(max_lines);
        &self.log[start..]
    }

    pub(crate) fn pending_timer_count(&self) -> usize {
        self.timers.pending_count()
    }

    pub(crate) fn start_battle(&mut self) {
        if self.phase != BattlePhase::Idle {
            return;
        }
        self.timers.clear();
        self.enemy_health = MAX_HEALTH;
        self.phase = BattlePhase::InBattle;
        // Each battle owns its log; the opening line replaces whatever the
        // previous battle left behind.
        self.log.clear();
        self.log
            .push("Теневое существо появилось из тьмы!".to_string());
        info!(player_health = self.player_health, "battle_started");
    }

    pub(crate) fn player_attack(&mut self, now_seconds: f64) {
        if self.phase != BattlePhase::InBattle
            || self.player_health == 0
            || self.enemy_health == 0
        {
            return;
        }

        let damage = self.rng.gen_range(PLAYER_DAMAGE_MIN..PLAYER_DAMAGE_MAX);
        self.enemy_health = (self.enemy_health - damage).clamp(0, MAX_HEALTH);
        self.log.push(format!("Ты нанёс {damage} урона! ⚔️"));
        debug!(damage, enemy_health = self.enemy_health, "player_attack");

        if self.enemy_health == 0 {
            self.phase = BattlePhase::EnemyDefeated;
            self.log.push("Победа! Существо повержено! 🏆".to_string());
            self.timers
                .schedule(now_seconds + VICTORY_IDLE_DELAY_SECONDS, CombatTimerEvent::VictoryToIdle);
            info!("battle_won");
        } else {
            self.timers
                .schedule(now_seconds + ENEMY_COUNTER_DELAY_SECONDS, CombatTimerEvent::EnemyStrike);
        }
    }

    fn enemy_attack(&mut self, now_seconds: f64) {
        if self.phase != BattlePhase::InBattle
            || self.player_health == 0
            || self.enemy_health == 0
        {
            return;
        }

        let damage = self.rng.gen_range(ENEMY_DAMAGE_MIN..ENEMY_DAMAGE_MAX);
        self.player_health = (self.player_health - damage).clamp(0, MAX_HEALTH);
        self.log.push(format!("Существо нанесло {damage} урона! 💀"));
        debug!(damage, player_health = self.player_health, "enemy_attack");

        if self.player_health == 0 {
            self.phase = BattlePhase::PlayerDefeated;
            self.log.push("Ты пал в бою... Тьма отступает.".to_string());
            self.timers
                .schedule(now_seconds + DEFEAT_IDLE_DELAY_SECONDS, CombatTimerEvent::DefeatToIdle);
            info!("battle_lost");
        }
    }

    /// Drains due timers against the session clock. Runs every simulation
    /// tick regardless of input. Quest credit for a kill lands with the
    /// delayed victory step, not the killing blow, so a teardown inside the
    /// victory window cancels the award along with the timer.
    pub(crate) fn tick(&mut self, now_seconds: f64, quests: &mut dyn QuestSink) {
        for event in self.timers.due(now_seconds) {
            match event {
                CombatTimerEvent::EnemyStrike => self.enemy_attack(now_seconds),
                CombatTimerEvent::VictoryToIdle => {
                    if self.phase == BattlePhase::EnemyDefeated {
                        quests.advance_quest(HUNT_QUEST_ID, HUNT_QUEST_PROGRESS_PER_KILL);
                        self.phase = BattlePhase::Idle;
                    }
                }
                CombatTimerEvent::DefeatToIdle => {
                    if self.phase == BattlePhase::PlayerDefeated {
                        self.player_health = MAX_HEALTH;
                        self.phase = BattlePhase::Idle;
                    }
                }
            }
        }
    }

    /// Cancels every pending delayed step; called on scene unload so no
    /// timer can fire into a torn-down session.
    pub(crate) fn teardown(&mut self) {
        self.timers.clear();
    }

    #[cfg(test)]
    pub(crate) fn set_player_health_for_tests(&mut self, health: i32) {
        self.player_health = health.clamp(0, MAX_HEALTH);
    }
}
