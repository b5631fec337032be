//! Game loop orchestrator.
//!
//! [`GameSession`] owns the [`World`] plus everything around it that is not
//! game rules: frame-time capping, hit pause, ELO, camera, HUD, session status
//! and observers. One call to [`GameSession::tick`] is one rendered frame.

use brawl_core::{Countdown, FrameView, GameEvent, HitKind, InputSnapshot, World};
use tracing::{debug, info, trace};

use crate::camera::Camera;
use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::hud::{Hud, HudInput};
use crate::observer::{ObserverRegistry, SessionObserver};

/// Camera jitter draws from its own stream so shakes never shift level layouts.
const CAMERA_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, serde::Serialize)]
#[strum(serialize_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Playing,
    Paused,
    /// Latched once the player dies.
    GameOver,
}

/// What happened during one [`GameSession::tick`].
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub frame: u64,
    /// Capped step length actually used.
    pub dt: f32,
    /// Whether the world advanced this frame.
    pub simulated: bool,
    pub status: SessionStatus,
    pub events: Vec<GameEvent>,
}

#[derive(Debug)]
pub struct GameSession {
    config: RuntimeConfig,
    world: World,
    status: SessionStatus,
    frame: u64,
    elo: u32,
    hit_pause: Countdown,
    camera: Camera,
    hud: Hud,
    observers: ObserverRegistry,
}

impl GameSession {
    /// Validates `config` and builds level 1.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        config.validate()?;

        let world = World::new(config.seed, &config.game);
        let camera = Camera::new(config.viewport_width, config.seed ^ CAMERA_STREAM);
        let hud = Hud::new(config.game.player.max_hp, config.elo_start);
        let mut session = Self {
            elo: config.elo_start,
            config,
            world,
            status: SessionStatus::Playing,
            frame: 0,
            hit_pause: Countdown::EXPIRED,
            camera,
            hud,
            observers: ObserverRegistry::new(),
        };

        let mut events = Vec::new();
        session.load_level(1, &mut events);
        session.dispatch(events);
        Ok(session)
    }

    pub fn register_observer(&mut self, observer: impl SessionObserver + 'static) {
        debug!(observer = observer.name(), "observer registered");
        self.observers.register(observer);
    }

    /// Advances one frame.
    ///
    /// `raw_dt` is capped to `max_dt`. While a hit pause is running the frame
    /// only counts it down. A dead player stops the simulation, but the camera
    /// and HUD keep updating.
    pub fn tick(&mut self, raw_dt: f32, input: InputSnapshot) -> TickReport {
        self.frame += 1;
        let dt = if raw_dt.is_finite() {
            raw_dt.clamp(0.0, self.config.max_dt)
        } else {
            0.0
        };
        let mut report = TickReport {
            frame: self.frame,
            dt,
            simulated: false,
            status: self.status,
            events: Vec::new(),
        };

        if self.status == SessionStatus::Paused {
            return report;
        }
        if self.hit_pause.is_running() {
            self.hit_pause.tick(dt);
            return report;
        }

        if self.world.entities.player.is_alive() {
            let mut events = Vec::new();
            self.world.step(dt, input, &self.config.game, &mut events);
            report.simulated = true;
            report.events = self.dispatch(events);
        }

        let player = &self.world.entities.player;
        self.camera
            .update(dt, player.body.center_x(), &self.config.camera);
        self.hud.update(
            dt,
            HudInput {
                hp: player.health().current(),
                max_hp: player.health().max(),
                elo: self.elo,
                level: self.world.level.level(),
                message: self.world.level.message(),
                game_over: self.status == SessionStatus::GameOver,
            },
            &self.config.hud,
        );

        report.status = self.status;
        report
    }

    /// Applies and forwards events until no new ones appear (level loads emit
    /// their own). Returns everything that was dispatched, in order.
    fn dispatch(&mut self, mut pending: Vec<GameEvent>) -> Vec<GameEvent> {
        let mut dispatched = Vec::with_capacity(pending.len());
        while !pending.is_empty() {
            let mut follow_up = Vec::new();
            for event in pending {
                self.apply(&event, &mut follow_up);
                self.observers.notify(self.frame, &event);
                dispatched.push(event);
            }
            pending = follow_up;
        }
        dispatched
    }

    fn apply(&mut self, event: &GameEvent, follow_up: &mut Vec<GameEvent>) {
        match *event {
            GameEvent::EloGained { amount, source } => {
                self.elo = self.elo.saturating_add(amount);
                debug!(amount, %source, elo = self.elo, "elo gained");
            }
            GameEvent::Hit(kind) => {
                trace!(%kind, "hit");
                self.hit_pause.start(self.config.hit_pause);
                let intensity = Camera::shake_for(kind, &self.config.camera);
                self.camera.shake(intensity, &self.config.camera);
                if kind == HitKind::BossDeath {
                    debug!("boss defeated");
                }
            }
            GameEvent::BossPhaseTwo { boss } => debug!(%boss, "boss entered phase 2"),
            GameEvent::BossSpawned { boss, level } => debug!(%boss, level, "boss spawned"),
            GameEvent::PlayerDied => {
                self.status = SessionStatus::GameOver;
                debug!(frame = self.frame, elo = self.elo, "player died");
            }
            GameEvent::LevelCleared { level } => debug!(level, "level cleared"),
            GameEvent::LevelComplete { next_level } => {
                debug!(next_level, "level complete");
                self.load_level(next_level, follow_up);
            }
            GameEvent::LevelStarted { .. }
            | GameEvent::OrbSpawned { .. }
            | GameEvent::OrbCollected { .. } => {}
        }
    }

    fn load_level(&mut self, level: u32, events: &mut Vec<GameEvent>) {
        self.world.load_level(level, &self.config.game, events);
        let player = &self.world.entities.player;
        self.camera.set_world_width(self.world.level.world_width());
        self.camera.snap_to(player.body.center_x());
        info!(
            level,
            world_width = self.world.level.world_width(),
            mobs = self.world.entities.mobs.len(),
            "level loaded"
        );
    }

    /// Flips between playing and paused; no effect after game over.
    pub fn toggle_pause(&mut self) -> SessionStatus {
        self.status = match self.status {
            SessionStatus::Playing => SessionStatus::Paused,
            SessionStatus::Paused => SessionStatus::Playing,
            SessionStatus::GameOver => SessionStatus::GameOver,
        };
        self.status
    }

    #[inline]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[inline]
    pub fn elo(&self) -> u32 {
        self.elo
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn level(&self) -> u32 {
        self.world.level.level()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct access for tools and tests that stage scenarios.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn is_hit_paused(&self) -> bool {
        self.hit_pause.is_running()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn frame_view(&self) -> FrameView {
        FrameView::capture(&self.world, &self.config.game)
    }
}
