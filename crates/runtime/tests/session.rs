use std::sync::{Arc, Mutex};

use brawl_core::{GameEvent, HitKind, Hostile, HostileId, InputSnapshot, WavePhase};
use brawl_runtime::{GameSession, RuntimeConfig, SessionObserver, SessionStatus, TickReport};

const FRAME: f32 = 1.0 / 60.0;

fn session() -> GameSession {
    GameSession::new(RuntimeConfig::default()).expect("default config is valid")
}

/// Ticks until `done` holds for a report, or panics after `limit` frames.
fn run_until(
    session: &mut GameSession,
    limit: usize,
    mut done: impl FnMut(&TickReport) -> bool,
) -> Vec<GameEvent> {
    let mut seen = Vec::new();
    for _ in 0..limit {
        let report = session.tick(FRAME, InputSnapshot::empty());
        seen.extend(report.events.iter().cloned());
        if done(&report) {
            return seen;
        }
    }
    panic!("condition not reached within {limit} frames");
}

fn settle(session: &mut GameSession) {
    for _ in 0..10 {
        session.tick(FRAME, InputSnapshot::empty());
    }
}

#[test]
fn starts_on_level_one() {
    let session = session();
    assert_eq!(session.level(), 1);
    assert_eq!(session.status(), SessionStatus::Playing);
    assert_eq!(session.elo(), 1000);
    assert_eq!(session.camera().x(), 0.0);
    assert_eq!(session.world().entities.mobs.len(), 5);
    assert_eq!(session.world().level.phase(), WavePhase::WaveActive);
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = RuntimeConfig::default();
    config.game.orb.lifetime = -1.0;
    assert!(GameSession::new(config).is_err());

    let mut config = RuntimeConfig::default();
    config.max_dt = 0.0;
    assert!(GameSession::new(config).is_err());
}

#[test]
fn frame_time_is_capped() {
    let mut session = session();
    let report = session.tick(1.0, InputSnapshot::empty());
    assert_eq!(report.dt, 0.05);
    assert!(report.simulated);

    let report = session.tick(f32::NAN, InputSnapshot::empty());
    assert_eq!(report.dt, 0.0);
}

#[test]
fn pause_freezes_the_world() {
    let mut session = session();
    settle(&mut session);
    let before = session.frame_view();

    assert_eq!(session.toggle_pause(), SessionStatus::Paused);
    for _ in 0..30 {
        let report = session.tick(FRAME, InputSnapshot::RIGHT);
        assert!(!report.simulated);
        assert_eq!(report.status, SessionStatus::Paused);
    }
    assert_eq!(session.frame_view(), before);
    assert_eq!(session.frame(), 40);

    assert_eq!(session.toggle_pause(), SessionStatus::Playing);
    assert!(session.tick(FRAME, InputSnapshot::RIGHT).simulated);
}

#[test]
fn killing_blow_grants_elo_and_hit_pause() {
    let mut session = session();
    settle(&mut session);

    let config = session.config().game.clone();
    let world = session.world_mut();
    let player_x = world.entities.player.body.x;
    let ground_y = world.level.geometry().ground_y();
    let mut mob = Hostile::mob(HostileId(900), player_x + 40.0, ground_y - 55.0, 1, &config);
    mob.take_hit(30.0, 0.0, &config);
    world.entities.mobs.insert(0, mob);

    let report = session.tick(FRAME, InputSnapshot::ATTACK);
    assert!(report.events.contains(&GameEvent::Hit(HitKind::MobHit)));
    assert!(report.events.contains(&GameEvent::EloGained {
        amount: 10,
        source: HostileId(900),
    }));
    assert_eq!(session.elo(), 1010);
    assert!(session.is_hit_paused());

    // 0.04 s of hit pause at 60 fps swallows three frames.
    let mut paused_frames = 0;
    while !session.tick(FRAME, InputSnapshot::empty()).simulated {
        paused_frames += 1;
        assert!(paused_frames <= 3);
    }
    assert_eq!(paused_frames, 3);
}

#[test]
fn clearing_wave_and_boss_advances_level() {
    let mut session = session();
    let config = session.config().game.clone();

    for mob in &mut session.world_mut().entities.mobs {
        mob.take_hit(10_000.0, 0.0, &config);
    }
    let events = run_until(&mut session, 120, |r| {
        r.events
            .iter()
            .any(|e| matches!(e, GameEvent::BossSpawned { .. }))
    });
    assert!(events.iter().any(|e| matches!(e, GameEvent::BossSpawned { level: 1, .. })));
    assert_eq!(session.world().level.message(), Some("BOSS INCOMING!"));
    assert!(session.world().entities.mobs.is_empty());
    assert!(session.world().entities.boss.is_some());

    if let Some(boss) = session.world_mut().entities.boss.as_mut() {
        boss.take_hit(10_000.0, 0.0, &config);
    }
    let events = run_until(&mut session, 300, |r| {
        r.events.contains(&GameEvent::LevelStarted { level: 2 })
    });
    let cleared = events
        .iter()
        .position(|e| *e == GameEvent::LevelCleared { level: 1 })
        .expect("level cleared");
    let complete = events
        .iter()
        .position(|e| *e == GameEvent::LevelComplete { next_level: 2 })
        .expect("level complete");
    assert!(cleared < complete);

    assert_eq!(session.level(), 2);
    assert_eq!(session.world().entities.mobs.len(), 7);
    assert_eq!(session.world().level.world_width(), 3500.0);
    assert_eq!(session.world().entities.player.body.x, 200.0);
}

#[test]
fn player_death_ends_the_session() {
    let mut session = session();
    let config = session.config().game.clone();
    session
        .world_mut()
        .entities
        .player
        .take_hit(95.0, -1000.0, &config.player);

    let events = run_until(&mut session, 1200, |r| r.status == SessionStatus::GameOver);
    let died = events
        .iter()
        .position(|e| *e == GameEvent::PlayerDied)
        .expect("player died");
    assert_eq!(events[died - 1], GameEvent::Hit(HitKind::PlayerHit));

    // Let the hit pause run out.
    for _ in 0..5 {
        session.tick(FRAME, InputSnapshot::empty());
    }
    let report = session.tick(FRAME, InputSnapshot::ATTACK);
    assert!(!report.simulated);
    assert_eq!(report.status, SessionStatus::GameOver);
    assert!(session.hud().game_over);
    assert_eq!(session.toggle_pause(), SessionStatus::GameOver);
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<GameEvent>>>);

impl SessionObserver for Recorder {
    fn name(&self) -> &'static str {
        "recorder"
    }

    fn on_event(&mut self, _frame: u64, event: &GameEvent) {
        self.0.lock().unwrap().push(event.clone());
    }
}

#[test]
fn observers_see_every_event() {
    let mut session = session();
    let recorder = Recorder::default();
    session.register_observer(recorder.clone());

    let config = session.config().game.clone();
    for mob in &mut session.world_mut().entities.mobs {
        mob.take_hit(10_000.0, 0.0, &config);
    }
    let events = run_until(&mut session, 120, |r| !r.events.is_empty());
    assert_eq!(*recorder.0.lock().unwrap(), events);
}

#[test]
fn same_seed_same_session() {
    let script = |frame: usize| match frame % 90 {
        0..=40 => InputSnapshot::RIGHT,
        41 => InputSnapshot::RIGHT | InputSnapshot::JUMP,
        60 => InputSnapshot::ATTACK,
        75 => InputSnapshot::DASH | InputSnapshot::LEFT,
        _ => InputSnapshot::empty(),
    };

    let mut a = session();
    let mut b = session();
    for frame in 0..600 {
        let ra = a.tick(FRAME, script(frame));
        let rb = b.tick(FRAME, script(frame));
        assert_eq!(ra, rb);
    }
    assert_eq!(a.frame_view(), b.frame_view());
    assert_eq!(a.hud(), b.hud());
}
