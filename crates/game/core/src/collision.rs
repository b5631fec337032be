//! Collision and hit resolution.
//!
//! [`resolve`] runs once per tick after every entity has moved, in a fixed
//! order: ground and platforms (player, live mobs, boss), player offense,
//! hostile offense, orb pickups. Landing always happens before combat, so
//! hits are tested against settled positions.

use crate::body::Body;
use crate::combat::{AttackerId, HitKind};
use crate::config::GameConfig;
use crate::events::{EventSink, GameEvent};
use crate::hostile::Hostile;
use crate::level::LevelGeometry;
use crate::math::Rect;
use crate::world::Entities;

/// A body whose bottom is this close above a surface counts as standing on it.
const REST_TOLERANCE: f32 = 0.5;

pub fn resolve(
    entities: &mut Entities,
    geometry: &LevelGeometry,
    config: &GameConfig,
    events: &mut impl EventSink,
) {
    settle_all(entities, geometry, config);
    player_offense(entities, config, events);
    hostile_offense(entities, config, events);
    orb_pickups(entities, config, events);
}

fn settle_all(entities: &mut Entities, geometry: &LevelGeometry, config: &GameConfig) {
    let floor_y = config.physics.floor_y();

    let player = &mut entities.player;
    if let Some(surface_y) = settle(&mut player.body, geometry, floor_y) {
        player.land_on(surface_y, &config.feel);
    }

    // Dead hostiles are frozen in place for their fade.
    for hostile in entities.hostiles_mut().filter(|h| !h.is_dead()) {
        settle(&mut hostile.body, geometry, floor_y);
    }
}

/// Lands `body` on whatever it fell onto and returns the last surface top.
///
/// Surfaces are one-way from below. Only the ground pushes out sideways.
fn settle(body: &mut Body, geometry: &LevelGeometry, floor_y: f32) -> Option<f32> {
    let mut landed = None;

    for (index, surface) in geometry.surfaces().enumerate() {
        let bounds = body.bounds();
        if !bounds.overlaps(surface) {
            if resting_on(body, surface) {
                body.land_on(surface.y);
                landed = Some(surface.y);
            }
            continue;
        }

        let overlap = bounds.resolve(surface);
        if overlap.y.abs() < overlap.x.abs() {
            if overlap.y < 0.0 {
                body.land_on(surface.y);
                landed = Some(surface.y);
            }
        } else if index == 0 {
            body.x += overlap.x;
            if (overlap.x > 0.0 && body.vx < 0.0) || (overlap.x < 0.0 && body.vx > 0.0) {
                body.vx = 0.0;
            }
        }
    }

    if body.y + body.height >= floor_y && landed.is_none() {
        body.land_on(floor_y);
        landed = Some(floor_y);
    }
    landed
}

/// Bottom edge touching the surface top while not moving upward.
fn resting_on(body: &Body, surface: &Rect) -> bool {
    let bottom = body.y + body.height;
    body.vy >= 0.0
        && body.x < surface.right()
        && body.x + body.width > surface.x
        && bottom <= surface.y
        && surface.y - bottom <= REST_TOLERANCE
}

fn player_offense(entities: &mut Entities, config: &GameConfig, events: &mut impl EventSink) {
    let Entities {
        player, mobs, boss, ..
    } = entities;
    let hostiles = mobs.iter_mut().chain(boss.iter_mut());

    let hitbox = player
        .attack_hitbox()
        .filter(|_| player.mode().is_attacking());
    let Some(hitbox) = hitbox else {
        for hostile in hostiles {
            hostile.struck_by.release(AttackerId::Player);
        }
        return;
    };

    let source_x = player.body.center_x();
    let mut orb_drops = Vec::new();

    for hostile in hostiles {
        if hostile.is_dead()
            || !hitbox.overlaps(&hostile.body.bounds())
            || !hostile.struck_by.try_register(AttackerId::Player)
        {
            continue;
        }

        let Some(outcome) = hostile.take_hit(config.player.attack_damage, source_x, config) else {
            continue;
        };

        if outcome.landed() {
            if player.register_successful_hit(config.orb.hits_required) {
                orb_drops.push((hostile.body.center_x(), hostile.body.center_y()));
            }
            events.emit(GameEvent::Hit(if hostile.is_boss() {
                HitKind::BossHit
            } else {
                HitKind::MobHit
            }));
        }
        if outcome.entered_phase2 {
            events.emit(GameEvent::BossPhaseTwo { boss: hostile.id() });
        }
        if outcome.killed() {
            events.emit(GameEvent::EloGained {
                amount: hostile.elo_value(config),
                source: hostile.id(),
            });
            if hostile.is_boss() {
                events.emit(GameEvent::Hit(HitKind::BossDeath));
            }
        }
    }

    for (x, y) in orb_drops {
        entities.spawn_orb(x, y, &config.orb);
        events.emit(GameEvent::OrbSpawned { x, y });
    }
}

fn hostile_offense(entities: &mut Entities, config: &GameConfig, events: &mut impl EventSink) {
    let Entities {
        player, mobs, boss, ..
    } = entities;

    if player.is_alive() {
        for hostile in mobs.iter().chain(boss.iter()) {
            if hostile.is_dead() {
                continue;
            }
            let Some(hitbox) = hostile.attack_hitbox() else {
                continue;
            };
            let attacker = attacker_of(hostile);
            if !hitbox.overlaps(&player.body.bounds())
                || !player.struck_by.try_register(attacker)
            {
                continue;
            }

            if player.take_hit(hostile.damage(config), hostile.body.center_x(), &config.player) {
                events.emit(GameEvent::Hit(HitKind::PlayerHit));
                if !player.is_alive() {
                    events.emit(GameEvent::PlayerDied);
                }
            }
        }
    }

    // Re-arm every attacker whose swing ended or who is gone.
    player.struck_by.release_where(|attacker| {
        !mobs
            .iter()
            .chain(boss.iter())
            .any(|h| attacker_of(h) == attacker && !h.is_dead() && h.attack_hitbox().is_some())
    });
}

fn orb_pickups(entities: &mut Entities, config: &GameConfig, events: &mut impl EventSink) {
    let player = &mut entities.player;
    if !player.is_alive() {
        return;
    }
    let bounds = player.body.bounds();
    for orb in entities.orbs.iter_mut().filter(|o| o.is_active()) {
        if bounds.overlaps(&orb.bounds())
            && let Some(heal) = orb.pickup()
        {
            player.heal(heal, &config.feel);
            events.emit(GameEvent::OrbCollected { heal });
        }
    }
}

fn attacker_of(hostile: &Hostile) -> AttackerId {
    AttackerId::Hostile(hostile.id().0)
}
