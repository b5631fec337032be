//! Mobs and the boss.
//!
//! Both are a single [`Hostile`] record tagged with a [`HostileKind`]. The shared
//! state machine lives here; kind-specific decisions come from the trees in
//! [`ai`] and the boss extras in [`boss`].

pub mod ai;
pub mod boss;

pub use ai::{Blackboard, Decision, HostileBrains};
pub use boss::{BossExtras, Charge};

use crate::body::{Body, Facing};
use crate::combat::{HitLedger, Knockback, apply_damage};
use crate::config::GameConfig;
use crate::math::{Rect, distance};
use crate::timer::Countdown;

/// Mob strike box width relative to the attack range.
const MOB_STRIKE_REACH: f32 = 1.2;
const MOB_STRIKE_HEIGHT: f32 = 36.0;
const BOSS_STRIKE_HEIGHT: f32 = 48.0;
/// How far the charge box reaches back into the body when facing left.
const CHARGE_BODY_OVERLAP: f32 = 10.0;

/// Identity assigned by the level controller; unique within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostileId(pub u32);

impl std::fmt::Display for HostileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum HostileState {
    /// Not engaged: mobs patrol around their spawn, the boss stands still.
    #[default]
    Idle,
    Chase,
    Attacking,
    Stunned,
    /// Terminal. Frozen in place until the fade finishes.
    Dead,
}

/// Melee strike window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostileAttack {
    #[default]
    Idle,
    Active(Countdown),
}

/// Patrol bookkeeping around the spawn anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Patrol {
    pub spawn_x: f32,
    direction: Facing,
    elapsed: f32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostileKind {
    Mob(Patrol),
    Boss(BossExtras),
}

/// What a hostile needs to know about the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub center_x: f32,
    pub center_y: f32,
}

/// Result of a hit on a living hostile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitOutcome {
    pub hp_before: f32,
    pub hp_after: f32,
    pub entered_phase2: bool,
}

impl HitOutcome {
    /// Hp actually dropped from a positive value.
    pub fn landed(&self) -> bool {
        self.hp_before > 0.0 && self.hp_after < self.hp_before
    }

    pub fn killed(&self) -> bool {
        self.hp_after <= 0.0
    }
}

/// Kind-dependent tuning read from the config.
struct Tuning {
    damage: f32,
    attack_range: f32,
    attack_duration: f32,
    stun_duration: f32,
    stun_decay: f32,
    knockback: Knockback,
    death_duration: f32,
    elo_value: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hostile {
    id: HostileId,
    pub kind: HostileKind,
    pub body: Body,
    facing: Facing,
    state: HostileState,
    hp: f32,
    max_hp: f32,
    speed: f32,
    /// Seconds between attack starts; shortened by boss phase 2.
    attack_interval: f32,
    attack: HostileAttack,
    attack_cooldown: Countdown,
    attack_hitbox: Option<Rect>,
    stun: Countdown,
    fade: Countdown,
    fade_total: f32,
    remove: bool,
    /// Player swings that already landed on this hostile.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub struck_by: HitLedger,
}

impl Hostile {
    pub fn mob(id: HostileId, x: f32, y: f32, level: u32, config: &GameConfig) -> Self {
        let mob = &config.mob;
        Self::with_kind(
            id,
            HostileKind::Mob(Patrol {
                spawn_x: x,
                direction: Facing::Right,
                elapsed: 0.0,
            }),
            Body::new(x, y, mob.width, mob.height),
            mob.max_hp(level),
            mob.speed(level),
            mob.attack_cooldown,
        )
    }

    pub fn boss(id: HostileId, x: f32, y: f32, level: u32, config: &GameConfig) -> Self {
        let boss = &config.boss;
        Self::with_kind(
            id,
            HostileKind::Boss(BossExtras::new(boss)),
            Body::new(x, y, boss.width, boss.height),
            boss.max_hp(level),
            boss.speed(level),
            boss.attack_cooldown,
        )
    }

    fn with_kind(
        id: HostileId,
        kind: HostileKind,
        body: Body,
        max_hp: f32,
        speed: f32,
        attack_interval: f32,
    ) -> Self {
        Self {
            id,
            kind,
            body,
            facing: Facing::Left,
            state: HostileState::Idle,
            hp: max_hp,
            max_hp,
            speed,
            attack_interval,
            attack: HostileAttack::Idle,
            attack_cooldown: Countdown::EXPIRED,
            attack_hitbox: None,
            stun: Countdown::EXPIRED,
            fade: Countdown::EXPIRED,
            fade_total: 0.0,
            remove: false,
            struck_by: HitLedger::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> HostileId {
        self.id
    }

    #[inline]
    pub fn is_boss(&self) -> bool {
        matches!(self.kind, HostileKind::Boss(_))
    }

    pub fn boss_extras(&self) -> Option<&BossExtras> {
        match &self.kind {
            HostileKind::Boss(extras) => Some(extras),
            HostileKind::Mob(_) => None,
        }
    }

    #[inline]
    pub fn state(&self) -> HostileState {
        self.state
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.state == HostileState::Dead
    }

    #[inline]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    #[inline]
    pub fn hp(&self) -> f32 {
        self.hp
    }

    #[inline]
    pub fn max_hp(&self) -> f32 {
        self.max_hp
    }

    pub fn hp_ratio(&self) -> f32 {
        if self.max_hp <= 0.0 { 0.0 } else { self.hp / self.max_hp }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn attack_interval(&self) -> f32 {
        self.attack_interval
    }

    #[inline]
    pub fn attack_hitbox(&self) -> Option<Rect> {
        self.attack_hitbox
    }

    /// Set once the death fade has finished; the level controller evicts it.
    #[inline]
    pub fn should_remove(&self) -> bool {
        self.remove
    }

    /// Death fade progress in [0, 1]; 0 while alive.
    pub fn death_progress(&self) -> f32 {
        if self.is_dead() {
            self.fade.elapsed_fraction(self.fade_total)
        } else {
            0.0
        }
    }

    pub fn damage(&self, config: &GameConfig) -> f32 {
        self.tuning(config).damage
    }

    pub fn elo_value(&self, config: &GameConfig) -> u32 {
        self.tuning(config).elo_value
    }

    fn tuning(&self, config: &GameConfig) -> Tuning {
        match self.kind {
            HostileKind::Mob(_) => {
                let mob = &config.mob;
                Tuning {
                    damage: mob.damage,
                    attack_range: mob.attack_range,
                    attack_duration: mob.attack_duration,
                    stun_duration: mob.stun_duration,
                    stun_decay: mob.stun_decay,
                    knockback: Knockback::new(mob.knockback_x, mob.knockback_y),
                    death_duration: mob.death_duration,
                    elo_value: mob.elo_value,
                }
            }
            HostileKind::Boss(_) => {
                let boss = &config.boss;
                Tuning {
                    damage: boss.damage,
                    attack_range: boss.attack_range,
                    attack_duration: boss.attack_duration,
                    stun_duration: boss.stun_duration,
                    stun_decay: boss.stun_decay,
                    knockback: Knockback::new(boss.knockback_x, boss.knockback_y),
                    death_duration: config.mob.death_duration * boss.death_duration_mult,
                    elo_value: boss.elo_value,
                }
            }
        }
    }

    /// Applies a hit from `source_x`. `None` if already dead.
    pub fn take_hit(
        &mut self,
        damage: f32,
        source_x: f32,
        config: &GameConfig,
    ) -> Option<HitOutcome> {
        if self.is_dead() {
            return None;
        }
        let tuning = self.tuning(config);
        let hp_before = self.hp;
        self.hp = apply_damage(self.hp, damage);

        let (vx, vy) = tuning.knockback.velocity(self.body.away_from(source_x));
        self.body.vx = vx;
        self.body.vy = vy;

        let mut entered_phase2 = false;
        if let HostileKind::Boss(extras) = &mut self.kind
            && self.hp / self.max_hp <= config.boss.phase2_threshold
            && let Some((speed_mult, cooldown_mult)) = extras.enter_phase2(&config.boss)
        {
            self.speed *= speed_mult;
            self.attack_interval *= cooldown_mult;
            entered_phase2 = true;
        }

        self.attack = HostileAttack::Idle;
        self.attack_hitbox = None;
        if let HostileKind::Boss(extras) = &mut self.kind {
            extras.charge = Charge::Idle;
        }

        if self.hp <= 0.0 {
            self.die(tuning.death_duration);
        } else {
            self.state = HostileState::Stunned;
            self.stun.start(tuning.stun_duration);
        }

        Some(HitOutcome {
            hp_before,
            hp_after: self.hp,
            entered_phase2,
        })
    }

    fn die(&mut self, fade: f32) {
        self.state = HostileState::Dead;
        self.fade.start(fade);
        self.fade_total = fade;
        self.body.vx = 0.0;
        self.body.vy = 0.0;
    }

    /// Advances one tick. `target` is the living player, if any.
    ///
    /// Ground contact is cleared at the end; collision restores it.
    pub fn update(
        &mut self,
        dt: f32,
        target: Option<Target>,
        world_width: f32,
        config: &GameConfig,
        brains: &HostileBrains,
    ) {
        if self.is_dead() {
            self.attack_hitbox = None;
            if self.fade.tick(dt) {
                self.remove = true;
            }
            return;
        }

        let tuning = self.tuning(config);
        if !self.body.on_ground {
            self.body.apply_gravity(config.physics.gravity, dt);
        }

        if self.state == HostileState::Stunned {
            self.tick_stun(dt, &tuning);
        } else {
            self.tick_engaged(dt, target, &tuning, config, brains);
        }

        self.body.integrate(dt);
        self.body.clamp_to_world(world_width);
        self.refresh_hitbox(&tuning, config);
        self.body.on_ground = false;
    }

    fn tick_stun(&mut self, dt: f32, tuning: &Tuning) {
        self.stun.tick(dt);
        self.body.vx *= tuning.stun_decay;
        if self.stun.is_expired() {
            self.state = HostileState::Chase;
        }
    }

    fn tick_engaged(
        &mut self,
        dt: f32,
        target: Option<Target>,
        tuning: &Tuning,
        config: &GameConfig,
        brains: &HostileBrains,
    ) {
        self.attack_cooldown.tick(dt);
        if let HostileKind::Boss(extras) = &mut self.kind {
            extras.charge_cooldown.tick(dt);
            extras.tick_warning(dt, config.boss.warn_flash_interval);

            if let Charge::Active(mut window) = extras.charge {
                window.tick(dt);
                if window.is_expired() {
                    extras.charge = Charge::Idle;
                    self.body.vx = 0.0;
                    self.state = HostileState::Chase;
                } else {
                    extras.charge = Charge::Active(window);
                }
                return;
            }
        }

        if let HostileAttack::Active(mut window) = self.attack {
            window.tick(dt);
            self.body.vx = 0.0;
            if window.is_expired() {
                self.attack = HostileAttack::Idle;
                self.state = HostileState::Chase;
            } else {
                self.attack = HostileAttack::Active(window);
            }
            return;
        }

        let decision = self.decide(target, tuning, config, brains);
        self.act(decision, dt, target, tuning, config);
    }

    fn decide(
        &self,
        target: Option<Target>,
        tuning: &Tuning,
        config: &GameConfig,
        brains: &HostileBrains,
    ) -> Decision {
        let (cx, cy) = (self.body.center_x(), self.body.center_y());
        let mut board = Blackboard {
            has_target: target.is_some(),
            attack_range: tuning.attack_range,
            attack_ready: self.attack_cooldown.is_expired(),
            ..Blackboard::default()
        };

        match &self.kind {
            HostileKind::Mob(_) => {
                board.distance =
                    target.map_or(0.0, |t| distance(cx, cy, t.center_x, t.center_y));
                board.chase_range = config.mob.chase_range;
                brains.decide_mob(&mut board)
            }
            HostileKind::Boss(extras) => {
                board.distance = target.map_or(0.0, |t| (t.center_x - cx).abs());
                board.chase_range = f32::INFINITY;
                board.charge_ready = board.has_target
                    && extras.charge_ready()
                    && board.distance > config.boss.charge_min_distance;
                brains.decide_boss(&mut board)
            }
        }
    }

    fn act(
        &mut self,
        decision: Decision,
        dt: f32,
        target: Option<Target>,
        tuning: &Tuning,
        config: &GameConfig,
    ) {
        match decision {
            Decision::Hold => {
                self.state = HostileState::Idle;
                self.body.vx = 0.0;
            }
            Decision::Patrol => self.patrol(dt, config),
            Decision::Chase => {
                self.face(target);
                self.state = HostileState::Chase;
                self.body.vx = self.facing.sign() * self.speed;
            }
            Decision::Attack => {
                self.face(target);
                self.state = HostileState::Attacking;
                self.attack = HostileAttack::Active(Countdown::new(tuning.attack_duration));
                self.attack_cooldown.start(self.attack_interval);
                self.body.vx = 0.0;
            }
            Decision::Charge => {
                self.face(target);
                let HostileKind::Boss(extras) = &mut self.kind else {
                    return;
                };
                extras.charge = Charge::Active(Countdown::new(config.boss.charge_duration));
                extras.charge_cooldown.start(extras.charge_interval);
                self.state = HostileState::Attacking;
                self.body.vx = self.facing.sign() * self.speed * config.boss.charge_speed_mult;
            }
        }
    }

    fn face(&mut self, target: Option<Target>) {
        if let Some(target) = target {
            self.facing = Facing::from_sign(target.center_x - self.body.center_x());
        }
    }

    fn patrol(&mut self, dt: f32, config: &GameConfig) {
        self.state = HostileState::Idle;
        let HostileKind::Mob(patrol) = &mut self.kind else {
            self.body.vx = 0.0;
            return;
        };
        let mob = &config.mob;

        patrol.elapsed += dt;
        if self.body.x <= patrol.spawn_x - mob.patrol_range {
            patrol.direction = Facing::Right;
        }
        if self.body.x >= patrol.spawn_x + mob.patrol_range {
            patrol.direction = Facing::Left;
        }
        if patrol.elapsed > mob.patrol_flip_interval {
            patrol.direction = patrol.direction.flipped();
            patrol.elapsed = 0.0;
        }

        self.facing = patrol.direction;
        self.body.vx = patrol.direction.sign() * self.speed * mob.patrol_speed_factor;
    }

    fn refresh_hitbox(&mut self, tuning: &Tuning, config: &GameConfig) {
        let charging = self.boss_extras().is_some_and(BossExtras::is_charging);
        self.attack_hitbox = if charging {
            Some(self.charge_box(config.boss.charge_reach))
        } else if matches!(self.attack, HostileAttack::Active(_)) {
            Some(self.strike_box(tuning.attack_range))
        } else {
            None
        };
    }

    fn strike_box(&self, attack_range: f32) -> Rect {
        let (width, height) = match self.kind {
            HostileKind::Mob(_) => (attack_range * MOB_STRIKE_REACH, MOB_STRIKE_HEIGHT),
            HostileKind::Boss(_) => (attack_range, BOSS_STRIKE_HEIGHT),
        };
        let x = match self.facing {
            Facing::Right => self.body.x + self.body.width,
            Facing::Left => self.body.x - width,
        };
        Rect::new(x, self.body.center_y() - height / 2.0, width, height)
    }

    fn charge_box(&self, reach: f32) -> Rect {
        let x = match self.facing {
            Facing::Right => self.body.x + self.body.width,
            Facing::Left => self.body.x - (reach - CHARGE_BODY_OVERLAP),
        };
        Rect::new(x, self.body.y, reach, self.body.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: f32 = 3000.0;

    fn target_at(x: f32, y: f32) -> Option<Target> {
        Some(Target {
            center_x: x,
            center_y: y,
        })
    }

    /// Ticks while standing on the ground, as collision would keep it.
    fn tick(hostile: &mut Hostile, dt: f32, target: Option<Target>, config: &GameConfig) {
        let brains = HostileBrains::new();
        hostile.body.on_ground = true;
        hostile.update(dt, target, WORLD, config, &brains);
    }

    #[test]
    fn player_strike_stuns_mob() {
        let config = GameConfig::default();
        let mut mob = Hostile::mob(HostileId(1), 120.0, 605.0, 1, &config);
        let outcome = mob.take_hit(20.0, 118.0, &config).expect("alive");

        assert!(outcome.landed());
        assert!(!outcome.killed());
        assert_eq!(mob.hp(), 20.0);
        assert_eq!(mob.state(), HostileState::Stunned);
        assert_eq!(mob.body.vx, 200.0);
        assert_eq!(mob.body.vy, -150.0);
    }

    #[test]
    fn stun_decays_knockback_then_chases() {
        let config = GameConfig::default();
        let mut mob = Hostile::mob(HostileId(1), 500.0, 605.0, 1, &config);
        mob.take_hit(5.0, 0.0, &config);
        tick(&mut mob, 0.25, None, &config);
        assert!((mob.body.vx - 170.0).abs() < 1e-3);
        assert_eq!(mob.state(), HostileState::Stunned);
        assert!(mob.attack_hitbox().is_none());

        tick(&mut mob, 0.25, None, &config);
        assert_eq!(mob.state(), HostileState::Chase);
    }

    #[test]
    fn lethal_hit_clamps_and_waits_for_fade() {
        let config = GameConfig::default();
        let mut mob = Hostile::mob(HostileId(1), 500.0, 605.0, 1, &config);
        mob.take_hit(30.0, 0.0, &config);
        assert_eq!(mob.hp(), 10.0);

        let outcome = mob.take_hit(15.0, 0.0, &config).expect("alive");
        assert!(outcome.killed());
        assert_eq!(mob.hp(), 0.0);
        assert_eq!(mob.state(), HostileState::Dead);
        assert!(!mob.should_remove());

        let (x, y) = (mob.body.x, mob.body.y);
        for _ in 0..4 {
            tick(&mut mob, 0.1, target_at(510.0, 630.0), &config);
        }
        assert!(!mob.should_remove());
        assert!(mob.death_progress() > 0.7);
        assert_eq!((mob.body.x, mob.body.y), (x, y));

        tick(&mut mob, 0.1, None, &config);
        assert!(mob.should_remove());
        assert_eq!(mob.death_progress(), 1.0);
        assert!(mob.take_hit(10.0, 0.0, &config).is_none());
        assert_eq!(mob.state(), HostileState::Dead);
    }

    #[test]
    fn attacks_in_range_then_returns_to_chase() {
        let config = GameConfig::default();
        let mut mob = Hostile::mob(HostileId(1), 100.0, 605.0, 1, &config);
        let player = target_at(150.0, 632.5);

        tick(&mut mob, 0.1, player, &config);
        assert_eq!(mob.state(), HostileState::Attacking);
        assert_eq!(mob.facing(), Facing::Right);
        assert_eq!(mob.body.vx, 0.0);
        let hitbox = mob.attack_hitbox().expect("strike box");
        assert_eq!(hitbox.x, 140.0);
        assert_eq!(hitbox.width, 60.0);
        assert_eq!(hitbox.height, 36.0);

        for _ in 0..2 {
            tick(&mut mob, 0.1, player, &config);
            assert_eq!(mob.state(), HostileState::Attacking);
        }
        tick(&mut mob, 0.1, player, &config);
        assert_eq!(mob.state(), HostileState::Chase);
        assert!(mob.attack_hitbox().is_none());

        // Cooldown (1.2 s from the swing start) still running.
        tick(&mut mob, 0.1, player, &config);
        assert_eq!(mob.state(), HostileState::Chase);
        assert!(mob.attack_hitbox().is_none());
    }

    #[test]
    fn strike_box_faces_left() {
        let config = GameConfig::default();
        let mut mob = Hostile::mob(HostileId(1), 300.0, 605.0, 1, &config);
        tick(&mut mob, 0.1, target_at(290.0, 632.5), &config);
        let hitbox = mob.attack_hitbox().expect("strike box");
        assert_eq!(hitbox.x, 240.0);
    }

    #[test]
    fn chases_within_range_and_patrols_outside() {
        let config = GameConfig::default();
        let mut mob = Hostile::mob(HostileId(1), 1000.0, 605.0, 1, &config);
        tick(&mut mob, 0.01, target_at(820.0, 632.5), &config);
        assert_eq!(mob.state(), HostileState::Chase);
        assert_eq!(mob.body.vx, -90.0);

        let mut far = Hostile::mob(HostileId(2), 1000.0, 605.0, 1, &config);
        tick(&mut far, 0.01, target_at(2000.0, 632.5), &config);
        assert_eq!(far.state(), HostileState::Idle);
        assert!((far.body.vx - 36.0).abs() < 1e-4);
    }

    #[test]
    fn patrol_flips_on_interval() {
        let config = GameConfig::default();
        let mut mob = Hostile::mob(HostileId(1), 1000.0, 605.0, 1, &config);
        tick(&mut mob, 0.5, None, &config);
        assert!(mob.body.vx > 0.0);
        for _ in 0..3 {
            tick(&mut mob, 0.5, None, &config);
        }
        assert!(mob.body.vx < 0.0);
        assert_eq!(mob.facing(), Facing::Left);
    }

    #[test]
    fn boss_phase2_applies_once() {
        let config = GameConfig::default();
        let mut boss = Hostile::boss(HostileId(9), 1470.0, 578.0, 1, &config);

        let first = boss.take_hit(100.0, 0.0, &config).expect("alive");
        assert!(first.entered_phase2);
        assert!((boss.speed() - 182.0).abs() < 1e-3);
        assert!((boss.attack_interval() - 0.35).abs() < 1e-6);

        let second = boss.take_hit(10.0, 0.0, &config).expect("alive");
        assert!(!second.entered_phase2);
        assert!((boss.speed() - 182.0).abs() < 1e-3);
        assert!(boss.boss_extras().is_some_and(BossExtras::in_phase2));
        assert_eq!(boss.body.vx, 380.0);
    }

    #[test]
    fn boss_charges_in_phase2() {
        let config = GameConfig::default();
        let mut boss = Hostile::boss(HostileId(9), 1470.0, 578.0, 1, &config);
        boss.take_hit(120.0, 2000.0, &config);

        let player = target_at(600.0, 600.0);
        while boss.state() == HostileState::Stunned {
            tick(&mut boss, 0.05, player, &config);
        }
        tick(&mut boss, 0.05, player, &config);

        let extras = boss.boss_extras().expect("boss");
        assert!(extras.is_charging());
        assert_eq!(boss.state(), HostileState::Attacking);
        assert!((boss.body.vx + 182.0 * 2.5).abs() < 1e-2);
        let hitbox = boss.attack_hitbox().expect("charge box");
        assert_eq!(hitbox.width, 50.0);
        assert_eq!(hitbox.height, 80.0);
        assert_eq!(hitbox.x, boss.body.x - 40.0);

        for _ in 0..10 {
            tick(&mut boss, 0.05, player, &config);
        }
        assert!(!boss.boss_extras().is_some_and(BossExtras::is_charging));
    }

    #[test]
    fn boss_without_target_holds() {
        let config = GameConfig::default();
        let mut boss = Hostile::boss(HostileId(9), 1470.0, 578.0, 1, &config);
        tick(&mut boss, 0.05, None, &config);
        assert_eq!(boss.state(), HostileState::Idle);
        assert_eq!(boss.body.vx, 0.0);
    }

    #[test]
    fn boss_uses_horizontal_distance() {
        let config = GameConfig::default();
        let mut boss = Hostile::boss(HostileId(9), 1470.0, 578.0, 1, &config);
        // 60 px apart horizontally, far apart vertically: still in melee range.
        tick(&mut boss, 0.05, target_at(1560.0, 100.0), &config);
        assert_eq!(boss.state(), HostileState::Attacking);
        assert_eq!(boss.attack_hitbox().map(|h| h.height), Some(48.0));
    }
}
