//! The player character.
//!
//! [`Player::update`] advances one tick of the state machine from a polled
//! [`InputSnapshot`]. Collision and damage come in from the outside through
//! [`Player::land_on`], [`Player::take_hit`] and [`Player::heal`].

mod health;
mod state;

pub use health::Health;
pub use state::{PlayerMode, PlayerState};

use crate::body::{Body, Facing};
use crate::combat::{HitLedger, Knockback};
use crate::config::{FeelConfig, GameConfig, PlayerConfig};
use crate::input::InputSnapshot;
use crate::math::{Rect, ease_out_cubic};
use crate::timer::Countdown;

/// Vertical offset of the strike box centre relative to the body centre.
const STRIKE_CENTER_OFFSET: f32 = -4.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Body,
    health: Health,
    facing: Facing,
    mode: PlayerMode,
    /// Idle, Running or Jumping; reported while `mode` is `Free`.
    locomotion: PlayerState,
    attack_cooldown: Countdown,
    attack_buffered: bool,
    attack_hitbox: Option<Rect>,
    invuln: Countdown,
    dash_cooldown: Countdown,
    coyote: Countdown,
    jump_buffer: Countdown,
    successful_hits: u32,
    flicker_elapsed: f32,
    visible: bool,
    /// Hostiles whose current swing already landed on the player.
    pub struck_by: HitLedger,
}

impl Player {
    pub fn new(x: f32, y: f32, config: &PlayerConfig) -> Self {
        Self {
            body: Body::new(x, y, config.width, config.height),
            health: Health::new(config.max_hp),
            facing: Facing::Right,
            mode: PlayerMode::Free,
            locomotion: PlayerState::Idle,
            attack_cooldown: Countdown::EXPIRED,
            attack_buffered: false,
            attack_hitbox: None,
            invuln: Countdown::EXPIRED,
            dash_cooldown: Countdown::EXPIRED,
            coyote: Countdown::EXPIRED,
            jump_buffer: Countdown::EXPIRED,
            successful_hits: 0,
            flicker_elapsed: 0.0,
            visible: true,
            struck_by: HitLedger::new(),
        }
    }

    /// Replaces this player with a fresh one at `(x, y)`. The only way out of `Dead`.
    pub fn reset(&mut self, x: f32, y: f32, config: &PlayerConfig) {
        *self = Self::new(x, y, config);
    }

    /// Moves the player without touching health or combat state.
    pub fn place_at(&mut self, x: f32, y: f32) {
        self.body.place_at(x, y);
    }

    pub fn state(&self) -> PlayerState {
        match self.mode {
            PlayerMode::Free => self.locomotion,
            PlayerMode::Attacking { .. } => PlayerState::Attacking,
            PlayerMode::Dashing { .. } => PlayerState::Dashing,
            PlayerMode::Hit => PlayerState::Hit,
            PlayerMode::Dead => PlayerState::Dead,
        }
    }

    #[inline]
    pub fn mode(&self) -> &PlayerMode {
        &self.mode
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.mode.is_dead()
    }

    #[inline]
    pub fn health(&self) -> &Health {
        &self.health
    }

    #[inline]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Live strike box; `Some` only while attacking.
    #[inline]
    pub fn attack_hitbox(&self) -> Option<Rect> {
        self.attack_hitbox
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invuln.is_running() || matches!(self.mode, PlayerMode::Dashing { invulnerable: true, .. })
    }

    pub fn is_dash_invulnerable(&self) -> bool {
        matches!(self.mode, PlayerMode::Dashing { invulnerable: true, .. })
    }

    /// Flicker phase while invulnerable; renderers skip the body when false.
    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn successful_hits(&self) -> u32 {
        self.successful_hits
    }

    pub fn attack_buffered(&self) -> bool {
        self.attack_buffered
    }

    /// Advances the player by one tick.
    ///
    /// `level` gates dash invulnerability. Ground contact is cleared at the end
    /// of the tick; collision re-establishes it through [`Player::land_on`].
    pub fn update(
        &mut self,
        dt: f32,
        input: InputSnapshot,
        world_width: f32,
        level: u32,
        config: &GameConfig,
    ) {
        if self.mode.is_dead() {
            self.body.apply_gravity(config.physics.gravity, dt);
            self.body.y += self.body.vy * dt;
            self.attack_hitbox = None;
            return;
        }

        let player = &config.player;
        let feel = &config.feel;

        self.health.tick_overheal(dt, feel);
        self.tick_timers(dt);
        self.update_flicker(dt, player.flicker_interval);

        if self.mode == PlayerMode::Hit
            && self.invuln.remaining() < player.invuln_duration - player.hit_stagger
        {
            self.mode = PlayerMode::Free;
        }

        if input.dash() && self.dash_cooldown.is_expired() && self.can_dash(config) {
            self.start_dash(level, config);
        }
        self.update_dash(config);

        let moving = self.update_movement(input, player);
        self.update_jump(input, player, feel);
        self.update_attack(input, config);

        match self.mode {
            PlayerMode::Attacking { strike } if strike.is_running() => {
                self.attack_hitbox = Some(self.strike_box(player));
            }
            PlayerMode::Attacking { .. } => {
                self.mode = PlayerMode::Free;
                self.attack_hitbox = None;
            }
            _ => self.attack_hitbox = None,
        }

        if self.mode.is_dashing() {
            self.body.vy = 0.0;
        } else if !self.body.on_ground {
            self.body.apply_gravity(config.physics.gravity, dt);
        }

        self.body.integrate(dt);
        self.body.clamp_to_world(world_width);

        let was_on_ground = self.body.on_ground;
        self.body.on_ground = false;
        if was_on_ground && self.body.vy >= 0.0 {
            self.coyote.start(feel.coyote_time);
        }

        if self.mode == PlayerMode::Free {
            self.locomotion = if !was_on_ground {
                PlayerState::Jumping
            } else if moving {
                PlayerState::Running
            } else {
                PlayerState::Idle
            };
        }
    }

    /// Collision callback: the body rests on `surface_y` this tick.
    pub fn land_on(&mut self, surface_y: f32, feel: &FeelConfig) {
        self.body.land_on(surface_y);
        self.coyote.start(feel.coyote_time);
    }

    /// Applies an incoming hit and reports whether it took effect.
    ///
    /// Ignored while invulnerable (including an invulnerable dash) and once dead.
    pub fn take_hit(&mut self, damage: f32, source_x: f32, config: &PlayerConfig) -> bool {
        if self.is_dash_invulnerable() || self.invuln.is_running() || self.mode.is_dead() {
            return false;
        }

        self.health.damage(damage);
        self.invuln.start(config.invuln_duration);

        let knockback = Knockback::new(config.knockback_x, config.knockback_y);
        let (vx, vy) = knockback.velocity(self.body.away_from(source_x));
        self.body.vx = vx;
        self.body.vy = vy;
        self.attack_hitbox = None;

        self.mode = if self.health.is_depleted() {
            PlayerMode::Dead
        } else {
            PlayerMode::Hit
        };
        true
    }

    /// Heals with overheal banking. No effect once dead.
    pub fn heal(&mut self, amount: f32, feel: &FeelConfig) {
        if self.is_alive() {
            self.health.heal(amount, feel);
        }
    }

    /// Counts a landed hit; returns `true` on every `hits_required`-th one.
    pub fn register_successful_hit(&mut self, hits_required: u32) -> bool {
        self.successful_hits += 1;
        if self.successful_hits >= hits_required {
            self.successful_hits = 0;
            true
        } else {
            false
        }
    }

    fn tick_timers(&mut self, dt: f32) {
        match &mut self.mode {
            PlayerMode::Attacking { strike } => {
                strike.tick(dt);
            }
            PlayerMode::Dashing { timer, .. } => {
                timer.tick(dt);
            }
            _ => {}
        }
        self.attack_cooldown.tick(dt);
        self.invuln.tick(dt);
        self.dash_cooldown.tick(dt);
        self.coyote.tick(dt);
        self.jump_buffer.tick(dt);
    }

    fn update_flicker(&mut self, dt: f32, interval: f32) {
        if self.invuln.is_running() {
            self.flicker_elapsed += dt;
            self.visible = (self.flicker_elapsed / interval).floor() as u32 % 2 == 0;
        } else {
            self.flicker_elapsed = 0.0;
            self.visible = true;
        }
    }

    fn can_dash(&self, config: &GameConfig) -> bool {
        match self.mode {
            PlayerMode::Attacking { strike } => {
                config.player.attack_duration - strike.remaining() >= config.dash.attack_cancel_time
            }
            PlayerMode::Dead => false,
            _ => true,
        }
    }

    fn start_dash(&mut self, level: u32, config: &GameConfig) {
        self.mode = PlayerMode::Dashing {
            timer: Countdown::new(config.dash.duration),
            invulnerable: level >= config.dash.invuln_level,
        };
        self.dash_cooldown.start(config.dash.cooldown);
        self.attack_hitbox = None;
    }

    fn update_dash(&mut self, config: &GameConfig) {
        let PlayerMode::Dashing { timer, .. } = self.mode else {
            return;
        };
        let dash = &config.dash;
        if timer.is_running() {
            let progress = timer.elapsed_fraction(dash.duration);
            let speed = dash.speed * (1.0 - ease_out_cubic(progress) * (1.0 - dash.ease_floor));
            self.body.vx = self.facing.sign() * speed;
            self.attack_hitbox = None;
        } else {
            self.mode = PlayerMode::Free;
            self.body.vx *= dash.end_velocity_scale;
        }
    }

    /// Returns whether horizontal input drove the body this tick.
    fn update_movement(&mut self, input: InputSnapshot, config: &PlayerConfig) -> bool {
        if matches!(self.mode, PlayerMode::Hit | PlayerMode::Dashing { .. }) {
            return false;
        }
        if input.left() {
            self.body.vx = -config.speed;
            self.facing = Facing::Left;
            true
        } else if input.right() {
            self.body.vx = config.speed;
            self.facing = Facing::Right;
            true
        } else {
            self.body.vx *= config.friction;
            if self.body.vx.abs() < config.stop_threshold {
                self.body.vx = 0.0;
            }
            false
        }
    }

    fn update_jump(&mut self, input: InputSnapshot, config: &PlayerConfig, feel: &FeelConfig) {
        if input.jump() {
            self.jump_buffer.start(feel.jump_buffer_time);
        }
        let grounded = self.body.on_ground || self.coyote.is_running();
        let busy = self.mode.is_attacking() || self.mode.is_dashing();
        if self.jump_buffer.is_running() && grounded && !busy {
            self.body.vy = config.jump_force;
            self.body.on_ground = false;
            self.coyote.clear();
            self.jump_buffer.clear();
        }
    }

    fn update_attack(&mut self, input: InputSnapshot, config: &GameConfig) {
        if input.attack() {
            let cooldown = self.attack_cooldown.remaining();
            if cooldown > 0.0 && cooldown <= config.feel.attack_buffer_time {
                self.attack_buffered = true;
            } else if self.attack_cooldown.is_expired() && !self.mode.is_dashing() {
                self.start_attack(&config.player);
            }
        }

        if self.attack_buffered && self.attack_cooldown.is_expired() && !self.mode.is_dashing() {
            self.start_attack(&config.player);
        }
    }

    fn start_attack(&mut self, config: &PlayerConfig) {
        self.mode = PlayerMode::Attacking {
            strike: Countdown::new(config.attack_duration),
        };
        self.attack_cooldown.start(config.attack_cooldown);
        self.attack_buffered = false;
        self.attack_hitbox = Some(self.strike_box(config));
    }

    fn strike_box(&self, config: &PlayerConfig) -> Rect {
        let center_y = self.body.center_y() + STRIKE_CENTER_OFFSET;
        let x = match self.facing {
            Facing::Right => self.body.x + self.body.width,
            Facing::Left => self.body.x - config.attack_range,
        };
        Rect::new(
            x,
            center_y - config.attack_height / 2.0,
            config.attack_range,
            config.attack_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const WORLD: f32 = 3000.0;

    fn grounded_player(config: &GameConfig) -> Player {
        let mut player = Player::new(100.0, 604.0, &config.player);
        player.land_on(660.0, &config.feel);
        player
    }

    fn step(player: &mut Player, input: InputSnapshot, config: &GameConfig) {
        player.update(DT, input, WORLD, 1, config);
        player.land_on(660.0, &config.feel);
    }

    #[test]
    fn attack_opens_hitbox_in_front() {
        let config = GameConfig::default();
        let mut player = grounded_player(&config);
        player.update(DT, InputSnapshot::ATTACK, WORLD, 1, &config);

        assert_eq!(player.state(), PlayerState::Attacking);
        let hitbox = player.attack_hitbox().expect("strike box");
        assert_eq!(hitbox.x, 136.0);
        assert_eq!(hitbox.width, 60.0);
        assert_eq!(hitbox.height, 40.0);
    }

    #[test]
    fn attack_hitbox_clears_after_duration() {
        let config = GameConfig::default();
        let mut player = grounded_player(&config);
        step(&mut player, InputSnapshot::ATTACK, &config);
        for _ in 0..12 {
            step(&mut player, InputSnapshot::empty(), &config);
        }
        assert!(player.attack_hitbox().is_none());
        assert_eq!(player.state(), PlayerState::Idle);
    }

    #[test]
    fn attack_during_cooldown_tail_is_buffered() {
        let config = GameConfig::default();
        let mut player = grounded_player(&config);
        step(&mut player, InputSnapshot::ATTACK, &config);
        // 0.4 cooldown: 19 ticks leaves ~0.083 s, inside the buffer window.
        for _ in 0..19 {
            step(&mut player, InputSnapshot::empty(), &config);
        }
        step(&mut player, InputSnapshot::ATTACK, &config);
        assert!(player.attack_buffered());
        assert!(player.attack_hitbox().is_none());

        for _ in 0..6 {
            step(&mut player, InputSnapshot::empty(), &config);
        }
        assert!(!player.attack_buffered());
        assert_eq!(player.state(), PlayerState::Attacking);
    }

    #[test]
    fn attack_early_in_cooldown_is_dropped() {
        let config = GameConfig::default();
        let mut player = grounded_player(&config);
        step(&mut player, InputSnapshot::ATTACK, &config);
        // Strike over, ~0.18 s of cooldown left: outside the buffer window.
        for _ in 0..12 {
            step(&mut player, InputSnapshot::empty(), &config);
        }
        assert_eq!(player.state(), PlayerState::Idle);
        step(&mut player, InputSnapshot::ATTACK, &config);
        assert!(!player.attack_buffered());

        for _ in 0..30 {
            step(&mut player, InputSnapshot::empty(), &config);
            assert_ne!(player.state(), PlayerState::Attacking);
            assert!(player.attack_hitbox().is_none());
        }
    }

    #[test]
    fn invulnerability_blocks_follow_up_hits() {
        let config = GameConfig::default();
        let mut player = grounded_player(&config);
        assert!(player.take_hit(10.0, 0.0, &config.player));
        assert_eq!(player.health().current(), 90.0);
        assert_eq!(player.state(), PlayerState::Hit);
        assert!(player.body.vx > 0.0);

        let vx = player.body.vx;
        assert!(!player.take_hit(10.0, 500.0, &config.player));
        assert_eq!(player.health().current(), 90.0);
        assert_eq!(player.body.vx, vx);
    }

    #[test]
    fn hit_stagger_clears_after_window() {
        let config = GameConfig::default();
        let mut player = grounded_player(&config);
        player.take_hit(10.0, 0.0, &config.player);
        for _ in 0..10 {
            step(&mut player, InputSnapshot::empty(), &config);
        }
        assert_ne!(player.state(), PlayerState::Hit);
        assert!(player.is_invulnerable());
    }

    #[test]
    fn lethal_hit_is_terminal() {
        let config = GameConfig::default();
        let mut player = grounded_player(&config);
        assert!(player.take_hit(150.0, 0.0, &config.player));
        assert_eq!(player.state(), PlayerState::Dead);
        assert_eq!(player.health().current(), 0.0);

        for _ in 0..120 {
            player.update(DT, InputSnapshot::ATTACK | InputSnapshot::DASH, WORLD, 1, &config);
        }
        assert_eq!(player.state(), PlayerState::Dead);
        assert!(player.attack_hitbox().is_none());
        assert!(!player.take_hit(10.0, 0.0, &config.player));

        player.heal(50.0, &config.feel);
        assert_eq!(player.health().current(), 0.0);

        player.reset(200.0, 500.0, &config.player);
        assert!(player.is_alive());
        assert_eq!(player.health().current(), 100.0);
    }

    #[test]
    fn hit_cancels_dash() {
        let config = GameConfig::default();
        let mut player = grounded_player(&config);
        step(&mut player, InputSnapshot::DASH, &config);
        assert_eq!(player.state(), PlayerState::Dashing);
        assert!(!player.is_dash_invulnerable());

        assert!(player.take_hit(10.0, 0.0, &config.player));
        assert_eq!(player.state(), PlayerState::Hit);
    }

    #[test]
    fn dash_is_invulnerable_from_unlock_level() {
        let config = GameConfig::default();
        let mut player = grounded_player(&config);
        player.update(DT, InputSnapshot::DASH, WORLD, 4, &config);
        assert!(player.is_dash_invulnerable());
        assert!(!player.take_hit(30.0, 0.0, &config.player));
        assert_eq!(player.health().current(), 100.0);
    }

    #[test]
    fn dash_eases_out_and_ends() {
        let config = GameConfig::default();
        let mut player = grounded_player(&config);
        step(&mut player, InputSnapshot::DASH, &config);
        let first = player.body.vx;
        assert_eq!(first, 680.0);

        step(&mut player, InputSnapshot::empty(), &config);
        assert!(player.body.vx < first);
        assert!(player.body.vx >= 680.0 * 0.4);

        for _ in 0..12 {
            step(&mut player, InputSnapshot::empty(), &config);
        }
        assert_ne!(player.state(), PlayerState::Dashing);
        assert!(player.body.vx < 680.0 * 0.4);
    }

    #[test]
    fn dash_cannot_cancel_a_fresh_attack() {
        let config = GameConfig::default();
        let mut player = grounded_player(&config);
        step(&mut player, InputSnapshot::ATTACK, &config);
        step(&mut player, InputSnapshot::DASH, &config);
        assert_eq!(player.state(), PlayerState::Attacking);

        for _ in 0..5 {
            step(&mut player, InputSnapshot::empty(), &config);
        }
        step(&mut player, InputSnapshot::DASH, &config);
        assert_eq!(player.state(), PlayerState::Dashing);
        assert!(player.attack_hitbox().is_none());
    }

    #[test]
    fn jump_uses_coyote_time_after_leaving_ground() {
        let config = GameConfig::default();
        let mut player = grounded_player(&config);
        // Walk off: one tick with no landing callback.
        player.update(DT, InputSnapshot::empty(), WORLD, 1, &config);
        assert!(!player.body.on_ground);

        player.update(DT, InputSnapshot::JUMP, WORLD, 1, &config);
        assert!(player.body.vy < 0.0);
        assert_eq!(player.state(), PlayerState::Jumping);
    }

    #[test]
    fn buffered_jump_fires_on_landing() {
        let config = GameConfig::default();
        let mut player = Player::new(100.0, 400.0, &config.player);
        for _ in 0..30 {
            player.update(DT, InputSnapshot::empty(), WORLD, 1, &config);
        }
        player.update(DT, InputSnapshot::JUMP, WORLD, 1, &config);
        assert!(player.body.vy > 0.0);

        player.land_on(660.0, &config.feel);
        player.update(DT, InputSnapshot::empty(), WORLD, 1, &config);
        assert!(player.body.vy < 0.0);
    }

    #[test]
    fn friction_stops_the_body() {
        let config = GameConfig::default();
        let mut player = grounded_player(&config);
        step(&mut player, InputSnapshot::RIGHT, &config);
        assert_eq!(player.state(), PlayerState::Running);
        for _ in 0..30 {
            step(&mut player, InputSnapshot::empty(), &config);
        }
        assert_eq!(player.body.vx, 0.0);
        assert_eq!(player.state(), PlayerState::Idle);
    }

    #[test]
    fn every_fourth_hit_signals_an_orb() {
        let config = GameConfig::default();
        let mut player = grounded_player(&config);
        let signals: Vec<bool> = (0..8)
            .map(|_| player.register_successful_hit(config.orb.hits_required))
            .collect();
        assert_eq!(
            signals,
            [false, false, false, true, false, false, false, true]
        );
    }

    #[test]
    fn position_clamped_to_world() {
        let config = GameConfig::default();
        let mut player = grounded_player(&config);
        player.body.x = 2.0;
        for _ in 0..10 {
            step(&mut player, InputSnapshot::LEFT, &config);
        }
        assert_eq!(player.body.x, 0.0);
    }
}
