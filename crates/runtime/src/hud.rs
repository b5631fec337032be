//! HUD model: the animated numbers a screen-space overlay draws.

use brawl_core::math::lerp;

use crate::config::HudConfig;

/// Values the HUD reads each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct HudInput<'a> {
    pub hp: f32,
    pub max_hp: f32,
    pub elo: u32,
    pub level: u32,
    pub message: Option<&'a str>,
    pub game_over: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Hud {
    /// Displayed health fill in [0, 1], easing toward the real ratio.
    pub hp_ratio: f32,
    pub hp: f32,
    pub elo: u32,
    /// Displayed fill of the current ELO segment.
    pub elo_ratio: f32,
    pub level: u32,
    /// Last banner text, kept while it fades out.
    pub message: Option<String>,
    pub message_alpha: f32,
    pub game_over: bool,
}

impl Hud {
    pub fn new(max_hp: f32, elo: u32) -> Self {
        Self {
            hp_ratio: 1.0,
            hp: max_hp,
            elo,
            elo_ratio: 0.0,
            level: 1,
            message: None,
            message_alpha: 0.0,
            game_over: false,
        }
    }

    pub fn update(&mut self, dt: f32, input: HudInput<'_>, config: &HudConfig) {
        let factor = (config.lerp * dt).min(1.0);

        let hp_target = if input.max_hp > 0.0 {
            (input.hp / input.max_hp).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.hp_ratio = lerp(self.hp_ratio, hp_target, factor);
        self.hp = input.hp;

        let segment = config.elo_segment.max(1);
        let elo_target = (input.elo % segment) as f32 / segment as f32;
        self.elo_ratio = lerp(self.elo_ratio, elo_target, factor);
        self.elo = input.elo;
        self.level = input.level;
        self.game_over = input.game_over;

        match input.message {
            Some(text) => {
                self.message_alpha = 1.0;
                if self.message.as_deref() != Some(text) {
                    self.message = Some(text.to_owned());
                }
            }
            None => {
                self.message_alpha = (self.message_alpha - dt * config.message_fade).max(0.0);
                if self.message_alpha == 0.0 {
                    self.message = None;
                }
            }
        }
    }
}
