//! Scripted input sources for headless runs.

use brawl_core::{Facing, FrameView, HostileView, InputSnapshot};

/// Horizontal distance at which the brawler stops walking and swings.
const REACH: f32 = 70.0;
/// Beyond this gap the brawler dashes to close in.
const DASH_GAP: f32 = 400.0;
/// A target whose feet are this far above the player's head is on a platform.
const PLATFORM_GAP: f32 = 40.0;

const ATTACK_EVERY: u64 = 24;
const JUMP_EVERY: u64 = 45;
const DASH_EVERY: u64 = 90;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ScriptKind {
    /// Never touches the controls
    Idle,
    /// Walks to the nearest hostile and keeps swinging
    #[default]
    Brawler,
}

/// Produces one [`InputSnapshot`] per frame from the last rendered view.
#[derive(Debug)]
pub struct Script {
    kind: ScriptKind,
    frame: u64,
    last_attack: Option<u64>,
    last_jump: Option<u64>,
    last_dash: Option<u64>,
}

impl Script {
    pub fn new(kind: ScriptKind) -> Self {
        Self {
            kind,
            frame: 0,
            last_attack: None,
            last_jump: None,
            last_dash: None,
        }
    }

    pub fn next_input(&mut self, view: &FrameView) -> InputSnapshot {
        self.frame += 1;
        match self.kind {
            ScriptKind::Idle => InputSnapshot::empty(),
            ScriptKind::Brawler => self.brawl(view),
        }
    }

    fn brawl(&mut self, view: &FrameView) -> InputSnapshot {
        let player = &view.player;
        let Some(target) = nearest_living(view) else {
            return InputSnapshot::empty();
        };

        let dx = target.bounds.center_x() - player.bounds.center_x();
        let toward = match Facing::from_sign(dx) {
            Facing::Left => InputSnapshot::LEFT,
            Facing::Right => InputSnapshot::RIGHT,
        };

        let mut input = InputSnapshot::empty();
        if dx.abs() > REACH {
            input |= toward;
            if dx.abs() > DASH_GAP && self.ready(self.last_dash, DASH_EVERY) {
                self.last_dash = Some(self.frame);
                input |= InputSnapshot::DASH;
            }
        } else if player.facing != Facing::from_sign(dx) {
            input |= toward;
        } else if self.ready(self.last_attack, ATTACK_EVERY) {
            self.last_attack = Some(self.frame);
            input |= InputSnapshot::ATTACK;
        }

        if target.bounds.bottom() < player.bounds.y - PLATFORM_GAP
            && self.ready(self.last_jump, JUMP_EVERY)
        {
            self.last_jump = Some(self.frame);
            input |= InputSnapshot::JUMP;
        }
        input
    }

    fn ready(&self, last: Option<u64>, every: u64) -> bool {
        last.is_none_or(|at| self.frame - at >= every)
    }
}

fn nearest_living(view: &FrameView) -> Option<&HostileView> {
    let x = view.player.bounds.center_x();
    view.hostiles
        .iter()
        .filter(|h| h.hp_ratio > 0.0)
        .min_by(|a, b| {
            let da = (a.bounds.center_x() - x).abs();
            let db = (b.bounds.center_x() - x).abs();
            da.total_cmp(&db)
        })
}
